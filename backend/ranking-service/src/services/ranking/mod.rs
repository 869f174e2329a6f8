/// Ranking Module
///
/// Scores flat records against a demographic selection and returns the top N.
///
/// # Workflow
/// 1. Score every record for the selection (see `scorer`)
/// 2. Stable sort by score descending, so ties keep input order
/// 3. Truncate to N
///
/// Scores live in the returned `RankedEntry` list only; the record set is
/// never written to, so concurrent queries can share it freely.
pub mod layer;
pub mod scorer;

pub use layer::RankingLayer;
pub use scorer::score;

use demographics_core::constants::DEFAULT_TOP_N;
use demographics_core::{AgeBracket, FlatRecord, Gender, Selection};
use std::cmp::Ordering;

/// A record paired with its query-scoped score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedEntry<'a> {
    pub record: &'a FlatRecord,
    pub score: f64,
}

/// Top 10 records for the given age bracket and gender.
pub fn rank(
    records: &[FlatRecord],
    age_bracket: Option<AgeBracket>,
    gender: Option<Gender>,
) -> Vec<RankedEntry<'_>> {
    rank_with_limit(records, &Selection::new(age_bracket, gender), DEFAULT_TOP_N)
}

pub fn rank_with_limit<'a>(
    records: &'a [FlatRecord],
    selection: &Selection,
    limit: usize,
) -> Vec<RankedEntry<'a>> {
    let mut ranked: Vec<RankedEntry<'a>> = records
        .iter()
        .map(|record| RankedEntry {
            record,
            score: score(record, selection),
        })
        .collect();

    // sort_by is stable
    ranked.sort_by(|a, b| descending(a.score, b.score));
    ranked.truncate(limit);
    ranked
}

/// NaN sorts after every real score.
fn descending(a: f64, b: f64) -> Ordering {
    sort_key(b)
        .partial_cmp(&sort_key(a))
        .unwrap_or(Ordering::Equal)
}

fn sort_key(score: f64) -> f64 {
    if score.is_nan() {
        f64::NEG_INFINITY
    } else {
        score
    }
}
