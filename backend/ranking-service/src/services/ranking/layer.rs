use demographics_core::constants::DEFAULT_TOP_N;
use demographics_core::{FlatRecord, Selection};
use tracing::debug;

use super::{rank_with_limit, RankedEntry};

/// Ranking Layer - demographic top-N selection
#[derive(Debug, Clone, Copy)]
pub struct RankingLayer {
    top_n: usize,
}

impl Default for RankingLayer {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_N)
    }
}

impl RankingLayer {
    pub fn new(top_n: usize) -> Self {
        Self { top_n }
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    pub fn rank<'a>(&self, records: &'a [FlatRecord], selection: &Selection) -> Vec<RankedEntry<'a>> {
        let ranked = rank_with_limit(records, selection, self.top_n);

        debug!(
            age_bracket = ?selection.age_bracket,
            gender = ?selection.gender,
            input_count = records.len(),
            output_count = ranked.len(),
            top_score = ranked.first().map(|e| e.score),
            "Ranking completed"
        );

        ranked
    }
}
