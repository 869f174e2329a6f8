use demographics_core::{AgeBracket, FlatRecord, Gender, Selection};
use serde::{Deserialize, Serialize};

use crate::services::{embed_markup, RankedEntry};

/// Query string of the ranking endpoint. Empty or `none` means "no selection".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RankingQuery {
    pub age: Option<String>,
    pub gender: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingStatus {
    Ranked,
    /// Empty ranking over a loaded dataset. Only reachable by library callers
    /// of `RankingResponse::from_ranked`; the HTTP path always ranks at least
    /// one entry once records are loaded.
    NoMatches,
    DatasetUnavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DemographicCategory {
    Age,
    Gender,
}

/// One line of an item's demographic breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemographicScore {
    pub category: DemographicCategory,
    pub label: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedItem {
    pub rank: usize,
    pub item_id: String,
    pub language: String,
    pub score: f64,
    pub embed_html: String,
    pub demographics: Vec<DemographicScore>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingResponse {
    pub status: RankingStatus,
    pub selection: Selection,
    pub items: Vec<RankedItem>,
}

impl RankingResponse {
    pub fn dataset_unavailable(selection: Selection) -> Self {
        Self {
            status: RankingStatus::DatasetUnavailable,
            selection,
            items: Vec::new(),
        }
    }

    pub fn from_ranked(selection: Selection, ranked: &[RankedEntry<'_>]) -> Self {
        let status = if ranked.is_empty() {
            RankingStatus::NoMatches
        } else {
            RankingStatus::Ranked
        };

        let items = ranked
            .iter()
            .enumerate()
            .map(|(i, entry)| RankedItem {
                rank: i + 1,
                item_id: entry.record.item_id.clone(),
                language: entry.record.language.clone(),
                score: entry.score,
                embed_html: embed_markup(&entry.record.item_id),
                demographics: demographic_breakdown(entry.record),
            })
            .collect();

        Self {
            status,
            selection,
            items,
        }
    }
}

/// Age rows in bracket order, then gender rows.
pub fn demographic_breakdown(record: &FlatRecord) -> Vec<DemographicScore> {
    let ages = AgeBracket::ALL.iter().map(|bracket| DemographicScore {
        category: DemographicCategory::Age,
        label: bracket.display_label().to_string(),
        score: record.age(*bracket),
    });
    let genders = Gender::ALL.iter().map(|gender| DemographicScore {
        category: DemographicCategory::Gender,
        label: gender.display_label().to_string(),
        score: record.gender(*gender),
    });

    ages.chain(genders).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewResponse {
    pub total: usize,
    pub records: Vec<FlatRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub records: usize,
}
