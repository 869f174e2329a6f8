//! Core demographic data models

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SelectionError;

/// Age bracket enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeBracket {
    #[serde(rename = "0_9")]
    Under10,
    #[serde(rename = "10s")]
    Teens,
    #[serde(rename = "20s")]
    Twenties,
    #[serde(rename = "30s")]
    Thirties,
    #[serde(rename = "40s")]
    Forties,
    #[serde(rename = "50plus")]
    FiftyPlus,
}

impl AgeBracket {
    /// All brackets in column order.
    pub const ALL: [AgeBracket; 6] = [
        AgeBracket::Under10,
        AgeBracket::Teens,
        AgeBracket::Twenties,
        AgeBracket::Thirties,
        AgeBracket::Forties,
        AgeBracket::FiftyPlus,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AgeBracket::Under10 => "0_9",
            AgeBracket::Teens => "10s",
            AgeBracket::Twenties => "20s",
            AgeBracket::Thirties => "30s",
            AgeBracket::Forties => "40s",
            AgeBracket::FiftyPlus => "50plus",
        }
    }

    /// CSV column holding this bracket's score.
    pub fn column(&self) -> &'static str {
        match self {
            AgeBracket::Under10 => "age_0_9",
            AgeBracket::Teens => "age_10s",
            AgeBracket::Twenties => "age_20s",
            AgeBracket::Thirties => "age_30s",
            AgeBracket::Forties => "age_40s",
            AgeBracket::FiftyPlus => "age_50plus",
        }
    }

    /// Label used by the prediction model output.
    pub fn source_label(&self) -> &'static str {
        match self {
            AgeBracket::Under10 => "0~9세",
            AgeBracket::Teens => "10대",
            AgeBracket::Twenties => "20대",
            AgeBracket::Thirties => "30대",
            AgeBracket::Forties => "40대",
            AgeBracket::FiftyPlus => "50대 이상",
        }
    }

    /// Label shown next to the score in a demographic breakdown.
    pub fn display_label(&self) -> &'static str {
        match self {
            AgeBracket::Under10 => "0-9세",
            AgeBracket::Teens => "10대",
            AgeBracket::Twenties => "20대",
            AgeBracket::Thirties => "30대",
            AgeBracket::Forties => "40대",
            AgeBracket::FiftyPlus => "50대 이상",
        }
    }

    /// Exact-match lookup of a prediction model label.
    pub fn from_source_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|bracket| bracket.source_label() == label)
    }
}

impl fmt::Display for AgeBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgeBracket {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|bracket| bracket.as_str() == s)
            .ok_or_else(|| SelectionError::InvalidAgeBracket(s.to_string()))
    }
}

/// Gender enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    pub fn column(&self) -> &'static str {
        match self {
            Gender::Male => "gender_male",
            Gender::Female => "gender_female",
        }
    }

    pub fn source_label(&self) -> &'static str {
        match self {
            Gender::Male => "남",
            Gender::Female => "여",
        }
    }

    pub fn display_label(&self) -> &'static str {
        match self {
            Gender::Male => "남성",
            Gender::Female => "여성",
        }
    }

    pub fn from_source_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|gender| gender.source_label() == label)
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|gender| gender.as_str() == s)
            .ok_or_else(|| SelectionError::InvalidGender(s.to_string()))
    }
}

/// Per-query demographic filter. `None` means "no selection".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub age_bracket: Option<AgeBracket>,
    pub gender: Option<Gender>,
}

impl Selection {
    pub fn new(age_bracket: Option<AgeBracket>, gender: Option<Gender>) -> Self {
        Self {
            age_bracket,
            gender,
        }
    }

    /// Parse raw selection codes. Empty strings and `none` mean "no selection".
    pub fn parse(age_bracket: Option<&str>, gender: Option<&str>) -> Result<Self, SelectionError> {
        Ok(Self {
            age_bracket: parse_optional(age_bracket)?,
            gender: parse_optional(gender)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.age_bracket.is_none() && self.gender.is_none()
    }
}

fn parse_optional<T>(raw: Option<&str>) -> Result<Option<T>, SelectionError>
where
    T: FromStr<Err = SelectionError>,
{
    match raw.map(str::trim) {
        None | Some("") | Some("none") => Ok(None),
        Some(code) => code.parse().map(Some),
    }
}

/// Normalized per-item prediction scores.
///
/// Field names double as CSV column names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatRecord {
    #[serde(alias = "video_id")]
    pub item_id: String,
    pub language: String,
    pub age_0_9: f64,
    pub age_10s: f64,
    pub age_20s: f64,
    pub age_30s: f64,
    pub age_40s: f64,
    pub age_50plus: f64,
    pub gender_male: f64,
    pub gender_female: f64,
}

impl FlatRecord {
    /// Record with every score set to zero.
    pub fn new(item_id: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            language: language.into(),
            age_0_9: 0.0,
            age_10s: 0.0,
            age_20s: 0.0,
            age_30s: 0.0,
            age_40s: 0.0,
            age_50plus: 0.0,
            gender_male: 0.0,
            gender_female: 0.0,
        }
    }

    pub fn with_age(mut self, bracket: AgeBracket, score: f64) -> Self {
        *self.age_mut(bracket) = score;
        self
    }

    pub fn with_gender(mut self, gender: Gender, score: f64) -> Self {
        *self.gender_mut(gender) = score;
        self
    }

    pub fn age(&self, bracket: AgeBracket) -> f64 {
        match bracket {
            AgeBracket::Under10 => self.age_0_9,
            AgeBracket::Teens => self.age_10s,
            AgeBracket::Twenties => self.age_20s,
            AgeBracket::Thirties => self.age_30s,
            AgeBracket::Forties => self.age_40s,
            AgeBracket::FiftyPlus => self.age_50plus,
        }
    }

    pub fn gender(&self, gender: Gender) -> f64 {
        match gender {
            Gender::Male => self.gender_male,
            Gender::Female => self.gender_female,
        }
    }

    pub fn age_mut(&mut self, bracket: AgeBracket) -> &mut f64 {
        match bracket {
            AgeBracket::Under10 => &mut self.age_0_9,
            AgeBracket::Teens => &mut self.age_10s,
            AgeBracket::Twenties => &mut self.age_20s,
            AgeBracket::Thirties => &mut self.age_30s,
            AgeBracket::Forties => &mut self.age_40s,
            AgeBracket::FiftyPlus => &mut self.age_50plus,
        }
    }

    pub fn gender_mut(&mut self, gender: Gender) -> &mut f64 {
        match gender {
            Gender::Male => &mut self.gender_male,
            Gender::Female => &mut self.gender_female,
        }
    }

    /// Sum of all eight age and gender scores.
    pub fn total(&self) -> f64 {
        AgeBracket::ALL.iter().map(|b| self.age(*b)).sum::<f64>()
            + Gender::ALL.iter().map(|g| self.gender(*g)).sum::<f64>()
    }
}
