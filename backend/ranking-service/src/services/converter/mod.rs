/// Record Converter
///
/// Turns the nested demographic prediction document into flat records.
///
/// # Rules
/// - Entries are visited in document order and emitted in that order
/// - Entries with a missing or null `language` or `predict` are skipped
/// - Age and gender labels are resolved through the fixed label tables;
///   absent labels score 0 and unknown labels are ignored
/// - Only a structurally malformed document is an error
pub mod raw;
pub mod writer;

pub use raw::{RawPredict, RawPredictionRecord, RawPredictionSet};
pub use writer::{write_csv, write_csv_file};

use demographics_core::{AgeBracket, FlatRecord, Gender};
use serde::Serialize;
use std::collections::HashMap;
use std::io::Read;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;

/// Counters for one conversion run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    pub total: usize,
    pub converted: usize,
    pub skipped_missing_language: usize,
    pub skipped_missing_predict: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Conversion {
    pub records: Vec<FlatRecord>,
    pub report: ConversionReport,
}

/// Parse a prediction document from a string and convert it.
pub fn convert_str(input: &str) -> Result<Conversion> {
    let document = serde_json::from_str(input)
        .map_err(|e| ConvertError::MalformedInput(e.to_string()))?;
    Ok(convert(RawPredictionSet::from_value(document)?))
}

/// Parse a prediction document from a reader and convert it.
pub fn convert_reader<R: Read>(reader: R) -> Result<Conversion> {
    let document = serde_json::from_reader(reader)
        .map_err(|e| ConvertError::MalformedInput(e.to_string()))?;
    Ok(convert(RawPredictionSet::from_value(document)?))
}

pub fn convert(raw: RawPredictionSet) -> Conversion {
    if raw.is_empty() {
        warn!("Prediction document has no entries");
    }

    let mut report = ConversionReport {
        total: raw.len(),
        ..ConversionReport::default()
    };
    let mut records = Vec::with_capacity(raw.len());

    for (item_id, entry) in raw.entries {
        let Some(language) = entry.language else {
            debug!(item_id = %item_id, "Skipping entry without language");
            report.skipped_missing_language += 1;
            continue;
        };
        let Some(predict) = entry.predict else {
            debug!(item_id = %item_id, "Skipping entry without predictions");
            report.skipped_missing_predict += 1;
            continue;
        };

        records.push(flatten(item_id, language, predict));
    }

    report.converted = records.len();

    info!(
        total = report.total,
        converted = report.converted,
        skipped_missing_language = report.skipped_missing_language,
        skipped_missing_predict = report.skipped_missing_predict,
        "Prediction conversion completed"
    );

    Conversion { records, report }
}

fn flatten(item_id: String, language: String, predict: RawPredict) -> FlatRecord {
    let mut record = FlatRecord::new(item_id, language);

    for (label, score) in labelled_scores(predict.predicted_ages) {
        match AgeBracket::from_source_label(&label) {
            Some(bracket) => *record.age_mut(bracket) = score,
            None => debug!(item_id = %record.item_id, label = %label, "Ignoring unknown age label"),
        }
    }

    for (label, score) in labelled_scores(predict.predicted_genders) {
        match Gender::from_source_label(&label) {
            Some(gender) => *record.gender_mut(gender) = score,
            None => {
                debug!(item_id = %record.item_id, label = %label, "Ignoring unknown gender label")
            }
        }
    }

    record
}

fn labelled_scores(
    scores: Option<HashMap<String, Option<f64>>>,
) -> impl Iterator<Item = (String, f64)> {
    scores
        .unwrap_or_default()
        .into_iter()
        .map(|(label, score)| (label, score.unwrap_or(0.0)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_scenario() {
        let input = r#"{
            "vid1": {"language": "ko", "predict": {"predicted_ages": {"20대": 10}, "predicted_genders": {"남": 4}}},
            "vid2": {"language": null, "predict": {"predicted_ages": {"30대": 7}, "predicted_genders": {"여": 2}}}
        }"#;

        let conversion = convert_str(input).unwrap();

        assert_eq!(conversion.records.len(), 1);
        let record = &conversion.records[0];
        assert_eq!(record.item_id, "vid1");
        assert_eq!(record.language, "ko");
        assert_eq!(record.age_20s, 10.0);
        assert_eq!(record.gender_male, 4.0);
        assert_eq!(record.total(), 14.0);
        assert_eq!(conversion.report.skipped_missing_language, 1);
    }

    #[test]
    fn test_all_labels_are_mapped() {
        let input = r#"{
            "v": {"language": "en", "predict": {
                "predicted_ages": {"0~9세": 1, "10대": 2, "20대": 3, "30대": 4, "40대": 5, "50대 이상": 6},
                "predicted_genders": {"남": 7, "여": 8}
            }}
        }"#;

        let record = convert_str(input).unwrap().records.remove(0);

        assert_eq!(record.age_0_9, 1.0);
        assert_eq!(record.age_10s, 2.0);
        assert_eq!(record.age_20s, 3.0);
        assert_eq!(record.age_30s, 4.0);
        assert_eq!(record.age_40s, 5.0);
        assert_eq!(record.age_50plus, 6.0);
        assert_eq!(record.gender_male, 7.0);
        assert_eq!(record.gender_female, 8.0);
    }

    #[test]
    fn test_missing_labels_default_to_zero() {
        let input = r#"{
            "a": {"language": "ko", "predict": {"predicted_ages": {"40대": 0.25}}},
            "b": {"language": "ko", "predict": {"predicted_ages": null, "predicted_genders": {"여": null}}},
            "c": {"language": "ko", "predict": {}}
        }"#;

        let records = convert_str(input).unwrap().records;

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].age_40s, 0.25);
        assert_eq!(records[0].age_20s, 0.0);
        assert_eq!(records[0].gender_male, 0.0);
        assert_eq!(records[1].total(), 0.0);
        assert_eq!(records[2].total(), 0.0);
    }

    #[test]
    fn test_unknown_labels_are_ignored() {
        let input = r#"{
            "a": {"language": "ko", "predict": {"predicted_ages": {"0-9세": 9, "60대": 3}, "predicted_genders": {"남성": 5}}}
        }"#;

        let records = convert_str(input).unwrap().records;

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].total(), 0.0);
    }

    #[test]
    fn test_skips_missing_language_or_predict() {
        let input = r#"{
            "no_lang": {"predict": {"predicted_ages": {"20대": 1}}},
            "null_predict": {"language": "ko", "predict": null},
            "no_predict": {"language": "ko"},
            "ok": {"language": "ja", "predict": {"predicted_genders": {"여": 2}}}
        }"#;

        let conversion = convert_str(input).unwrap();

        let ids: Vec<&str> = conversion.records.iter().map(|r| r.item_id.as_str()).collect();
        assert_eq!(ids, vec!["ok"]);
        assert_eq!(
            conversion.report,
            ConversionReport {
                total: 4,
                converted: 1,
                skipped_missing_language: 1,
                skipped_missing_predict: 2,
            }
        );
    }

    #[test]
    fn test_preserves_document_order() {
        let input = r#"{
            "zeta": {"language": "ko", "predict": {}},
            "alpha": {"language": "ko", "predict": {}},
            "mid": {"language": "ko", "predict": {}}
        }"#;

        let ids: Vec<String> = convert_str(input)
            .unwrap()
            .records
            .into_iter()
            .map(|r| r.item_id)
            .collect();

        assert_eq!(ids, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_empty_document() {
        let conversion = convert_str("{}").unwrap();
        assert!(conversion.records.is_empty());
        assert_eq!(conversion.report.total, 0);
    }

    #[test]
    fn test_convert_empty_set() {
        let conversion = convert(RawPredictionSet::default());
        assert!(conversion.records.is_empty());
        assert_eq!(conversion.report, ConversionReport::default());
    }

    #[test]
    fn test_malformed_documents() {
        for input in [
            "[1, 2, 3]",
            "not json",
            r#"{"a": "string entry"}"#,
            r#"{"a": null}"#,
            r#"{"a": {"language": "ko", "predict": "oops"}}"#,
            r#"{"a": {"language": 42, "predict": {}}}"#,
            r#"{"a": {"language": "ko", "predict": {"predicted_ages": {"20대": "high"}}}}"#,
        ] {
            let result = convert_str(input);
            assert!(
                matches!(result, Err(ConvertError::MalformedInput(_))),
                "expected malformed input for {input}"
            );
        }
    }

    #[test]
    fn test_convert_reader() {
        let input = r#"{"v": {"language": "ko", "predict": {"predicted_genders": {"남": 1.5}}}}"#.as_bytes();
        let conversion = convert_reader(input).unwrap();
        assert_eq!(conversion.records[0].gender_male, 1.5);
    }
}
