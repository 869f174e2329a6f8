/// Raw prediction document types
///
/// The document is a JSON object keyed by item identifier. Only the fields
/// read by the converter are modeled; anything else in an entry is ignored.
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

use super::{ConvertError, Result};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPredictionRecord {
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub predict: Option<RawPredict>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPredict {
    #[serde(default)]
    pub predicted_ages: Option<HashMap<String, Option<f64>>>,
    #[serde(default)]
    pub predicted_genders: Option<HashMap<String, Option<f64>>>,
}

/// Parsed prediction document in document order.
#[derive(Debug, Clone, Default)]
pub struct RawPredictionSet {
    pub entries: Vec<(String, RawPredictionRecord)>,
}

impl RawPredictionSet {
    pub fn from_value(document: Value) -> Result<Self> {
        let items = match document {
            Value::Object(items) => items,
            other => {
                return Err(ConvertError::MalformedInput(format!(
                    "expected an object keyed by item id, found {}",
                    json_type_name(&other)
                )))
            }
        };

        let mut entries = Vec::with_capacity(items.len());
        for (item_id, value) in items {
            if !value.is_object() {
                return Err(ConvertError::MalformedInput(format!(
                    "item {item_id}: expected an object, found {}",
                    json_type_name(&value)
                )));
            }

            let record: RawPredictionRecord = serde_json::from_value(value)
                .map_err(|e| ConvertError::MalformedInput(format!("item {item_id}: {e}")))?;
            entries.push((item_id, record));
        }

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
