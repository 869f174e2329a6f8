//! Demographic prediction core types
//!
//! Shared data structures for the ranking service and the prediction converter

pub mod constants;
pub mod error;
pub mod models;

pub use error::SelectionError;
pub use models::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_headers_match_schema() {
        let mut expected = vec!["item_id", "language"];
        expected.extend(AgeBracket::ALL.iter().map(|b| b.column()));
        expected.extend(Gender::ALL.iter().map(|g| g.column()));

        assert_eq!(constants::CSV_HEADERS.to_vec(), expected);
    }

    #[test]
    fn test_selection_roundtrip_through_json() {
        let selection = Selection::parse(Some("50plus"), Some("female")).unwrap();
        let json = serde_json::to_value(selection).unwrap();

        assert_eq!(json["age_bracket"], "50plus");
        assert_eq!(json["gender"], "female");
    }
}
