use demographics_core::{FlatRecord, Selection};

/// Score a record for a selection.
///
/// | age | gender | score                         |
/// |-----|--------|-------------------------------|
/// | set | set    | age column + gender column    |
/// | set | -      | age column                    |
/// | -   | set    | gender column                 |
/// | -   | -      | sum of all eight columns      |
pub fn score(record: &FlatRecord, selection: &Selection) -> f64 {
    match (selection.age_bracket, selection.gender) {
        (Some(bracket), Some(gender)) => record.age(bracket) + record.gender(gender),
        (Some(bracket), None) => record.age(bracket),
        (None, Some(gender)) => record.gender(gender),
        (None, None) => record.total(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use demographics_core::{AgeBracket, Gender};

    fn record() -> FlatRecord {
        FlatRecord::new("r1", "ko")
            .with_age(AgeBracket::Twenties, 5.0)
            .with_age(AgeBracket::Forties, 1.0)
            .with_gender(Gender::Male, 3.0)
            .with_gender(Gender::Female, 0.5)
    }

    #[test]
    fn test_age_and_gender() {
        let selection = Selection::new(Some(AgeBracket::Twenties), Some(Gender::Male));
        assert_eq!(score(&record(), &selection), 8.0);
    }

    #[test]
    fn test_age_only() {
        let selection = Selection::new(Some(AgeBracket::Twenties), None);
        assert_eq!(score(&record(), &selection), 5.0);
    }

    #[test]
    fn test_gender_only() {
        let selection = Selection::new(None, Some(Gender::Female));
        assert_eq!(score(&record(), &selection), 0.5);
    }

    #[test]
    fn test_no_selection_sums_every_column() {
        assert_eq!(score(&record(), &Selection::default()), 9.5);
    }
}
