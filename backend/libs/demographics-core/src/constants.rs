//! Demographic schema constants

/// Number of items returned by a ranking query unless configured otherwise
pub const DEFAULT_TOP_N: usize = 10;

/// Number of records shown by the data preview
pub const PREVIEW_ROWS: usize = 5;

/// Header row of the flat record CSV, in column order
pub const CSV_HEADERS: [&str; 10] = [
    "item_id",
    "language",
    "age_0_9",
    "age_10s",
    "age_20s",
    "age_30s",
    "age_40s",
    "age_50plus",
    "gender_male",
    "gender_female",
];
