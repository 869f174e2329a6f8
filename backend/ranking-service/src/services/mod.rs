pub mod converter;
pub mod embed;
pub mod loader;
pub mod ranking;

pub use converter::{Conversion, ConversionReport, ConvertError};
pub use embed::embed_markup;
pub use loader::RecordSet;
pub use ranking::{rank, rank_with_limit, RankedEntry, RankingLayer};
