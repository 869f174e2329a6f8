pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

pub use config::Config;
pub use error::{AppError, Result};
pub use handlers::AppState;
pub use services::{RankedEntry, RankingLayer, RecordSet};
