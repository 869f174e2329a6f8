/// HTTP handlers
///
/// A request to the ranking endpoint is the explicit "apply" of a selection;
/// nothing is re-ranked outside of it.
pub mod rankings;
pub mod records;

pub use rankings::get_rankings;
pub use records::preview_records;

use actix_web::{web, HttpResponse};
use std::sync::Arc;

use crate::error::AppError;
use crate::models::HealthResponse;
use crate::services::{RankingLayer, RecordSet};

/// Shared, read-only request state
#[derive(Debug, Clone)]
pub struct AppState {
    pub records: Arc<RecordSet>,
    pub ranking: RankingLayer,
}

impl AppState {
    pub fn new(records: RecordSet, ranking: RankingLayer) -> Self {
        Self {
            records: Arc::new(records),
            ranking,
        }
    }
}

pub async fn health(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        records: state.records.len(),
    })
}

/// Register routes under `/api/v1`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::Validation(err.to_string()).into()),
    )
    .service(
        web::scope("/api/v1")
            .route("/health", web::get().to(health))
            .route("/rankings", web::get().to(get_rankings))
            .route("/records/preview", web::get().to(preview_records)),
    );
}
