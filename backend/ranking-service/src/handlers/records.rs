use actix_web::{web, HttpResponse};
use demographics_core::constants::PREVIEW_ROWS;

use super::AppState;
use crate::models::PreviewResponse;

/// First few loaded records, in file order
pub async fn preview_records(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(PreviewResponse {
        total: state.records.len(),
        records: state.records.head(PREVIEW_ROWS).to_vec(),
    })
}
