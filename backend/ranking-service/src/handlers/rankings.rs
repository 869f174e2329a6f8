use actix_web::{web, HttpResponse};
use demographics_core::Selection;
use tracing::info;

use super::AppState;
use crate::error::Result;
use crate::models::{RankingQuery, RankingResponse};

/// Rank the loaded records for the requested age bracket and gender
pub async fn get_rankings(
    state: web::Data<AppState>,
    query: web::Query<RankingQuery>,
) -> Result<HttpResponse> {
    let selection = Selection::parse(query.age.as_deref(), query.gender.as_deref())?;

    if state.records.is_empty() {
        info!("Ranking requested while dataset is unavailable");
        return Ok(HttpResponse::Ok().json(RankingResponse::dataset_unavailable(selection)));
    }

    let ranked = state.ranking.rank(state.records.records(), &selection);
    let response = RankingResponse::from_ranked(selection, &ranked);

    info!(
        age_bracket = ?selection.age_bracket,
        gender = ?selection.gender,
        results = response.items.len(),
        "Rankings served"
    );

    Ok(HttpResponse::Ok().json(response))
}
