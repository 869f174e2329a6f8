use actix_web::{web, App, HttpServer};
use anyhow::{Context, Result};
use ranking_service::services::loader;
use ranking_service::{handlers, utils, AppState, Config, RankingLayer};
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;

#[actix_web::main]
async fn main() -> Result<()> {
    // Initialize tracing
    utils::init_tracing("info,actix_web=info,ranking_service=debug");

    // Load config
    let config = Config::from_env().context("Failed to load config")?;

    info!(
        "Starting {} on HTTP:{}",
        config.service.service_name, config.service.http_port
    );

    // Load dataset; a failed load leaves the service up with no records
    let records = loader::load(&config.dataset.dataset_path);
    if records.is_empty() {
        warn!(
            path = %config.dataset.dataset_path.display(),
            "Dataset is empty or unavailable - rankings will report dataset_unavailable"
        );
    }

    let state = web::Data::new(AppState::new(
        records,
        RankingLayer::new(config.ranking.ranking_top_n),
    ));

    let addr = (config.service.host.clone(), config.service.http_port);
    info!("HTTP server listening on {}:{}", addr.0, addr.1);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(TracingLogger::default())
            .configure(handlers::configure)
    })
    .bind(addr)
    .context("Failed to bind HTTP server")?
    .run()
    .await
    .context("HTTP server error")?;

    Ok(())
}
