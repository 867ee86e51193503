use actix_web::{web, App, HttpServer};
use anyhow::Context;
use backend::config::Config;
use backend::scores::{
    DefaultScoresUseCase, InMemoryScoresRepository, StaticVariantCatalog, VariantCatalog,
};
use std::sync::Arc;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::load().context("Failed to load configuration")?;

    let catalog = StaticVariantCatalog::from_json_file(
        &config.data.variants_path,
        config.scores.points_per_suit,
    )
    .with_context(|| format!("Failed to load variants from {}", config.data.variants_path))?;
    log::info!("Variant catalog ready with {} variants", catalog.len());

    let repo = InMemoryScoresRepository::from_json_file(&config.data.scores_data_path)
        .with_context(|| format!("Failed to load scores data from {}", config.data.scores_data_path))?;

    let usecase = web::Data::new(DefaultScoresUseCase::with_config(
        repo,
        Arc::new(catalog),
        &config.scores,
    ));

    log::info!("Starting server on {}:{}", config.server.host, config.server.port);

    HttpServer::new(move || {
        App::new()
            .wrap(backend::middleware::Logger)
            .service(backend::health::health_check)
            .configure(|cfg| backend::scores::controller::configure_routes(cfg, usecase.clone()))
    })
    .workers(config.server.workers)
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await?;

    Ok(())
}
