use super::catalog::{StaticVariantCatalog, VariantCatalog};
use super::repository::{InMemoryScoresRepository, ScoresRepository};
use super::usecase::ScoresUseCase;
use crate::error::ApiError;
use actix_web::{get, web, HttpResponse};

/// Use case wired with the in-memory repository and the static catalog
pub type DefaultScoresUseCase = ScoresUseCase<InMemoryScoresRepository, StaticVariantCatalog>;

pub async fn get_scores_handler_impl<R, C>(
    path: web::Path<String>,
    usecase: web::Data<ScoresUseCase<R, C>>,
) -> Result<HttpResponse, ApiError>
where
    R: ScoresRepository + 'static,
    C: VariantCatalog + 'static,
{
    let player_name = path.into_inner();
    let player_name = player_name.trim();
    if player_name.is_empty() {
        return Err(ApiError::bad_request("Player name is required"));
    }

    let report = usecase.get_scores_report(player_name).await?;
    Ok(HttpResponse::Ok().json(report))
}

#[get("/scores/{player}")]
pub async fn get_scores_handler(
    path: web::Path<String>,
    usecase: web::Data<DefaultScoresUseCase>,
) -> Result<HttpResponse, ApiError> {
    get_scores_handler_impl(path, usecase).await
}

pub fn configure_routes(cfg: &mut web::ServiceConfig, usecase: web::Data<DefaultScoresUseCase>) {
    log::debug!("Registering /scores routes");
    cfg.app_data(usecase).service(get_scores_handler);
}
