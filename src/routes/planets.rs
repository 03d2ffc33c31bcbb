use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    error::AppResult, models::Planet, response::MessageResponse, services::planet_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/planets", get(list_planets))
        .route("/planets/{planet_id}", get(get_planet))
}

#[utoipa::path(
    get,
    path = "/planets",
    responses(
        (status = 200, description = "All planets", body = Vec<Planet>)
    ),
    tag = "Planets"
)]
pub async fn list_planets(State(state): State<AppState>) -> AppResult<Json<Vec<Planet>>> {
    let items = planet_service::list_planets(&state).await?;
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/planets/{planet_id}",
    params(
        ("planet_id" = i64, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Planet", body = Planet),
        (status = 404, description = "Planet not found", body = MessageResponse),
    ),
    tag = "Planets"
)]
pub async fn get_planet(
    Path(planet_id): Path<i64>,
    State(state): State<AppState>,
) -> AppResult<Json<Planet>> {
    let planet = planet_service::get_planet(&state, planet_id).await?;
    Ok(Json(planet))
}
