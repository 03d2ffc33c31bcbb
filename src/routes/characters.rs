use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    error::AppResult, models::Character, response::MessageResponse,
    services::character_service, state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/people", get(list_characters))
        .route("/people/{people_id}", get(get_character))
}

#[utoipa::path(
    get,
    path = "/people",
    responses(
        (status = 200, description = "All characters", body = Vec<Character>)
    ),
    tag = "People"
)]
pub async fn list_characters(State(state): State<AppState>) -> AppResult<Json<Vec<Character>>> {
    let items = character_service::list_characters(&state).await?;
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/people/{people_id}",
    params(
        ("people_id" = i64, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Character", body = Character),
        (status = 404, description = "Character not found", body = MessageResponse),
    ),
    tag = "People"
)]
pub async fn get_character(
    Path(people_id): Path<i64>,
    State(state): State<AppState>,
) -> AppResult<Json<Character>> {
    let character = character_service::get_character(&state, people_id).await?;
    Ok(Json(character))
}
