use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};

use crate::{
    dto::favorites::UserFavorites,
    error::AppResult,
    middleware::acting_user::ActingUser,
    models::{FavoriteCharacter, FavoritePlanet},
    response::MessageResponse,
    services::favorite_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users/favorites", get(list_user_favorites))
        .route(
            "/favorite/planet/{planet_id}",
            post(add_favorite_planet).delete(remove_favorite_planet),
        )
        .route(
            "/favorite/people/{people_id}",
            post(add_favorite_character).delete(remove_favorite_character),
        )
}

#[utoipa::path(
    get,
    path = "/users/favorites",
    params(
        ("user_id" = Option<i64>, Query, description = "Acting user, takes precedence over the header"),
        ("X-User-Id" = Option<i64>, Header, description = "Acting user when no query parameter is given; defaults to 1")
    ),
    responses(
        (status = 200, description = "Favorites of the acting user", body = UserFavorites),
        (status = 404, description = "User not found", body = MessageResponse)
    ),
    tag = "Favorites"
)]
pub async fn list_user_favorites(
    State(state): State<AppState>,
    user: ActingUser,
) -> AppResult<Json<UserFavorites>> {
    let favorites = favorite_service::list_user_favorites(&state, &user).await?;
    Ok(Json(favorites))
}

#[utoipa::path(
    post,
    path = "/favorite/planet/{planet_id}",
    params(
        ("planet_id" = i64, Path, description = "Planet ID"),
        ("user_id" = Option<i64>, Query, description = "Acting user"),
        ("X-User-Id" = Option<i64>, Header, description = "Acting user")
    ),
    responses(
        (status = 201, description = "Added to favorites", body = FavoritePlanet),
        (status = 400, description = "Already a favorite", body = MessageResponse),
        (status = 404, description = "User or planet not found", body = MessageResponse)
    ),
    tag = "Favorites"
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    user: ActingUser,
    Path(planet_id): Path<i64>,
) -> AppResult<(StatusCode, Json<FavoritePlanet>)> {
    let favorite = favorite_service::add_favorite_planet(&state, &user, planet_id).await?;
    Ok((StatusCode::CREATED, Json(favorite)))
}

#[utoipa::path(
    post,
    path = "/favorite/people/{people_id}",
    params(
        ("people_id" = i64, Path, description = "Character ID"),
        ("user_id" = Option<i64>, Query, description = "Acting user"),
        ("X-User-Id" = Option<i64>, Header, description = "Acting user")
    ),
    responses(
        (status = 201, description = "Added to favorites", body = FavoriteCharacter),
        (status = 400, description = "Already a favorite", body = MessageResponse),
        (status = 404, description = "User or character not found", body = MessageResponse)
    ),
    tag = "Favorites"
)]
pub async fn add_favorite_character(
    State(state): State<AppState>,
    user: ActingUser,
    Path(people_id): Path<i64>,
) -> AppResult<(StatusCode, Json<FavoriteCharacter>)> {
    let favorite = favorite_service::add_favorite_character(&state, &user, people_id).await?;
    Ok((StatusCode::CREATED, Json(favorite)))
}

#[utoipa::path(
    delete,
    path = "/favorite/planet/{planet_id}",
    params(
        ("planet_id" = i64, Path, description = "Planet ID"),
        ("user_id" = Option<i64>, Query, description = "Acting user"),
        ("X-User-Id" = Option<i64>, Header, description = "Acting user")
    ),
    responses(
        (status = 204, description = "Removed from favorites"),
        (status = 404, description = "Favorite not found", body = MessageResponse)
    ),
    tag = "Favorites"
)]
pub async fn remove_favorite_planet(
    State(state): State<AppState>,
    user: ActingUser,
    Path(planet_id): Path<i64>,
) -> AppResult<StatusCode> {
    favorite_service::remove_favorite_planet(&state, &user, planet_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/favorite/people/{people_id}",
    params(
        ("people_id" = i64, Path, description = "Character ID"),
        ("user_id" = Option<i64>, Query, description = "Acting user"),
        ("X-User-Id" = Option<i64>, Header, description = "Acting user")
    ),
    responses(
        (status = 204, description = "Removed from favorites"),
        (status = 404, description = "Favorite not found", body = MessageResponse)
    ),
    tag = "Favorites"
)]
pub async fn remove_favorite_character(
    State(state): State<AppState>,
    user: ActingUser,
    Path(people_id): Path<i64>,
) -> AppResult<StatusCode> {
    favorite_service::remove_favorite_character(&state, &user, people_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
