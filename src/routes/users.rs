use axum::{Json, Router, extract::State, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{error::AppResult, models::User, services::user_service, state::AppState};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HelloResponse {
    pub msg: String,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/user", get(hello_user))
        .route("/users", get(list_users))
}

#[utoipa::path(
    get,
    path = "/user",
    responses(
        (status = 200, description = "Greeting", body = HelloResponse)
    ),
    tag = "Users"
)]
pub async fn hello_user() -> Json<HelloResponse> {
    Json(HelloResponse {
        msg: "Hello, this is your GET /user response ".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users", body = Vec<User>)
    ),
    tag = "Users"
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let items = user_service::list_users(&state).await?;
    Ok(Json(items))
}
