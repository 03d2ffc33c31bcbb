#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode},
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, Set};
use serde_json::Value;
use starwars_favorites_api::{
    db::{create_orm_conn, run_migrations},
    entity::{characters, planets, users},
    routes::create_app,
    state::AppState,
};
use tower::ServiceExt;
use tower_http::normalize_path::NormalizePath;

pub type App = NormalizePath<Router>;

/// Fresh in-memory store with the schema applied, plus the router over it.
pub async fn setup() -> anyhow::Result<(App, AppState)> {
    let orm = create_orm_conn("sqlite::memory:").await?;
    run_migrations(&orm).await?;
    let state = AppState { orm };
    Ok((create_app(state.clone()), state))
}

pub async fn send(
    app: &App,
    method: Method,
    uri: &str,
    user_header: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(value) = user_header {
        builder = builder.header("X-User-Id", value);
    }
    let response = app
        .clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub async fn get(app: &App, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn create_user(state: &AppState, id: i32, email: &str) -> anyhow::Result<i32> {
    let user = users::ActiveModel {
        id: Set(id),
        email: Set(email.to_string()),
        nombre: Set(Some("Test".into())),
        apellido: NotSet,
        is_active: Set(true),
        fecha_suscripcion: Set(Utc::now()),
    }
    .insert(&state.orm)
    .await?;
    Ok(user.id)
}

pub async fn create_planet(state: &AppState, id: i32, nombre: &str) -> anyhow::Result<i32> {
    let planet = planets::ActiveModel {
        id: Set(id),
        nombre: Set(nombre.to_string()),
        clima: Set(Some("arid".into())),
        terreno: Set(Some("desert".into())),
        poblacion: Set(Some(200_000)),
        diametro: Set(Some(10465)),
        gravedad: Set(Some("1 standard".into())),
    }
    .insert(&state.orm)
    .await?;
    Ok(planet.id)
}

pub async fn create_character(state: &AppState, id: i32, nombre: &str) -> anyhow::Result<i32> {
    let character = characters::ActiveModel {
        id: Set(id),
        nombre: Set(nombre.to_string()),
        genero: Set(Some("male".into())),
        altura: Set(Some(172)),
        peso: Set(Some(77)),
        color_ojos: Set(Some("blue".into())),
        color_pelo: Set(Some("blond".into())),
        ano_nacimiento: Set(Some("19BBY".into())),
    }
    .insert(&state.orm)
    .await?;
    Ok(character.id)
}
