use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::response::MessageResponse;

pub const USER_NOT_FOUND: &str = "Usuario no encontrado";
pub const CHARACTER_NOT_FOUND: &str = "Personaje no encontrado";
pub const PLANET_NOT_FOUND: &str = "Planeta no encontrado";
pub const FAVORITE_NOT_FOUND: &str = "Favorito no encontrado";
pub const PLANET_ALREADY_FAVORITE: &str = "Planeta ya es favorito";
pub const CHARACTER_ALREADY_FAVORITE: &str = "Personaje ya es favorito";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("ORM error")]
    OrmError(#[from] DbErr),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn not_found(message: &str) -> Self {
        AppError::NotFound(message.to_string())
    }

    /// Map a failed insert into a conflict when the store rejected a duplicate.
    pub fn from_insert(err: DbErr, conflict_message: &str) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                AppError::Conflict(conflict_message.to_string())
            }
            _ => AppError::OrmError(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message.clone()),
            AppError::Conflict(message) => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::OrmError(err) => {
                tracing::error!(error = %err, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        (status, axum::Json(MessageResponse::new(message))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
