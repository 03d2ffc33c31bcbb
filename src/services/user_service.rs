use sea_orm::{EntityTrait, QueryOrder};

use crate::{
    entity::{Users, users},
    error::{AppError, AppResult, USER_NOT_FOUND},
    models::User,
    services::row_id,
    state::AppState,
};

pub async fn list_users(state: &AppState) -> AppResult<Vec<User>> {
    let items = Users::find()
        .order_by_asc(users::Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(User::from)
        .collect();
    Ok(items)
}

/// Load a user row, failing with "Usuario no encontrado" when absent.
pub async fn find_user(state: &AppState, id: i64) -> AppResult<users::Model> {
    let id = row_id(id).ok_or_else(|| AppError::not_found(USER_NOT_FOUND))?;
    Users::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::not_found(USER_NOT_FOUND))
}
