use sea_orm::{EntityTrait, QueryOrder};

use crate::{
    entity::{Characters, characters::Column},
    error::{AppError, AppResult, CHARACTER_NOT_FOUND},
    models::Character,
    services::row_id,
    state::AppState,
};

pub async fn list_characters(state: &AppState) -> AppResult<Vec<Character>> {
    let items = Characters::find()
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Character::from)
        .collect();
    Ok(items)
}

pub async fn get_character(state: &AppState, id: i64) -> AppResult<Character> {
    let id = row_id(id).ok_or_else(|| AppError::not_found(CHARACTER_NOT_FOUND))?;
    Characters::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(Character::from)
        .ok_or_else(|| AppError::not_found(CHARACTER_NOT_FOUND))
}
