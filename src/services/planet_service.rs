use sea_orm::{EntityTrait, QueryOrder};

use crate::{
    entity::{Planets, planets::Column},
    error::{AppError, AppResult, PLANET_NOT_FOUND},
    models::Planet,
    services::row_id,
    state::AppState,
};

pub async fn list_planets(state: &AppState) -> AppResult<Vec<Planet>> {
    let items = Planets::find()
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Planet::from)
        .collect();
    Ok(items)
}

pub async fn get_planet(state: &AppState, id: i64) -> AppResult<Planet> {
    let id = row_id(id).ok_or_else(|| AppError::not_found(PLANET_NOT_FOUND))?;
    Planets::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(Planet::from)
        .ok_or_else(|| AppError::not_found(PLANET_NOT_FOUND))
}
