use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::{
    dto::favorites::{FavoriteCharacterEntry, FavoritePlanetEntry, UserFavorites},
    entity::{
        Characters, FavoriteCharacters, FavoritePlanets, Planets, favorite_characters,
        favorite_planets,
    },
    error::{
        AppError, AppResult, CHARACTER_ALREADY_FAVORITE, CHARACTER_NOT_FOUND, FAVORITE_NOT_FOUND,
        PLANET_ALREADY_FAVORITE, PLANET_NOT_FOUND,
    },
    middleware::acting_user::ActingUser,
    models::{Character, FavoriteCharacter, FavoritePlanet, Planet},
    services::{row_id, user_service::find_user},
    state::AppState,
};

pub async fn list_user_favorites(state: &AppState, user: &ActingUser) -> AppResult<UserFavorites> {
    let usuario = find_user(state, user.user_id).await?;

    let planetas = FavoritePlanets::find()
        .find_also_related(Planets)
        .filter(favorite_planets::Column::UsuarioId.eq(usuario.id))
        .order_by_asc(favorite_planets::Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(|(favorite, planet)| FavoritePlanetEntry {
            id: favorite.id,
            planeta: planet.map(Planet::from).into(),
            fecha_agregado: favorite.fecha_agregado,
        })
        .collect();

    let personajes = FavoriteCharacters::find()
        .find_also_related(Characters)
        .filter(favorite_characters::Column::UsuarioId.eq(usuario.id))
        .order_by_asc(favorite_characters::Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(|(favorite, character)| FavoriteCharacterEntry {
            id: favorite.id,
            personaje: character.map(Character::from).into(),
            fecha_agregado: favorite.fecha_agregado,
        })
        .collect();

    Ok(UserFavorites {
        usuario_id: usuario.id,
        planetas,
        personajes,
    })
}

pub async fn add_favorite_planet(
    state: &AppState,
    user: &ActingUser,
    planet_id: i64,
) -> AppResult<FavoritePlanet> {
    let usuario = find_user(state, user.user_id).await?;

    let planet_id = row_id(planet_id).ok_or_else(|| AppError::not_found(PLANET_NOT_FOUND))?;
    let planeta = Planets::find_by_id(planet_id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::not_found(PLANET_NOT_FOUND))?;

    let existing = FavoritePlanets::find()
        .filter(favorite_planets::Column::UsuarioId.eq(usuario.id))
        .filter(favorite_planets::Column::PlanetaId.eq(planeta.id))
        .one(&state.orm)
        .await?;
    if existing.is_some() {
        return Err(AppError::Conflict(PLANET_ALREADY_FAVORITE.into()));
    }

    // the unique index still catches a concurrent add that slipped past the check above
    let favorite = favorite_planets::ActiveModel {
        id: NotSet,
        usuario_id: Set(usuario.id),
        planeta_id: Set(planeta.id),
        fecha_agregado: Set(Some(Utc::now())),
    }
    .insert(&state.orm)
    .await
    .map_err(|err| AppError::from_insert(err, PLANET_ALREADY_FAVORITE))?;

    tracing::info!(
        user_id = usuario.id,
        planet_id = planeta.id,
        favorite_id = favorite.id,
        "favorite planet added"
    );

    Ok(FavoritePlanet::from(favorite))
}

pub async fn add_favorite_character(
    state: &AppState,
    user: &ActingUser,
    character_id: i64,
) -> AppResult<FavoriteCharacter> {
    let usuario = find_user(state, user.user_id).await?;

    let character_id =
        row_id(character_id).ok_or_else(|| AppError::not_found(CHARACTER_NOT_FOUND))?;
    let personaje = Characters::find_by_id(character_id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::not_found(CHARACTER_NOT_FOUND))?;

    let existing = FavoriteCharacters::find()
        .filter(favorite_characters::Column::UsuarioId.eq(usuario.id))
        .filter(favorite_characters::Column::PersonajeId.eq(personaje.id))
        .one(&state.orm)
        .await?;
    if existing.is_some() {
        return Err(AppError::Conflict(CHARACTER_ALREADY_FAVORITE.into()));
    }

    let favorite = favorite_characters::ActiveModel {
        id: NotSet,
        usuario_id: Set(usuario.id),
        personaje_id: Set(personaje.id),
        fecha_agregado: Set(Some(Utc::now())),
    }
    .insert(&state.orm)
    .await
    .map_err(|err| AppError::from_insert(err, CHARACTER_ALREADY_FAVORITE))?;

    tracing::info!(
        user_id = usuario.id,
        character_id = personaje.id,
        favorite_id = favorite.id,
        "favorite character added"
    );

    Ok(FavoriteCharacter::from(favorite))
}

/// Remove the acting user's link to a planet. An unknown or out-of-range user simply has no link.
pub async fn remove_favorite_planet(
    state: &AppState,
    user: &ActingUser,
    planet_id: i64,
) -> AppResult<()> {
    let (Some(usuario_id), Some(planeta_id)) = (row_id(user.user_id), row_id(planet_id)) else {
        return Err(AppError::not_found(FAVORITE_NOT_FOUND));
    };

    let result = FavoritePlanets::delete_many()
        .filter(favorite_planets::Column::UsuarioId.eq(usuario_id))
        .filter(favorite_planets::Column::PlanetaId.eq(planeta_id))
        .exec(&state.orm)
        .await?;

    if result.rows_affected == 0 {
        return Err(AppError::not_found(FAVORITE_NOT_FOUND));
    }

    tracing::info!(user_id = user.user_id, planet_id, "favorite planet removed");
    Ok(())
}

pub async fn remove_favorite_character(
    state: &AppState,
    user: &ActingUser,
    character_id: i64,
) -> AppResult<()> {
    let (Some(usuario_id), Some(personaje_id)) = (row_id(user.user_id), row_id(character_id))
    else {
        return Err(AppError::not_found(FAVORITE_NOT_FOUND));
    };

    let result = FavoriteCharacters::delete_many()
        .filter(favorite_characters::Column::UsuarioId.eq(usuario_id))
        .filter(favorite_characters::Column::PersonajeId.eq(personaje_id))
        .exec(&state.orm)
        .await?;

    if result.rows_affected == 0 {
        return Err(AppError::not_found(FAVORITE_NOT_FOUND));
    }

    tracing::info!(user_id = user.user_id, character_id, "favorite character removed");
    Ok(())
}
