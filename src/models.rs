use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::{characters, favorite_characters, favorite_planets, planets, users};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub nombre: Option<String>,
    pub apellido: Option<String>,
    pub is_active: bool,
    pub fecha_suscripcion: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Character {
    pub id: i32,
    pub nombre: String,
    pub genero: Option<String>,
    pub altura: Option<i32>,
    pub peso: Option<i32>,
    pub color_ojos: Option<String>,
    pub color_pelo: Option<String>,
    pub ano_nacimiento: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Planet {
    pub id: i32,
    pub nombre: String,
    pub clima: Option<String>,
    pub terreno: Option<String>,
    pub poblacion: Option<i64>,
    pub diametro: Option<i32>,
    pub gravedad: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FavoritePlanet {
    pub id: i32,
    pub usuario_id: i32,
    pub planeta_id: i32,
    pub fecha_agregado: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FavoriteCharacter {
    pub id: i32,
    pub usuario_id: i32,
    pub personaje_id: i32,
    pub fecha_agregado: Option<DateTime<Utc>>,
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            nombre: model.nombre,
            apellido: model.apellido,
            is_active: model.is_active,
            fecha_suscripcion: model.fecha_suscripcion,
        }
    }
}

impl From<characters::Model> for Character {
    fn from(model: characters::Model) -> Self {
        Self {
            id: model.id,
            nombre: model.nombre,
            genero: model.genero,
            altura: model.altura,
            peso: model.peso,
            color_ojos: model.color_ojos,
            color_pelo: model.color_pelo,
            ano_nacimiento: model.ano_nacimiento,
        }
    }
}

impl From<planets::Model> for Planet {
    fn from(model: planets::Model) -> Self {
        Self {
            id: model.id,
            nombre: model.nombre,
            clima: model.clima,
            terreno: model.terreno,
            poblacion: model.poblacion,
            diametro: model.diametro,
            gravedad: model.gravedad,
        }
    }
}

impl From<favorite_planets::Model> for FavoritePlanet {
    fn from(model: favorite_planets::Model) -> Self {
        Self {
            id: model.id,
            usuario_id: model.usuario_id,
            planeta_id: model.planeta_id,
            fecha_agregado: model.fecha_agregado,
        }
    }
}

impl From<favorite_characters::Model> for FavoriteCharacter {
    fn from(model: favorite_characters::Model) -> Self {
        Self {
            id: model.id,
            usuario_id: model.usuario_id,
            personaje_id: model.personaje_id,
            fecha_agregado: model.fecha_agregado,
        }
    }
}
