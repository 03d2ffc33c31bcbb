use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Character, Planet};

/// Stand-in for a favorite whose target row could not be loaded.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct MissingTarget {
    pub id: Option<i32>,
    pub nombre: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum FavoriteTarget<T> {
    Found(T),
    Missing(MissingTarget),
}

impl<T> From<Option<T>> for FavoriteTarget<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(target) => FavoriteTarget::Found(target),
            None => FavoriteTarget::Missing(MissingTarget::default()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FavoritePlanetEntry {
    pub id: i32,
    pub planeta: FavoriteTarget<Planet>,
    pub fecha_agregado: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FavoriteCharacterEntry {
    pub id: i32,
    pub personaje: FavoriteTarget<Character>,
    pub fecha_agregado: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserFavorites {
    pub usuario_id: i32,
    pub planetas: Vec<FavoritePlanetEntry>,
    pub personajes: Vec<FavoriteCharacterEntry>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn missing_target_serializes_with_null_fields() {
        let entry = FavoritePlanetEntry {
            id: 4,
            planeta: FavoriteTarget::from(None),
            fecha_agregado: None,
        };
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!({
                "id": 4,
                "planeta": { "id": null, "nombre": null },
                "fecha_agregado": null
            })
        );
    }

    #[test]
    fn found_target_serializes_inline() {
        let planet = Planet {
            id: 3,
            nombre: "Hoth".into(),
            clima: Some("frozen".into()),
            terreno: None,
            poblacion: None,
            diametro: Some(7200),
            gravedad: None,
        };
        let value = serde_json::to_value(FavoriteTarget::from(Some(planet))).unwrap();
        assert_eq!(value["id"], 3);
        assert_eq!(value["nombre"], "Hoth");
        assert_eq!(value["diametro"], 7200);
    }
}
