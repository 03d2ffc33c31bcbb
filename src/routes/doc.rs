use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::favorites::{FavoriteCharacterEntry, FavoritePlanetEntry, MissingTarget, UserFavorites},
    models::{Character, FavoriteCharacter, FavoritePlanet, Planet, User},
    response::MessageResponse,
    routes::{characters, favorites, health, planets, users},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        users::hello_user,
        users::list_users,
        characters::list_characters,
        characters::get_character,
        planets::list_planets,
        planets::get_planet,
        favorites::list_user_favorites,
        favorites::add_favorite_planet,
        favorites::add_favorite_character,
        favorites::remove_favorite_planet,
        favorites::remove_favorite_character
    ),
    components(
        schemas(
            User,
            Character,
            Planet,
            FavoritePlanet,
            FavoriteCharacter,
            FavoritePlanetEntry,
            FavoriteCharacterEntry,
            MissingTarget,
            UserFavorites,
            MessageResponse,
            users::HelloResponse,
            health::HealthData
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Users", description = "User endpoints"),
        (name = "People", description = "Character endpoints"),
        (name = "Planets", description = "Planet endpoints"),
        (name = "Favorites", description = "Favorite endpoints, acting as the user given by `user_id` or `X-User-Id`"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
