pub mod characters;
pub mod favorite_characters;
pub mod favorite_planets;
pub mod planets;
pub mod users;

pub use characters::Entity as Characters;
pub use favorite_characters::Entity as FavoriteCharacters;
pub use favorite_planets::Entity as FavoritePlanets;
pub use planets::Entity as Planets;
pub use users::Entity as Users;
