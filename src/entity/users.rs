use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "usuario")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub nombre: Option<String>,
    pub apellido: Option<String>,
    pub is_active: bool,
    pub fecha_suscripcion: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorite_planets::Entity")]
    FavoritePlanets,
    #[sea_orm(has_many = "super::favorite_characters::Entity")]
    FavoriteCharacters,
}

impl Related<super::favorite_planets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoritePlanets.def()
    }
}

impl Related<super::favorite_characters::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoriteCharacters.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
