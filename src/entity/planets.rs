use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "planeta")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nombre: String,
    pub clima: Option<String>,
    pub terreno: Option<String>,
    pub poblacion: Option<i64>,
    pub diametro: Option<i32>,
    pub gravedad: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorite_planets::Entity")]
    FavoritePlanets,
}

impl Related<super::favorite_planets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoritePlanets.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
