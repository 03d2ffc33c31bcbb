use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "personaje")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nombre: String,
    pub genero: Option<String>,
    pub altura: Option<i32>,
    pub peso: Option<i32>,
    pub color_ojos: Option<String>,
    pub color_pelo: Option<String>,
    pub ano_nacimiento: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorite_characters::Entity")]
    FavoriteCharacters,
}

impl Related<super::favorite_characters::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoriteCharacters.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
