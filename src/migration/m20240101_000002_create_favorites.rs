use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_catalog::{Personaje, Planeta, Usuario};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlanetaFavorito::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PlanetaFavorito::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PlanetaFavorito::UsuarioId).integer().not_null())
                    .col(ColumnDef::new(PlanetaFavorito::PlanetaId).integer().not_null())
                    .col(ColumnDef::new(PlanetaFavorito::FechaAgregado).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_planeta_favorito_usuario")
                            .from(PlanetaFavorito::Table, PlanetaFavorito::UsuarioId)
                            .to(Usuario::Table, Usuario::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_planeta_favorito_planeta")
                            .from(PlanetaFavorito::Table, PlanetaFavorito::PlanetaId)
                            .to(Planeta::Table, Planeta::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // A user can favorite a planet at most once, even under concurrent adds.
        manager
            .create_index(
                Index::create()
                    .name("uq_planeta_favorito_usuario_planeta")
                    .table(PlanetaFavorito::Table)
                    .col(PlanetaFavorito::UsuarioId)
                    .col(PlanetaFavorito::PlanetaId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PersonajeFavorito::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PersonajeFavorito::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PersonajeFavorito::UsuarioId).integer().not_null())
                    .col(ColumnDef::new(PersonajeFavorito::PersonajeId).integer().not_null())
                    .col(ColumnDef::new(PersonajeFavorito::FechaAgregado).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_personaje_favorito_usuario")
                            .from(PersonajeFavorito::Table, PersonajeFavorito::UsuarioId)
                            .to(Usuario::Table, Usuario::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_personaje_favorito_personaje")
                            .from(PersonajeFavorito::Table, PersonajeFavorito::PersonajeId)
                            .to(Personaje::Table, Personaje::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_personaje_favorito_usuario_personaje")
                    .table(PersonajeFavorito::Table)
                    .col(PersonajeFavorito::UsuarioId)
                    .col(PersonajeFavorito::PersonajeId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PersonajeFavorito::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PlanetaFavorito::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PlanetaFavorito {
    Table,
    Id,
    UsuarioId,
    PlanetaId,
    FechaAgregado,
}

#[derive(DeriveIden)]
enum PersonajeFavorito {
    Table,
    Id,
    UsuarioId,
    PersonajeId,
    FechaAgregado,
}
