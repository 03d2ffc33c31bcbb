use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Usuario::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Usuario::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Usuario::Email)
                            .string_len(120)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Usuario::Nombre).string_len(80))
                    .col(ColumnDef::new(Usuario::Apellido).string_len(80))
                    .col(
                        ColumnDef::new(Usuario::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Usuario::FechaSuscripcion)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Personaje::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Personaje::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Personaje::Nombre).string_len(120).not_null())
                    .col(ColumnDef::new(Personaje::Genero).string_len(40))
                    .col(ColumnDef::new(Personaje::Altura).integer())
                    .col(ColumnDef::new(Personaje::Peso).integer())
                    .col(ColumnDef::new(Personaje::ColorOjos).string_len(40))
                    .col(ColumnDef::new(Personaje::ColorPelo).string_len(40))
                    .col(ColumnDef::new(Personaje::AnoNacimiento).string_len(20))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Planeta::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Planeta::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Planeta::Nombre).string_len(120).not_null())
                    .col(ColumnDef::new(Planeta::Clima).string_len(80))
                    .col(ColumnDef::new(Planeta::Terreno).string_len(80))
                    .col(ColumnDef::new(Planeta::Poblacion).big_integer())
                    .col(ColumnDef::new(Planeta::Diametro).integer())
                    .col(ColumnDef::new(Planeta::Gravedad).string_len(40))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Planeta::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Personaje::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Usuario::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Usuario {
    Table,
    Id,
    Email,
    Nombre,
    Apellido,
    IsActive,
    FechaSuscripcion,
}

#[derive(DeriveIden)]
pub enum Personaje {
    Table,
    Id,
    Nombre,
    Genero,
    Altura,
    Peso,
    ColorOjos,
    ColorPelo,
    AnoNacimiento,
}

#[derive(DeriveIden)]
pub enum Planeta {
    Table,
    Id,
    Nombre,
    Clima,
    Terreno,
    Poblacion,
    Diametro,
    Gravedad,
}
