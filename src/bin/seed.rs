use chrono::Utc;
use sea_orm::{ActiveValue::NotSet, DatabaseConnection, EntityTrait, PaginatorTrait, Set};
use starwars_favorites_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    entity::{Characters, Planets, Users, characters, planets, users},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;

    seed_users(&orm).await?;
    seed_characters(&orm).await?;
    seed_planets(&orm).await?;

    println!("Seed completed");
    Ok(())
}

async fn seed_users(orm: &DatabaseConnection) -> anyhow::Result<()> {
    if Users::find().count(orm).await? > 0 {
        println!("Users already present, skipping");
        return Ok(());
    }

    // first row of an empty table gets id 1, the fallback acting user
    Users::insert(users::ActiveModel {
        id: NotSet,
        email: Set("user@example.com".into()),
        nombre: Set(Some("Default".into())),
        apellido: Set(Some("User".into())),
        is_active: Set(true),
        fecha_suscripcion: Set(Utc::now()),
    })
    .exec(orm)
    .await?;

    println!("Seeded users");
    Ok(())
}

async fn seed_characters(orm: &DatabaseConnection) -> anyhow::Result<()> {
    if Characters::find().count(orm).await? > 0 {
        println!("Characters already present, skipping");
        return Ok(());
    }

    let people = vec![
        ("Luke Skywalker", "male", 172, 77, "blue", "blond", "19BBY"),
        ("Leia Organa", "female", 150, 49, "brown", "brown", "19BBY"),
        ("Darth Vader", "male", 202, 136, "yellow", "none", "41.9BBY"),
        ("Obi-Wan Kenobi", "male", 182, 77, "blue-gray", "auburn, white", "57BBY"),
    ];

    let models = people.into_iter().map(
        |(nombre, genero, altura, peso, color_ojos, color_pelo, ano_nacimiento)| {
            characters::ActiveModel {
                id: NotSet,
                nombre: Set(nombre.into()),
                genero: Set(Some(genero.into())),
                altura: Set(Some(altura)),
                peso: Set(Some(peso)),
                color_ojos: Set(Some(color_ojos.into())),
                color_pelo: Set(Some(color_pelo.into())),
                ano_nacimiento: Set(Some(ano_nacimiento.into())),
            }
        },
    );
    Characters::insert_many(models).exec(orm).await?;

    println!("Seeded characters");
    Ok(())
}

async fn seed_planets(orm: &DatabaseConnection) -> anyhow::Result<()> {
    if Planets::find().count(orm).await? > 0 {
        println!("Planets already present, skipping");
        return Ok(());
    }

    let worlds = vec![
        ("Tatooine", "arid", "desert", 200_000_i64, 10465, "1 standard"),
        ("Alderaan", "temperate", "grasslands, mountains", 2_000_000_000, 12500, "1 standard"),
        ("Hoth", "frozen", "tundra, ice caves", 0, 7200, "1.1 standard"),
        ("Dagobah", "murky", "swamp, jungles", 0, 8900, "N/A"),
    ];

    let models = worlds.into_iter().map(
        |(nombre, clima, terreno, poblacion, diametro, gravedad)| planets::ActiveModel {
            id: NotSet,
            nombre: Set(nombre.into()),
            clima: Set(Some(clima.into())),
            terreno: Set(Some(terreno.into())),
            poblacion: Set((poblacion > 0).then_some(poblacion)),
            diametro: Set(Some(diametro)),
            gravedad: Set(Some(gravedad.into())),
        },
    );
    Planets::insert_many(models).exec(orm).await?;

    println!("Seeded planets");
    Ok(())
}
