use sea_orm::{EntityTrait, PaginatorTrait};
use starwars_favorites_api::entity::{Characters, Planets, Users};
use serde_json::json;

mod common;

#[tokio::test]
async fn empty_store_lists_are_empty() -> anyhow::Result<()> {
    let (app, _state) = common::setup().await?;

    for uri in ["/people", "/planets", "/users"] {
        let (status, body) = common::get(&app, uri).await;
        assert_eq!(status, 200, "{uri}");
        assert_eq!(body, json!([]), "{uri}");
    }
    Ok(())
}

#[tokio::test]
async fn unknown_character_is_not_found() -> anyhow::Result<()> {
    let (app, _state) = common::setup().await?;

    let (status, body) = common::get(&app, "/people/999").await;
    assert_eq!(status, 404);
    assert_eq!(body, json!({ "message": "Personaje no encontrado" }));
    Ok(())
}

#[tokio::test]
async fn characters_list_and_detail() -> anyhow::Result<()> {
    let (app, state) = common::setup().await?;
    common::create_character(&state, 1, "Luke Skywalker").await?;
    common::create_character(&state, 4, "Darth Vader").await?;

    let (status, body) = common::get(&app, "/people").await;
    assert_eq!(status, 200);
    let items = body.as_array().expect("array");
    assert_eq!(items.len() as u64, Characters::find().count(&state.orm).await?);
    assert_eq!(items[0]["nombre"], "Luke Skywalker");

    let (status, body) = common::get(&app, "/people/4").await;
    assert_eq!(status, 200);
    assert_eq!(body["id"], 4);
    assert_eq!(body["nombre"], "Darth Vader");
    assert_eq!(body["altura"], 172);

    let (status, _) = common::get(&app, "/people/2").await;
    assert_eq!(status, 404);
    Ok(())
}

#[tokio::test]
async fn planets_list_and_detail() -> anyhow::Result<()> {
    let (app, state) = common::setup().await?;
    common::create_planet(&state, 1, "Tatooine").await?;
    common::create_planet(&state, 2, "Hoth").await?;
    common::create_planet(&state, 3, "Dagobah").await?;

    let (status, body) = common::get(&app, "/planets").await;
    assert_eq!(status, 200);
    assert_eq!(
        body.as_array().expect("array").len() as u64,
        Planets::find().count(&state.orm).await?
    );

    let (status, body) = common::get(&app, "/planets/2").await;
    assert_eq!(status, 200);
    assert_eq!(body["id"], 2);
    assert_eq!(body["nombre"], "Hoth");

    let (status, body) = common::get(&app, "/planets/42").await;
    assert_eq!(status, 404);
    assert_eq!(body, json!({ "message": "Planeta no encontrado" }));
    Ok(())
}

#[tokio::test]
async fn users_list() -> anyhow::Result<()> {
    let (app, state) = common::setup().await?;
    common::create_user(&state, 1, "user@example.com").await?;
    common::create_user(&state, 2, "leia@example.com").await?;

    let (status, body) = common::get(&app, "/users").await;
    assert_eq!(status, 200);
    let items = body.as_array().expect("array");
    assert_eq!(items.len() as u64, Users::find().count(&state.orm).await?);
    assert_eq!(items[1]["email"], "leia@example.com");
    Ok(())
}

#[tokio::test]
async fn hello_user() -> anyhow::Result<()> {
    let (app, _state) = common::setup().await?;

    let (status, body) = common::get(&app, "/user").await;
    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({ "msg": "Hello, this is your GET /user response " })
    );
    Ok(())
}

#[tokio::test]
async fn out_of_range_ids_are_not_found() -> anyhow::Result<()> {
    let (app, _state) = common::setup().await?;

    let (status, body) = common::get(&app, "/people/99999999999").await;
    assert_eq!(status, 404);
    assert_eq!(body, json!({ "message": "Personaje no encontrado" }));

    let (status, body) = common::get(&app, "/planets/99999999999").await;
    assert_eq!(status, 404);
    assert_eq!(body, json!({ "message": "Planeta no encontrado" }));
    Ok(())
}

#[tokio::test]
async fn trailing_slash_is_ignored() -> anyhow::Result<()> {
    let (app, state) = common::setup().await?;
    common::create_character(&state, 1, "Luke Skywalker").await?;

    let (status, body) = common::get(&app, "/people/").await;
    assert_eq!(status, 200);
    assert_eq!(body.as_array().map(Vec::len), Some(1));

    let (status, body) = common::get(&app, "/people/1/").await;
    assert_eq!(status, 200);
    assert_eq!(body["nombre"], "Luke Skywalker");
    Ok(())
}
