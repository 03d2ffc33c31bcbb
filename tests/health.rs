use starwars_favorites_api::routes::health::health_check;

mod common;

#[tokio::test]
async fn health_check_returns_ok() {
    let response = health_check().await;
    assert_eq!(response.0.status, "ok");
}

#[tokio::test]
async fn health_route_and_fallback() -> anyhow::Result<()> {
    let (app, _state) = common::setup().await?;

    let (status, body) = common::get(&app, "/health").await;
    assert_eq!(status, 200);
    assert_eq!(body["status"], "ok");

    let (status, body) = common::get(&app, "/does-not-exist").await;
    assert_eq!(status, 404);
    assert_eq!(body["message"], "Not Found");

    Ok(())
}
