use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use footy_api::repo::countries::CountryRepo;
use footy_api::repo::seasons::SeasonRepo;
use footy_api::router::{build_router, AppState};
use footy_upstream::client::{BoxFuture, SportsClient};
use footy_upstream::error::UpstreamError;
use footy_upstream::models::UpstreamCountry;
use serde_json::json;

struct NoSports;

impl SportsClient for NoSports {
    fn fetch_countries(&self) -> BoxFuture<'_, Result<Vec<UpstreamCountry>, UpstreamError>> {
        Box::pin(async { Err(UpstreamError::Decode("unused".to_owned())) })
    }

    fn fetch_seasons(&self) -> BoxFuture<'_, Result<Vec<i64>, UpstreamError>> {
        Box::pin(async { Err(UpstreamError::Decode("unused".to_owned())) })
    }
}

fn make_state() -> AppState {
    let pool = sqlx::PgPool::connect_lazy("postgres://localhost/test").expect("lazy pool");
    AppState {
        countries: CountryRepo::new(pool.clone()),
        seasons: SeasonRepo::new(pool),
        sports: Arc::new(NoSports),
    }
}

#[tokio::test]
async fn create_with_zero_id_is_rejected_as_missing() {
    let server = TestServer::new(build_router(make_state())).unwrap();
    let response = server.post("/v1/seasons").json(&json!({"id": 0})).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["id"][0], "The id field is required.");
    assert_eq!(body["code"], 400);
}

#[tokio::test]
async fn create_with_absent_id_is_rejected_as_missing() {
    let server = TestServer::new(build_router(make_state())).unwrap();
    let response = server.post("/v1/seasons").json(&json!({})).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn find_with_non_numeric_id_is_a_bad_request() {
    let server = TestServer::new(build_router(make_state())).unwrap();
    let response = server.get("/v1/seasons/twenty").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "INVALID_SEASON_ID");
    assert_eq!(body["code"], 400);
}

#[tokio::test]
async fn list_with_invalid_order_returns_field_map() {
    let server = TestServer::new(build_router(make_state())).unwrap();
    let response = server
        .get("/v1/seasons")
        .add_query_params([("order", "upwards")])
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(
        body["error"]["order"][0],
        "The field: 'order' must be one of [desc asc]"
    );
}

#[tokio::test]
async fn list_without_reachable_db_returns_generic_500() {
    let server = TestServer::new(build_router(make_state())).unwrap();
    let response = server.get("/v1/seasons").await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}
