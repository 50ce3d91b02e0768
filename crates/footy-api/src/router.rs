//! Axum router construction and shared application state.

use std::sync::Arc;

use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use footy_upstream::client::SportsClient;
use serde_json::json;

use crate::handlers;
use crate::repo::countries::CountryRepo;
use crate::repo::seasons::SeasonRepo;

/// Shared state handed to every handler: the repositories plus the
/// upstream client, all constructor-injected.
#[derive(Clone)]
pub struct AppState {
    /// Country storage.
    pub countries: CountryRepo,
    /// Season storage.
    pub seasons: SeasonRepo,
    /// API-Sports client used by the sync endpoints.
    pub sports: Arc<dyn SportsClient>,
}

/// Build the Axum application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/v1/", get(handlers::health::check))
        .route(
            "/v1/countries",
            post(handlers::countries::create).get(handlers::countries::list),
        )
        .route("/v1/countries/sync", post(handlers::countries::sync))
        .route(
            "/v1/countries/{id}",
            put(handlers::countries::update)
                .get(handlers::countries::find)
                .delete(handlers::countries::delete),
        )
        .route(
            "/v1/seasons",
            post(handlers::seasons::create).get(handlers::seasons::list),
        )
        .route("/v1/seasons/sync", post(handlers::seasons::sync))
        .route(
            "/v1/seasons/{id}",
            get(handlers::seasons::find).delete(handlers::seasons::delete),
        )
        .fallback(not_found)
        .with_state(state)
}

async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"error": "Not found", "code": 404})),
    )
}
