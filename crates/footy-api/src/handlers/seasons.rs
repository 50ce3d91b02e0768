//! Handlers for the `/v1/seasons` endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::ApiError;
use crate::models::{DataResponse, ListSeasonQuery, MessageResponse, Season, SeasonBody};
use crate::router::AppState;
use crate::validate::Rules;

const INVALID_SEASON_ID: &str = "INVALID_SEASON_ID";

fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest(INVALID_SEASON_ID.to_owned()))
}

/// Handle `POST /v1/seasons` — create a season year.
///
/// # Errors
///
/// Returns 400 with a field map when `id` is missing (0 counts as
/// missing), 500 on storage failure.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<SeasonBody>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    Rules::new().required_int("id", body.id).finish()?;

    state
        .seasons
        .create(body.id)
        .await
        .map_err(|_| ApiError::Internal)?;

    Ok((StatusCode::CREATED, Json(MessageResponse::success(201))))
}

/// Handle `GET /v1/seasons/{id}` — find a season by year.
///
/// A missed lookup is not an error; the data field is `null`.
///
/// # Errors
///
/// Returns 400 on a non-numeric id, 500 on storage failure.
pub async fn find(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DataResponse<Option<Season>>>, ApiError> {
    let id = parse_id(&id)?;
    let record = state
        .seasons
        .find(id)
        .await
        .map_err(|_| ApiError::Internal)?;
    Ok(Json(DataResponse {
        data: record,
        code: 200,
    }))
}

/// Handle `GET /v1/seasons` — list seasons, optionally filtered by year.
///
/// # Errors
///
/// Returns 400 with a field map on an invalid `order`, 500 on storage
/// failure.
pub async fn list(
    State(state): State<AppState>,
    Query(req): Query<ListSeasonQuery>,
) -> Result<Json<DataResponse<Vec<Season>>>, ApiError> {
    Rules::new()
        .one_of("order", &req.order, &["desc", "asc"])
        .finish()?;

    let rows = state
        .seasons
        .list(&req)
        .await
        .map_err(|_| ApiError::Internal)?;

    Ok(Json(DataResponse {
        data: rows,
        code: 200,
    }))
}

/// Handle `DELETE /v1/seasons/{id}`.
///
/// # Errors
///
/// Returns 400 on a non-numeric id, 500 on storage failure.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_id(&id)?;
    state
        .seasons
        .delete(id)
        .await
        .map_err(|_| ApiError::Internal)?;
    Ok(Json(MessageResponse::success(200)))
}

/// Handle `POST /v1/seasons/sync` — reconcile against API-Sports.
///
/// # Errors
///
/// Returns 500 when either fetch stage of the sync fails.
pub async fn sync(State(state): State<AppState>) -> Result<Json<MessageResponse>, ApiError> {
    crate::sync::sync_seasons(&state.seasons, state.sports.as_ref()).await?;
    Ok(Json(MessageResponse::success(200)))
}
