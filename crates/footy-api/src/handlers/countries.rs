//! Handlers for the `/v1/countries` endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::error::ApiError;
use crate::models::{
    Country, CreateCountryBody, DataResponse, ListCountryQuery, MessageResponse, NewCountry,
    UpdateCountryBody,
};
use crate::pagination::{paginate, PaginatedResponse};
use crate::router::AppState;
use crate::validate::Rules;

const INVALID_COUNTRY_ID: &str = "INVALID_COUNTRY_ID";

fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest(INVALID_COUNTRY_ID.to_owned()))
}

/// Handle `POST /v1/countries` — create a country.
///
/// # Errors
///
/// Returns 400 with a field map when `name` is missing, 500 on storage
/// failure.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateCountryBody>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let body = body.normalize();
    Rules::new().required("name", &body.name).finish()?;

    state
        .countries
        .create(&NewCountry {
            as_id: body.as_id,
            code: body.code,
            name: body.name,
            flag: body.flag,
            active: body.active,
        })
        .await
        .map_err(|_| ApiError::Internal)?;

    Ok((StatusCode::CREATED, Json(MessageResponse::success(201))))
}

/// Handle `PUT /v1/countries/{id}` — update an existing country.
///
/// The id must parse as an integer and resolve to an existing row; both
/// failures are client errors with a fixed code string.
///
/// # Errors
///
/// Returns 400 on a bad or unknown id or a missing `name`, 500 on storage
/// failure.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateCountryBody>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_id(&id)?;
    let body = body.normalize();
    Rules::new().required("name", &body.name).finish()?;

    let existing = state
        .countries
        .find_by_id(id)
        .await
        .map_err(|_| ApiError::Internal)?
        .ok_or_else(|| ApiError::BadRequest(INVALID_COUNTRY_ID.to_owned()))?;

    state
        .countries
        .update(existing.id, &body)
        .await
        .map_err(|_| ApiError::Internal)?;

    Ok(Json(MessageResponse::success(200)))
}

/// Query parameters for `GET /v1/countries/{id}`.
#[derive(Debug, Default, Deserialize)]
pub struct FindCountryQuery {
    /// External id to look up when the path id is 0.
    #[serde(default)]
    pub as_id: i64,
}

/// Handle `GET /v1/countries/{id}` — find by internal id, or by external
/// id via `?as_id=` when the path id is 0.
///
/// A missed lookup is not an error; the data field is `null`.
///
/// # Errors
///
/// Returns 400 on a non-numeric id, 500 on storage failure.
pub async fn find(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<FindCountryQuery>,
) -> Result<Json<DataResponse<Option<Country>>>, ApiError> {
    let id = parse_id(&id)?;

    let record = if id != 0 {
        state.countries.find_by_id(id).await
    } else {
        state.countries.find_by_as_id(query.as_id).await
    }
    .map_err(|_| ApiError::Internal)?;

    Ok(Json(DataResponse {
        data: record,
        code: 200,
    }))
}

/// Handle `GET /v1/countries` — filtered, sorted, paginated list.
///
/// # Errors
///
/// Returns 400 with a field map on invalid `order`/`order_by`, 500 on
/// storage failure.
pub async fn list(
    State(state): State<AppState>,
    Query(req): Query<ListCountryQuery>,
) -> Result<Json<DataResponse<PaginatedResponse<Country>>>, ApiError> {
    Rules::new()
        .one_of("order", &req.order, &["desc", "asc"])
        .one_of("order_by", &req.order_by, &["id", "code", "name", "active"])
        .finish()?;

    let (rows, total) = state
        .countries
        .list(&req)
        .await
        .map_err(|_| ApiError::Internal)?;

    Ok(Json(DataResponse {
        data: paginate(rows, req.page, req.per_page, total),
        code: 200,
    }))
}

/// Handle `DELETE /v1/countries/{id}`.
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
        .countries
        .delete(id)
        .await
        .map_err(|_| ApiError::Internal)?;
    Ok(Json(MessageResponse::success(200)))
}

/// Handle `POST /v1/countries/sync` — reconcile against API-Sports.
///
/// # Errors
///
/// Returns 500 when either fetch stage of the sync fails.
pub async fn sync(State(state): State<AppState>) -> Result<Json<MessageResponse>, ApiError> {
    crate::sync::sync_countries(&state.countries, state.sports.as_ref()).await?;
    Ok(Json(MessageResponse::success(200)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_integers() {
        assert_eq!(parse_id("42").unwrap(), 42);
    }

    #[test]
    fn parse_id_rejects_non_numeric_segments() {
        let ApiError::BadRequest(code) = parse_id("abc").unwrap_err() else {
            panic!("expected a bad request error")
        };
        assert_eq!(code, INVALID_COUNTRY_ID);
    }
}
