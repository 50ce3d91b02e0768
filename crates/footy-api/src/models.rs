//! Domain rows, request bodies, and response envelopes.

use serde::{Deserialize, Serialize};

/// A country row.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Country {
    /// Internal id, assigned by storage and immutable after creation.
    pub id: i64,
    /// External API-Sports id; 0 when unknown.
    pub as_id: i64,
    /// Short country code.
    pub code: String,
    /// Country name; the sync dedup key, unique in storage.
    pub name: String,
    /// Flag image URL.
    pub flag: String,
    /// Whether the country is active.
    pub active: bool,
}

/// Insertable country record, before storage assigns an id.
#[derive(Debug, Clone)]
pub struct NewCountry {
    /// External API-Sports id; 0 when unknown.
    pub as_id: i64,
    /// Short country code.
    pub code: String,
    /// Country name.
    pub name: String,
    /// Flag image URL.
    pub flag: String,
    /// Whether the country is active.
    pub active: bool,
}

/// Request body for `POST /v1/countries`.
#[derive(Debug, Default, Deserialize)]
pub struct CreateCountryBody {
    /// External API-Sports id.
    #[serde(default)]
    pub as_id: i64,
    /// Short country code.
    #[serde(default)]
    pub code: String,
    /// Country name (required).
    #[serde(default)]
    pub name: String,
    /// Flag image URL.
    #[serde(default)]
    pub flag: String,
    /// Whether the country is active.
    #[serde(default)]
    pub active: bool,
}

impl CreateCountryBody {
    /// Trim string fields; runs unconditionally before validation.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        self.code = self.code.trim().to_owned();
        self.name = self.name.trim().to_owned();
        self.flag = self.flag.trim().to_owned();
        self
    }
}

/// Request body for `PUT /v1/countries/{id}`.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateCountryBody {
    /// Short country code.
    #[serde(default)]
    pub code: String,
    /// Country name (required).
    #[serde(default)]
    pub name: String,
    /// Flag image URL.
    #[serde(default)]
    pub flag: String,
    /// Whether the country is active.
    #[serde(default)]
    pub active: bool,
}

impl UpdateCountryBody {
    /// Trim string fields; runs unconditionally before validation.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        self.code = self.code.trim().to_owned();
        self.name = self.name.trim().to_owned();
        self.flag = self.flag.trim().to_owned();
        self
    }
}

/// Query parameters for `GET /v1/countries`.
#[derive(Debug, Default, Deserialize)]
pub struct ListCountryQuery {
    /// Equality filter on `code`.
    #[serde(default)]
    pub code: String,
    /// Substring filter on `name`.
    #[serde(default)]
    pub name: String,
    /// When true, only active countries.
    #[serde(default)]
    pub active: bool,
    /// Sort direction, `asc` or `desc`.
    #[serde(default)]
    pub order: String,
    /// Sort field, one of `id`, `code`, `name`, `active`.
    #[serde(default)]
    pub order_by: String,
    /// 1-based page number.
    #[serde(default)]
    pub page: i64,
    /// Page size.
    #[serde(default)]
    pub per_page: i64,
}

/// A season row. The year value is both primary key and external id.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::FromRow)]
pub struct Season {
    /// The season year.
    pub id: i64,
}

/// Request body for `POST /v1/seasons`.
#[derive(Debug, Default, Deserialize)]
pub struct SeasonBody {
    /// The season year (required; 0 counts as missing).
    #[serde(default)]
    pub id: i64,
}

/// Query parameters for `GET /v1/seasons`.
#[derive(Debug, Default, Deserialize)]
pub struct ListSeasonQuery {
    /// Equality filter on `id`; 0 means unfiltered.
    #[serde(default)]
    pub id: i64,
    /// Sort direction, `asc` or `desc`.
    #[serde(default)]
    pub order: String,
}

/// Success envelope carrying a fixed message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Always `SUCCESS`.
    pub message: &'static str,
    /// Mirrors the HTTP status code.
    pub code: u16,
}

impl MessageResponse {
    /// The standard success body for the given status code.
    #[must_use]
    pub fn success(code: u16) -> Self {
        Self {
            message: "SUCCESS",
            code,
        }
    }
}

/// Success envelope carrying a data payload.
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    /// The payload; `null` for a missed lookup.
    pub data: T,
    /// Mirrors the HTTP status code.
    pub code: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_response_serialises() {
        let json = serde_json::to_string(&MessageResponse::success(201)).unwrap();
        assert_eq!(json, r#"{"message":"SUCCESS","code":201}"#);
    }

    #[test]
    fn missed_lookup_serialises_as_null_data() {
        let body = DataResponse::<Option<Country>> {
            data: None,
            code: 200,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"data":null,"code":200}"#);
    }

    #[test]
    fn create_body_normalize_trims_strings() {
        let body = CreateCountryBody {
            name: "  England ".to_owned(),
            code: " GB".to_owned(),
            ..Default::default()
        }
        .normalize();
        assert_eq!(body.name, "England");
        assert_eq!(body.code, "GB");
    }

    #[test]
    fn list_query_defaults_are_empty() {
        let query: ListCountryQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.page, 0);
        assert_eq!(query.per_page, 0);
        assert!(query.order.is_empty());
        assert!(!query.active);
    }
}
