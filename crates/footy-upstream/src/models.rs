//! Typed API-Sports response payloads.

use serde::Deserialize;

/// Paging block of the API-Sports envelope.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Paging {
    /// Current page of the upstream result set.
    #[serde(default)]
    pub current: i64,
    /// Total number of upstream pages.
    #[serde(default)]
    pub total: i64,
}

/// Per-endpoint error report embedded in an otherwise-2xx response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportedError {
    /// Rate-limit or maintenance window detail.
    #[serde(default)]
    pub time: String,
    /// Bug report reference.
    #[serde(default)]
    pub bug: String,
    /// Report text.
    #[serde(default)]
    pub report: String,
    /// Endpoint the report refers to.
    #[serde(default)]
    pub endpoint: String,
}

/// The standard API-Sports success envelope around a `response` array.
///
/// Every field is optional at decode time; an absent `response` reads as
/// an empty set. Only type mismatches and malformed JSON fail the decode.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    /// Echo of the requested endpoint.
    #[serde(default)]
    pub get: String,
    /// Errors reported alongside a 2xx status.
    #[serde(default)]
    pub errors: Vec<ReportedError>,
    /// Number of records in `response`.
    #[serde(default)]
    pub results: i64,
    /// Upstream paging info.
    #[serde(default)]
    pub paging: Paging,
    /// The actual payload records.
    #[serde(default)]
    pub response: Vec<T>,
}

/// One country record from `GET /countries`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamCountry {
    /// Country name; the local dedup key.
    pub name: String,
    /// ISO-style short code; null for aggregates like "World".
    pub code: Option<String>,
    /// Flag image URL; may be null.
    pub flag: Option<String>,
}

/// Error envelope API-Sports returns on non-2xx statuses.
#[derive(Debug, Deserialize)]
pub struct UpstreamErrorBody {
    /// Human-readable failure message.
    pub message: String,
}
