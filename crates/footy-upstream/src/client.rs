//! API-Sports HTTP client trait and `reqwest`-backed implementation.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use log::{debug, warn};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;

use crate::error::UpstreamError;
use crate::models::{Envelope, UpstreamCountry, UpstreamErrorBody};

/// Boxed future returned by dyn-compatible async trait methods.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Fetches canonical record sets from API-Sports.
pub trait SportsClient: Send + Sync {
    /// Fetch the canonical country list.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError`] on transport, upstream, or decode failure.
    fn fetch_countries(&self) -> BoxFuture<'_, Result<Vec<UpstreamCountry>, UpstreamError>>;

    /// Fetch the canonical season years.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError`] on transport, upstream, or decode failure.
    fn fetch_seasons(&self) -> BoxFuture<'_, Result<Vec<i64>, UpstreamError>>;
}

/// `reqwest`-backed implementation of [`SportsClient`].
#[derive(Debug, Clone)]
pub struct HttpSportsClient {
    base_url: String,
    api_key: String,
    api_host: String,
    http: Arc<reqwest::Client>,
}

impl HttpSportsClient {
    /// Create a new client targeting `base_url` with the given credentials.
    #[must_use]
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        api_host: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            api_host: api_host.into(),
            http: Arc::new(reqwest::Client::new()),
        }
    }

    async fn get_response<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Vec<T>, UpstreamError> {
        let url = format!("{}{path}", self.base_url);
        debug!("fetching {url}");

        let res = self
            .http
            .get(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .header("x-rapidapi-key", &self.api_key)
            .header("x-rapidapi-host", &self.api_host)
            .send()
            .await?;

        let status = res.status().as_u16();
        let body = res.bytes().await?;
        interpret_response(status, &body)
    }
}

/// Interpret a raw API-Sports response body.
///
/// Non-2xx statuses are decoded as the upstream error envelope and passed
/// through with their original status code; a body that decodes as neither
/// the error envelope nor the success envelope is a decode failure.
///
/// # Errors
///
/// Returns [`UpstreamError::Upstream`] or [`UpstreamError::Decode`].
pub fn interpret_response<T: DeserializeOwned>(
    status: u16,
    body: &[u8],
) -> Result<Vec<T>, UpstreamError> {
    if !(200..300).contains(&status) {
        warn!("API-Sports non-2xx response ({status})");
        return match serde_json::from_slice::<UpstreamErrorBody>(body) {
            Ok(err) => Err(UpstreamError::Upstream {
                status,
                message: err.message,
            }),
            Err(e) => Err(UpstreamError::Decode(e.to_string())),
        };
    }

    let envelope: Envelope<T> =
        serde_json::from_slice(body).map_err(|e| UpstreamError::Decode(e.to_string()))?;
    Ok(envelope.response)
}

impl SportsClient for HttpSportsClient {
    fn fetch_countries(&self) -> BoxFuture<'_, Result<Vec<UpstreamCountry>, UpstreamError>> {
        Box::pin(async move { self.get_response("/countries").await })
    }

    fn fetch_seasons(&self) -> BoxFuture<'_, Result<Vec<i64>, UpstreamError>> {
        Box::pin(async move { self.get_response("/seasons").await })
    }
}
