//! Insert-missing reconciliation against the API-Sports canonical sets.
//!
//! Each routine is a single idempotent pass: list what exists, index it by
//! the dedup key, fetch the canonical set, insert the gaps. Per-record
//! insert failures are logged and skipped; only the two fetch stages can
//! fail the whole run.

use std::collections::HashSet;

use footy_upstream::client::SportsClient;
use log::{info, warn};

use crate::error::ApiError;
use crate::models::NewCountry;
use crate::repo::countries::CountryStore;
use crate::repo::seasons::SeasonStore;

/// Pull the canonical country list and insert every country whose name is
/// not yet stored. Countries are deduplicated by name; the unique index on
/// the column arbitrates concurrent runs.
///
/// # Errors
///
/// Returns [`ApiError::Internal`] when listing existing rows or fetching
/// the canonical set fails. Individual insert failures do not abort.
pub async fn sync_countries(
    store: &dyn CountryStore,
    client: &dyn SportsClient,
) -> Result<(), ApiError> {
    info!("country sync start");

    let existing = store.all().await.map_err(|_| ApiError::Internal)?;
    let known: HashSet<String> = existing.into_iter().map(|c| c.name).collect();

    let canonical = client.fetch_countries().await.map_err(|e| {
        warn!("country sync aborted: {e}");
        ApiError::Internal
    })?;

    for country in canonical {
        if known.contains(&country.name) {
            continue;
        }
        let record = NewCountry {
            as_id: 0,
            code: country.code.unwrap_or_default(),
            name: country.name,
            flag: country.flag.unwrap_or_default(),
            active: true,
        };
        if let Err(e) = store.insert(&record).await {
            warn!("could not create country {}: {e}", record.name);
            continue;
        }
        info!("created new country: {}", record.name);
    }

    info!("country sync end");
    Ok(())
}

/// Pull the canonical season years and insert every year not yet stored.
///
/// # Errors
///
/// Returns [`ApiError::Internal`] when listing existing rows or fetching
/// the canonical set fails. Individual insert failures do not abort.
pub async fn sync_seasons(
    store: &dyn SeasonStore,
    client: &dyn SportsClient,
) -> Result<(), ApiError> {
    info!("season sync start");

    let existing = store.all().await.map_err(|_| ApiError::Internal)?;
    let known: HashSet<i64> = existing.into_iter().map(|s| s.id).collect();

    let canonical = client.fetch_seasons().await.map_err(|e| {
        warn!("season sync aborted: {e}");
        ApiError::Internal
    })?;

    for id in canonical {
        if known.contains(&id) {
            continue;
        }
        if let Err(e) = store.insert(id).await {
            warn!("could not create season {id}: {e}");
            continue;
        }
        info!("created new season: {id}");
    }

    info!("season sync end");
    Ok(())
}
