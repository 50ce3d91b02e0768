//! Season repository: CRUD over the `seasons` table.
//!
//! Seasons carry no surrogate key; the year value is the primary key, so
//! the list is small and served unpaginated.

use log::error;
use sqlx::PgPool;

use super::BoxFuture;
use crate::models::{ListSeasonQuery, Season};
use crate::pagination::sort_clause;
use crate::query::{SqlArg, WhereBuilder};

/// `PgPool`-backed season storage.
#[derive(Debug, Clone)]
pub struct SeasonRepo {
    pool: PgPool,
}

impl SeasonRepo {
    /// Wrap a connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a season year.
    ///
    /// # Errors
    ///
    /// Returns the underlying `sqlx::Error`; duplicates violate the
    /// primary key and surface here.
    pub async fn create(&self, id: i64) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO seasons (id) VALUES ($1)")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!("season create: {e}");
                e
            })?;
        Ok(())
    }

    /// Look up a season by year; `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns the underlying `sqlx::Error` on transport or syntax failure.
    pub async fn find(&self, id: i64) -> Result<Option<Season>, sqlx::Error> {
        sqlx::query_as::<_, Season>("SELECT id FROM seasons WHERE id = $1 LIMIT 1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!("season find: {e}");
                e
            })
    }

    /// List seasons matching the filter, unpaginated.
    ///
    /// # Errors
    ///
    /// Returns the underlying `sqlx::Error`.
    pub async fn list(&self, req: &ListSeasonQuery) -> Result<Vec<Season>, sqlx::Error> {
        let (where_clause, args) = list_where(req);
        let order = sort_clause("id ASC", "id", &req.order);

        let sql = format!("SELECT id FROM seasons {where_clause} ORDER BY {order}");
        let mut query = sqlx::query_as::<_, Season>(&sql);
        for arg in &args {
            query = match arg {
                SqlArg::Text(s) => query.bind(s.clone()),
                SqlArg::Int(i) => query.bind(*i),
                SqlArg::Bool(b) => query.bind(*b),
            };
        }
        query.fetch_all(&self.pool).await.map_err(|e| {
            error!("season list: {e}");
            e
        })
    }

    /// Delete a season by year. Deleting an absent year is not an error.
    ///
    /// # Errors
    ///
    /// Returns the underlying `sqlx::Error`.
    pub async fn delete(&self, id: i64) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM seasons WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!("season delete: {e}");
                e
            })?;
        Ok(())
    }
}

fn list_where(req: &ListSeasonQuery) -> (String, Vec<SqlArg>) {
    let mut w = WhereBuilder::new().with_where_prefix();
    // Permanent filler keeps the AND chain valid with zero real filters.
    w.and("true", vec![]);

    if req.id != 0 {
        w.and("id = ?", vec![SqlArg::Int(req.id)]);
    }

    w.build()
}

/// Subset of season storage the sync routine depends on.
pub trait SeasonStore: Send + Sync {
    /// Every stored season.
    fn all(&self) -> BoxFuture<'_, Result<Vec<Season>, sqlx::Error>>;
    /// Insert one season year.
    fn insert(&self, id: i64) -> BoxFuture<'_, Result<(), sqlx::Error>>;
}

impl SeasonStore for SeasonRepo {
    fn all(&self) -> BoxFuture<'_, Result<Vec<Season>, sqlx::Error>> {
        Box::pin(async move {
            self.list(&ListSeasonQuery {
                order: "asc".to_owned(),
                ..Default::default()
            })
            .await
        })
    }

    fn insert(&self, id: i64) -> BoxFuture<'_, Result<(), sqlx::Error>> {
        Box::pin(self.create(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_where_without_id_is_the_filler_only() {
        let (clause, args) = list_where(&ListSeasonQuery::default());
        assert_eq!(clause, "WHERE true");
        assert!(args.is_empty());
    }

    #[test]
    fn list_where_filters_by_year() {
        let req = ListSeasonQuery {
            id: 2024,
            ..Default::default()
        };
        let (clause, args) = list_where(&req);
        assert_eq!(clause, "WHERE true AND id = $1");
        assert_eq!(args, vec![SqlArg::Int(2024)]);
    }
}
