//! Country repository: parameterized CRUD over the `countries` table.

use log::error;
use sqlx::PgPool;

use super::BoxFuture;
use crate::models::{Country, ListCountryQuery, NewCountry, UpdateCountryBody};
use crate::pagination::{limit_clause, sort_clause};
use crate::query::{SqlArg, WhereBuilder};

/// Column list shared by the select queries.
const COLUMNS: &str = "id, as_id, code, name, flag, active";

/// Page size used when the sync routine lists "all" countries.
/// Effectively unbounded while the table stays small; a known
/// scalability limit.
pub const SYNC_PAGE_SIZE: i64 = 100_000;

/// `PgPool`-backed country storage.
#[derive(Debug, Clone)]
pub struct CountryRepo {
    pool: PgPool,
}

impl CountryRepo {
    /// Wrap a connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a country and return the assigned id.
    ///
    /// # Errors
    ///
    /// Returns the underlying `sqlx::Error`; the caller maps it to 500.
    pub async fn create(&self, country: &NewCountry) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "INSERT INTO countries (as_id, code, name, flag, active)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(country.as_id)
        .bind(&country.code)
        .bind(&country.name)
        .bind(&country.flag)
        .bind(country.active)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!("country create: {e}");
            e
        })
    }

    /// Overwrite the mutable columns of an existing row.
    ///
    /// # Errors
    ///
    /// Returns the underlying `sqlx::Error`.
    pub async fn update(&self, id: i64, country: &UpdateCountryBody) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE countries
             SET code = $1, name = $2, flag = $3, active = $4
             WHERE id = $5",
        )
        .bind(&country.code)
        .bind(&country.name)
        .bind(&country.flag)
        .bind(country.active)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!("country update: {e}");
            e
        })?;
        Ok(())
    }

    /// Look up a country by internal id; `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns the underlying `sqlx::Error` on transport or syntax failure.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Country>, sqlx::Error> {
        sqlx::query_as::<_, Country>(
            "SELECT id, as_id, code, name, flag, active FROM countries WHERE id = $1 LIMIT 1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("country find_by_id: {e}");
            e
        })
    }

    /// Look up a country by its external API-Sports id; `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns the underlying `sqlx::Error` on transport or syntax failure.
    pub async fn find_by_as_id(&self, as_id: i64) -> Result<Option<Country>, sqlx::Error> {
        sqlx::query_as::<_, Country>(
            "SELECT id, as_id, code, name, flag, active FROM countries WHERE as_id = $1 LIMIT 1",
        )
        .bind(as_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("country find_by_as_id: {e}");
            e
        })
    }

    /// List countries matching the filter plus the unpaginated total.
    ///
    /// The count query reuses the exact clause and arguments of the data
    /// query so the total always reflects the same filter.
    ///
    /// # Errors
    ///
    /// Returns the underlying `sqlx::Error`.
    pub async fn list(&self, req: &ListCountryQuery) -> Result<(Vec<Country>, i64), sqlx::Error> {
        let (where_clause, args) = list_where(req);
        let order = sort_clause("name ASC", &req.order_by, &req.order);
        let limit = limit_clause(req.page, req.per_page);

        let sql = format!("SELECT {COLUMNS} FROM countries {where_clause} ORDER BY {order} {limit}");
        let mut query = sqlx::query_as::<_, Country>(&sql);
        for arg in &args {
            query = match arg {
                SqlArg::Text(s) => query.bind(s.clone()),
                SqlArg::Int(i) => query.bind(*i),
                SqlArg::Bool(b) => query.bind(*b),
            };
        }
        let rows = query.fetch_all(&self.pool).await.map_err(|e| {
            error!("country list: {e}");
            e
        })?;

        let count_sql = format!("SELECT count(id) FROM countries {where_clause}");
        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
        for arg in &args {
            count_query = match arg {
                SqlArg::Text(s) => count_query.bind(s.clone()),
                SqlArg::Int(i) => count_query.bind(*i),
                SqlArg::Bool(b) => count_query.bind(*b),
            };
        }
        let total = count_query.fetch_one(&self.pool).await.map_err(|e| {
            error!("country list total: {e}");
            e
        })?;

        Ok((rows, total))
    }

    /// Delete a country by id. Deleting an absent id is not an error.
    ///
    /// # Errors
    ///
    /// Returns the underlying `sqlx::Error`.
    pub async fn delete(&self, id: i64) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM countries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!("country delete: {e}");
                e
            })?;
        Ok(())
    }
}

fn list_where(req: &ListCountryQuery) -> (String, Vec<SqlArg>) {
    let mut w = WhereBuilder::new().with_where_prefix();
    // Permanent filler keeps the AND chain valid with zero real filters.
    w.and("true", vec![]);

    if !req.code.trim().is_empty() {
        w.and("code = ?", vec![SqlArg::Text(req.code.clone())]);
    }
    if !req.name.trim().is_empty() {
        w.custom(
            " AND (name LIKE ?)",
            vec![SqlArg::Text(format!("%{}%", req.name))],
        );
    }
    if req.active {
        w.and("active = true", vec![]);
    }

    w.build()
}

/// Subset of country storage the sync routine depends on.
pub trait CountryStore: Send + Sync {
    /// Every stored country, effectively unpaginated.
    fn all(&self) -> BoxFuture<'_, Result<Vec<Country>, sqlx::Error>>;
    /// Insert one country, returning the assigned id.
    fn insert<'a>(&'a self, country: &'a NewCountry) -> BoxFuture<'a, Result<i64, sqlx::Error>>;
}

impl CountryStore for CountryRepo {
    fn all(&self) -> BoxFuture<'_, Result<Vec<Country>, sqlx::Error>> {
        Box::pin(async move {
            let req = ListCountryQuery {
                per_page: SYNC_PAGE_SIZE,
                ..Default::default()
            };
            let (rows, _) = self.list(&req).await?;
            Ok(rows)
        })
    }

    fn insert<'a>(&'a self, country: &'a NewCountry) -> BoxFuture<'a, Result<i64, sqlx::Error>> {
        Box::pin(self.create(country))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_where_with_no_filters_is_the_filler_only() {
        let (clause, args) = list_where(&ListCountryQuery::default());
        assert_eq!(clause, "WHERE true");
        assert!(args.is_empty());
    }

    #[test]
    fn list_where_composes_all_filters_in_order() {
        let req = ListCountryQuery {
            code: "GB".to_owned(),
            name: "land".to_owned(),
            active: true,
            ..Default::default()
        };
        let (clause, args) = list_where(&req);
        assert_eq!(
            clause,
            "WHERE true AND code = $1 AND active = true  AND (name LIKE $2)"
        );
        assert_eq!(
            args,
            vec![
                SqlArg::Text("GB".to_owned()),
                SqlArg::Text("%land%".to_owned())
            ]
        );
    }

    #[test]
    fn blank_filters_are_skipped() {
        let req = ListCountryQuery {
            code: "   ".to_owned(),
            ..Default::default()
        };
        let (clause, args) = list_where(&req);
        assert_eq!(clause, "WHERE true");
        assert!(args.is_empty());
    }
}
