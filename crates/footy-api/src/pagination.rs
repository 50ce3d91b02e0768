//! Pagination math and the page-bounded response envelope.

use serde::Serialize;

/// Page size applied when the caller does not supply one.
pub const DEFAULT_PER_PAGE: i64 = 20;

/// A data slice wrapped with its position inside the full result set.
///
/// Constructed fresh per list request; never persisted.
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    /// 1-based index of the first record of this page, 0 when empty.
    pub from: i64,
    /// The records of this page.
    pub data: Vec<T>,
    /// The page this response covers.
    pub current_page: i64,
    /// `ceil(total / per_page)`, 1 when the result set is empty.
    pub last_page: i64,
    /// Page size used.
    pub per_page: i64,
    /// 1-based index of the last record of this page, 0 when empty.
    pub to: i64,
    /// Total records matching the filter across all pages.
    pub total: i64,
}

/// Render a `LIMIT … OFFSET …` clause from page inputs.
///
/// `page` defaults to 1 and `per_page` to [`DEFAULT_PER_PAGE`] when ≤ 0.
/// No upper bound is enforced.
#[must_use]
pub fn limit_clause(page: i64, per_page: i64) -> String {
    let page = if page <= 0 { 1 } else { page };
    let per_page = if per_page <= 0 { DEFAULT_PER_PAGE } else { per_page };
    format!("LIMIT {per_page} OFFSET {}", (page - 1) * per_page)
}

/// Wrap a raw result slice and its total count into a page envelope.
///
/// With `total == 0` the envelope degenerates to `from = to = 0` and
/// `last_page = 1` regardless of the page inputs supplied.
#[must_use]
pub fn paginate<T>(data: Vec<T>, page: i64, per_page: i64, total: i64) -> PaginatedResponse<T> {
    let page = page.max(1);
    let per_page = if per_page <= 0 { DEFAULT_PER_PAGE } else { per_page };

    let (from, to, last_page) = if total > 0 {
        let len = i64::try_from(data.len()).unwrap_or(i64::MAX);
        let from = per_page * (page - 1) + 1;
        let to = from + len - 1;
        let last_page = (total + per_page - 1) / per_page;
        (from, to, last_page)
    } else {
        (0, 0, 1)
    };

    PaginatedResponse {
        from,
        data,
        current_page: page,
        last_page,
        per_page,
        to,
        total,
    }
}

/// Compose the ORDER BY expression for a list query.
///
/// An empty `field` falls back to `default` regardless of `direction`;
/// a present field with an empty direction sorts ascending.
#[must_use]
pub fn sort_clause(default: &str, field: &str, direction: &str) -> String {
    if field.is_empty() {
        return default.to_owned();
    }
    let direction = if direction.is_empty() { "asc" } else { direction };
    format!("{field} {direction}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_clause_computes_offset() {
        assert_eq!(limit_clause(1, 20), "LIMIT 20 OFFSET 0");
        assert_eq!(limit_clause(3, 10), "LIMIT 10 OFFSET 20");
    }

    #[test]
    fn limit_clause_defaults_page_and_per_page() {
        assert_eq!(limit_clause(0, 0), "LIMIT 20 OFFSET 0");
        assert_eq!(limit_clause(-2, -5), "LIMIT 20 OFFSET 0");
    }

    #[test]
    fn single_record_envelope() {
        let page = paginate(vec![1], 1, 20, 1);
        assert_eq!(page.from, 1);
        assert_eq!(page.to, 1);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.last_page, 1);
        assert_eq!(page.per_page, 20);
        assert_eq!(page.total, 1);
    }

    #[test]
    fn empty_result_set_degenerates() {
        let page = paginate::<i64>(vec![], 7, 50, 0);
        assert_eq!(page.from, 0);
        assert_eq!(page.to, 0);
        assert_eq!(page.last_page, 1);
        assert_eq!(page.current_page, 7);
        assert_eq!(page.per_page, 50);
    }

    #[test]
    fn last_page_is_ceiling_of_total_over_per_page() {
        assert_eq!(paginate(vec![1], 1, 20, 21).last_page, 2);
        assert_eq!(paginate(vec![1], 1, 20, 40).last_page, 2);
        assert_eq!(paginate(vec![1], 1, 20, 41).last_page, 3);
    }

    #[test]
    fn span_matches_slice_length() {
        let data = vec![1, 2, 3, 4, 5];
        let len = data.len() as i64;
        let page = paginate(data, 2, 5, 12);
        assert_eq!(page.from, 6);
        assert_eq!(page.to - page.from + 1, len);
    }

    #[test]
    fn envelope_serialises_with_expected_fields() {
        let json = serde_json::to_value(paginate(vec![1], 1, 20, 1)).unwrap();
        assert_eq!(json["from"], 1);
        assert_eq!(json["to"], 1);
        assert_eq!(json["current_page"], 1);
        assert_eq!(json["last_page"], 1);
        assert_eq!(json["per_page"], 20);
        assert_eq!(json["total"], 1);
        assert_eq!(json["data"][0], 1);
    }

    #[test]
    fn sort_clause_falls_back_to_default_without_a_field() {
        assert_eq!(sort_clause("name ASC", "", ""), "name ASC");
        assert_eq!(sort_clause("name ASC", "", "desc"), "name ASC");
    }

    #[test]
    fn sort_clause_composes_field_and_direction() {
        assert_eq!(sort_clause("name ASC", "code", "desc"), "code desc");
        assert_eq!(sort_clause("name ASC", "id", ""), "id asc");
    }
}
