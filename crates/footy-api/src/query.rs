//! Dynamic WHERE-clause composition for list queries.
//!
//! Fragments are written with `?` markers and rendered to Postgres `$n`
//! placeholders in insertion order, so the returned argument vector lines
//! up with the placeholders positionally.

/// A positional SQL argument captured by the [`WhereBuilder`].
#[derive(Debug, Clone, PartialEq)]
pub enum SqlArg {
    /// A text argument.
    Text(String),
    /// An integer argument.
    Int(i64),
    /// A boolean argument.
    Bool(bool),
}

#[derive(Debug)]
struct Fragment {
    sql: String,
    args: Vec<SqlArg>,
}

/// Accumulates optional predicate fragments and their arguments.
///
/// Standard fragments are joined with ` AND `; custom fragments are
/// appended verbatim after them. Callers register a permanent `true`
/// fragment first so the `AND` chain stays valid with zero real filters.
#[derive(Debug, Default)]
pub struct WhereBuilder {
    fragments: Vec<Fragment>,
    custom: Vec<Fragment>,
    prefix: bool,
}

impl WhereBuilder {
    /// Create an empty builder that renders without a `WHERE ` prefix.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend `WHERE ` to the rendered clause when at least one standard
    /// fragment was registered.
    #[must_use]
    pub fn with_where_prefix(mut self) -> Self {
        self.prefix = true;
        self
    }

    /// Register a standard fragment joined into the `AND` chain.
    pub fn and(&mut self, sql: &str, args: Vec<SqlArg>) -> &mut Self {
        self.fragments.push(Fragment {
            sql: sql.to_owned(),
            args,
        });
        self
    }

    /// Register a pre-formatted fragment appended verbatim after the
    /// standard chain. The fragment must carry its own connective.
    pub fn custom(&mut self, sql: &str, args: Vec<SqlArg>) -> &mut Self {
        self.custom.push(Fragment {
            sql: sql.to_owned(),
            args,
        });
        self
    }

    /// Render the clause and collect the arguments in placeholder order.
    #[must_use]
    pub fn build(&self) -> (String, Vec<SqlArg>) {
        let mut clause = self
            .fragments
            .iter()
            .map(|f| f.sql.as_str())
            .collect::<Vec<_>>()
            .join(" AND ");

        if !self.custom.is_empty() {
            clause.push(' ');
            for fragment in &self.custom {
                clause.push_str(&fragment.sql);
            }
        }

        let mut args = Vec::new();
        for fragment in self.fragments.iter().chain(&self.custom) {
            args.extend(fragment.args.iter().cloned());
        }

        let clause = number_placeholders(&clause);
        if self.prefix && !self.fragments.is_empty() {
            return (format!("WHERE {clause}"), args);
        }
        (clause, args)
    }
}

/// Replace each `?` marker with `$1`, `$2`, ... in textual order.
fn number_placeholders(clause: &str) -> String {
    let mut out = String::with_capacity(clause.len());
    let mut n = 0;
    for c in clause.chars() {
        if c == '?' {
            n += 1;
            out.push('$');
            out.push_str(&n.to_string());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filler_only_builds_valid_clause() {
        let mut w = WhereBuilder::new().with_where_prefix();
        w.and("true", vec![]);
        let (clause, args) = w.build();
        assert_eq!(clause, "WHERE true");
        assert!(args.is_empty());
    }

    #[test]
    fn no_fragments_yields_empty_clause() {
        let w = WhereBuilder::new().with_where_prefix();
        let (clause, args) = w.build();
        assert_eq!(clause, "");
        assert!(args.is_empty());
    }

    #[test]
    fn placeholders_and_args_stay_in_order() {
        let mut w = WhereBuilder::new().with_where_prefix();
        w.and("true", vec![])
            .and("code = ?", vec![SqlArg::Text("GB".to_owned())])
            .and("active = ?", vec![SqlArg::Bool(true)]);
        let (clause, args) = w.build();
        assert_eq!(clause, "WHERE true AND code = $1 AND active = $2");
        assert_eq!(
            args,
            vec![SqlArg::Text("GB".to_owned()), SqlArg::Bool(true)]
        );
    }

    #[test]
    fn custom_fragment_is_appended_verbatim_after_the_chain() {
        let mut w = WhereBuilder::new().with_where_prefix();
        w.and("true", vec![])
            .and("code = ?", vec![SqlArg::Text("GB".to_owned())]);
        w.custom(
            " AND (name LIKE ?)",
            vec![SqlArg::Text("%land%".to_owned())],
        );
        let (clause, args) = w.build();
        assert_eq!(clause, "WHERE true AND code = $1  AND (name LIKE $2)");
        assert_eq!(
            args,
            vec![
                SqlArg::Text("GB".to_owned()),
                SqlArg::Text("%land%".to_owned())
            ]
        );
    }

    #[test]
    fn prefix_is_omitted_without_standard_fragments() {
        let mut w = WhereBuilder::new().with_where_prefix();
        w.custom("ORDER BY id", vec![]);
        let (clause, _) = w.build();
        assert_eq!(clause, " ORDER BY id");
    }
}
