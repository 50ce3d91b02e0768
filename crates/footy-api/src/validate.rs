//! Explicit per-field request validation.
//!
//! Each handler declares its rules inline; messages are keyed by the JSON
//! field name, with underscores shown as spaces in the message text.

use crate::error::{ApiError, FieldErrors};

/// Collects rule violations for one request.
#[derive(Debug, Default)]
pub struct Rules {
    errors: FieldErrors,
}

impl Rules {
    /// Start an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The field must contain non-whitespace text.
    #[must_use]
    pub fn required(mut self, field: &str, value: &str) -> Self {
        if value.trim().is_empty() {
            self.push(field, required_message(field));
        }
        self
    }

    /// The field must be a non-zero integer; 0 counts as missing.
    #[must_use]
    pub fn required_int(mut self, field: &str, value: i64) -> Self {
        if value == 0 {
            self.push(field, required_message(field));
        }
        self
    }

    /// When present, the field must equal one of `allowed`.
    #[must_use]
    pub fn one_of(mut self, field: &str, value: &str, allowed: &[&str]) -> Self {
        if !value.is_empty() && !allowed.contains(&value) {
            self.push(
                field,
                format!(
                    "The field: '{field}' must be one of [{}]",
                    allowed.join(" ")
                ),
            );
        }
        self
    }

    /// Resolve the rule set into a 400 validation error or `Ok`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] when any rule failed.
    pub fn finish(self) -> Result<(), ApiError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::Validation(self.errors))
        }
    }

    fn push(&mut self, field: &str, message: String) {
        self.errors.entry(field.to_owned()).or_default().push(message);
    }
}

fn required_message(field: &str) -> String {
    format!("The {} field is required.", field.replace('_', " "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    fn field_errors(result: Result<(), ApiError>) -> crate::error::FieldErrors {
        let Err(ApiError::Validation(fields)) = result else {
            panic!("expected a validation error")
        };
        fields
    }

    #[test]
    fn required_rejects_empty_and_whitespace() {
        let fields = field_errors(Rules::new().required("name", "  ").finish());
        assert_eq!(fields["name"], vec!["The name field is required."]);
    }

    #[test]
    fn required_message_spells_underscores_as_spaces() {
        let fields = field_errors(Rules::new().required("per_page", "").finish());
        assert_eq!(fields["per_page"], vec!["The per page field is required."]);
    }

    #[test]
    fn required_int_treats_zero_as_missing() {
        let fields = field_errors(Rules::new().required_int("id", 0).finish());
        assert_eq!(fields["id"], vec!["The id field is required."]);
        assert!(Rules::new().required_int("id", 2024).finish().is_ok());
    }

    #[test]
    fn one_of_allows_empty_and_listed_values() {
        assert!(Rules::new()
            .one_of("order", "", &["desc", "asc"])
            .one_of("order", "asc", &["desc", "asc"])
            .finish()
            .is_ok());
    }

    #[test]
    fn one_of_rejects_unlisted_values() {
        let fields = field_errors(
            Rules::new()
                .one_of("order_by", "flag", &["id", "code", "name", "active"])
                .finish(),
        );
        assert_eq!(
            fields["order_by"],
            vec!["The field: 'order_by' must be one of [id code name active]"]
        );
    }

    #[test]
    fn violations_accumulate_per_field() {
        let fields = field_errors(
            Rules::new()
                .required("name", "")
                .one_of("order", "sideways", &["desc", "asc"])
                .finish(),
        );
        assert_eq!(fields.len(), 2);
    }
}
