//! Filter parse errors
//!
//! Every grammar violation carries the offending token (or the field it
//! concerns) and the 0-based token position where parsing stopped. Errors
//! reported at end of input use the token count as position.

use thiserror::Error;

use crate::data::schema::ValidationError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// Pre-scan found a full-statement keyword
    #[error("input string should have only WHERE part of the SQL query, but it has {keyword}")]
    ForbiddenKeyword { keyword: &'static str },

    #[error("first condition cannot start with {token}")]
    LeadingConjunction { token: String, position: usize },

    #[error("conjunction expected, got {token}")]
    ConjunctionExpected { token: String, position: usize },

    #[error("no field after {after}")]
    MissingField { after: String, position: usize },

    #[error("unexpected field: {token}")]
    UnexpectedField { token: String, position: usize },

    #[error("no operator after field {field}")]
    MissingOperator { field: String, position: usize },

    #[error("unexpected operator: {token}")]
    UnexpectedOperator { token: String, position: usize },

    #[error("no value for field {field}")]
    MissingValue { field: String, position: usize },

    #[error("unexpected value: {token}")]
    UnexpectedValue { token: String, position: usize },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl FilterError {
    /// Token position where parsing stopped, for grammar errors
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::LeadingConjunction { position, .. }
            | Self::ConjunctionExpected { position, .. }
            | Self::MissingField { position, .. }
            | Self::UnexpectedField { position, .. }
            | Self::MissingOperator { position, .. }
            | Self::UnexpectedOperator { position, .. }
            | Self::MissingValue { position, .. }
            | Self::UnexpectedValue { position, .. } => Some(*position),
            Self::ForbiddenKeyword { .. } | Self::Validation(_) => None,
        }
    }

    /// Offending token, for errors raised on a specific token
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::LeadingConjunction { token, .. }
            | Self::ConjunctionExpected { token, .. }
            | Self::UnexpectedField { token, .. }
            | Self::UnexpectedOperator { token, .. }
            | Self::UnexpectedValue { token, .. } => Some(token),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forbidden_keyword_display() {
        let err = FilterError::ForbiddenKeyword { keyword: "SELECT" };
        assert_eq!(
            err.to_string(),
            "input string should have only WHERE part of the SQL query, but it has SELECT"
        );
        assert_eq!(err.position(), None);
    }

    #[test]
    fn test_grammar_error_accessors() {
        let err = FilterError::UnexpectedOperator {
            token: "'hello'".to_string(),
            position: 1,
        };
        assert_eq!(err.to_string(), "unexpected operator: 'hello'");
        assert_eq!(err.position(), Some(1));
        assert_eq!(err.token(), Some("'hello'"));
    }

    #[test]
    fn test_missing_value_has_no_token() {
        let err = FilterError::MissingValue {
            field: "Alpha.Bar".to_string(),
            position: 6,
        };
        assert_eq!(err.to_string(), "no value for field Alpha.Bar");
        assert_eq!(err.token(), None);
        assert_eq!(err.position(), Some(6));
    }

    #[test]
    fn test_validation_error_is_transparent() {
        let err = FilterError::from(ValidationError::UnknownField {
            field: "x".to_string(),
            table: "cats".to_string(),
        });
        assert_eq!(err.to_string(), "there is no field x in table cats");
    }
}
