//! Filter type definitions
//!
//! Defines the condition records produced by the grammar state machine and
//! the fixed operator set.

use serde::{Deserialize, Serialize};

use crate::utils::sql::{contains_identifier, is_qualified_identifier};

/// Connector joining a condition to the one before it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Conjunction {
    /// First condition only
    #[default]
    None,
    And,
    Or,
}

impl Conjunction {
    /// Recognize `AND` / `OR` in any letter case
    pub fn from_token(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("AND") {
            Some(Self::And)
        } else if token.eq_ignore_ascii_case("OR") {
            Some(Self::Or)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Operator {
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = "!=")]
    NotEq,
    #[serde(rename = "<>")]
    LtGt,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = ">=")]
    GtOrEq,
    #[serde(rename = "<=")]
    LtOrEq,
    #[serde(rename = "LIKE")]
    Like,
    #[serde(rename = "NOT LIKE")]
    NotLike,
    #[serde(rename = "ILIKE")]
    ILike,
    #[serde(rename = "NOT ILIKE")]
    NotILike,
    #[serde(rename = "~")]
    Match,
    #[serde(rename = "~*")]
    IMatch,
    #[serde(rename = "!~")]
    NotMatch,
    #[serde(rename = "!~*")]
    NotIMatch,
}

/// Operators accepted as a single token
const OPERATORS: [(&str, Operator); 13] = [
    (">=", Operator::GtOrEq),
    ("<=", Operator::LtOrEq),
    ("!=", Operator::NotEq),
    ("<>", Operator::LtGt),
    ("=", Operator::Eq),
    (">", Operator::Gt),
    ("<", Operator::Lt),
    ("LIKE", Operator::Like),
    ("ILIKE", Operator::ILike),
    ("~", Operator::Match),
    ("~*", Operator::IMatch),
    ("!~", Operator::NotMatch),
    ("!~*", Operator::NotIMatch),
];

/// Operators that may follow `NOT` to form a compound operator
const NEGATABLE_OPERATORS: [(&str, Operator); 2] =
    [("LIKE", Operator::NotLike), ("ILIKE", Operator::NotILike)];

impl Operator {
    /// Look up a single-token operator; word operators match in any case
    pub fn from_token(token: &str) -> Option<Self> {
        OPERATORS
            .iter()
            .find(|(text, _)| token.eq_ignore_ascii_case(text))
            .map(|(_, op)| *op)
    }

    /// Compound operator for `NOT <token>`, e.g. `NOT like` -> `NOT LIKE`
    pub fn negated_from_token(token: &str) -> Option<Self> {
        NEGATABLE_OPERATORS
            .iter()
            .find(|(text, _)| token.eq_ignore_ascii_case(text))
            .map(|(_, op)| *op)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::NotEq => "!=",
            Self::LtGt => "<>",
            Self::Gt => ">",
            Self::Lt => "<",
            Self::GtOrEq => ">=",
            Self::LtOrEq => "<=",
            Self::Like => "LIKE",
            Self::NotLike => "NOT LIKE",
            Self::ILike => "ILIKE",
            Self::NotILike => "NOT ILIKE",
            Self::Match => "~",
            Self::IMatch => "~*",
            Self::NotMatch => "!~",
            Self::NotIMatch => "!~*",
        }
    }

    /// POSIX regex operators, which take the raw escape path
    pub fn is_regex(&self) -> bool {
        matches!(
            self,
            Self::Match | Self::IMatch | Self::NotMatch | Self::NotIMatch
        )
    }

    /// The logically negated operator
    pub fn complement(self) -> Self {
        match self {
            Self::Eq => Self::NotEq,
            Self::NotEq | Self::LtGt => Self::Eq,
            Self::Gt => Self::LtOrEq,
            Self::LtOrEq => Self::Gt,
            Self::Lt => Self::GtOrEq,
            Self::GtOrEq => Self::Lt,
            Self::Like => Self::NotLike,
            Self::NotLike => Self::Like,
            Self::ILike => Self::NotILike,
            Self::NotILike => Self::ILike,
            Self::Match => Self::NotMatch,
            Self::NotMatch => Self::Match,
            Self::IMatch => Self::NotIMatch,
            Self::NotIMatch => Self::IMatch,
        }
    }
}

/// One parsed `[AND|OR] [NOT] field [operator value]` clause
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Condition {
    pub conjunction: Conjunction,
    pub negated: bool,
    pub field: String,
    /// `None` for a bare boolean field
    pub operator: Option<Operator>,
    /// Raw token, quotes included; `None` for a bare boolean field
    pub value: Option<String>,
}

impl Condition {
    pub fn new(conjunction: Conjunction) -> Self {
        Self {
            conjunction,
            ..Self::default()
        }
    }

    /// Serialize back to filter text: `[conjunction ][NOT ]field[ operator value]`
    pub fn to_raw(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(5);
        if self.conjunction != Conjunction::None {
            parts.push(self.conjunction.as_str());
        }
        if self.negated {
            parts.push("NOT");
        }
        parts.push(&self.field);
        if let Some(operator) = &self.operator {
            parts.push(operator.as_str());
        }
        if let Some(value) = &self.value {
            parts.push(value);
        }
        parts.join(" ")
    }
}

/// How field tokens are recognized
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierPolicy {
    /// Token only has to contain an identifier-like run somewhere
    #[default]
    Lenient,
    /// Whole token must be a dot-qualified identifier
    Qualified,
}

impl IdentifierPolicy {
    pub fn accepts(&self, token: &str) -> bool {
        match self {
            Self::Lenient => contains_identifier(token),
            Self::Qualified => is_qualified_identifier(token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_lookup_symbols() {
        assert_eq!(Operator::from_token(">="), Some(Operator::GtOrEq));
        assert_eq!(Operator::from_token("<>"), Some(Operator::LtGt));
        assert_eq!(Operator::from_token("!~*"), Some(Operator::NotIMatch));
        assert_eq!(Operator::from_token("=="), None);
        assert_eq!(Operator::from_token("NOT"), None);
    }

    #[test]
    fn operator_lookup_words_ignore_case() {
        assert_eq!(Operator::from_token("like"), Some(Operator::Like));
        assert_eq!(Operator::from_token("ILike"), Some(Operator::ILike));
        assert_eq!(Operator::negated_from_token("ilike"), Some(Operator::NotILike));
        assert_eq!(Operator::negated_from_token("="), None);
    }

    #[test]
    fn complement_pairs() {
        let pairs = [
            (Operator::Eq, Operator::NotEq),
            (Operator::Gt, Operator::LtOrEq),
            (Operator::Lt, Operator::GtOrEq),
            (Operator::Like, Operator::NotLike),
            (Operator::ILike, Operator::NotILike),
        ];
        for (op, complement) in pairs {
            assert_eq!(op.complement(), complement);
            assert_eq!(complement.complement(), op);
        }
        assert_eq!(Operator::LtGt.complement(), Operator::Eq);
    }

    #[test]
    fn regex_operators() {
        assert!(Operator::Match.is_regex());
        assert!(Operator::NotIMatch.is_regex());
        assert!(!Operator::Like.is_regex());
    }

    #[test]
    fn condition_to_raw() {
        let condition = Condition {
            conjunction: Conjunction::Or,
            negated: true,
            field: "Bob.LastName".to_string(),
            operator: Some(Operator::NotMatch),
            value: Some("'Bill.*'".to_string()),
        };
        assert_eq!(condition.to_raw(), "OR NOT Bob.LastName !~ 'Bill.*'");
    }

    #[test]
    fn bare_condition_to_raw() {
        let condition = Condition {
            field: "Alice.IsActive".to_string(),
            ..Condition::default()
        };
        assert_eq!(condition.to_raw(), "Alice.IsActive");
    }

    #[test]
    fn condition_serializes_operator_symbol() {
        let condition = Condition {
            conjunction: Conjunction::And,
            negated: false,
            field: "a".to_string(),
            operator: Some(Operator::NotLike),
            value: Some("'%x%'".to_string()),
        };
        let json = serde_json::to_value(&condition).unwrap();
        assert_eq!(json["conjunction"], "AND");
        assert_eq!(json["operator"], "NOT LIKE");
        assert_eq!(json["value"], "'%x%'");
    }

    #[test]
    fn identifier_policies() {
        assert!(IdentifierPolicy::Lenient.accepts("(weird"));
        assert!(!IdentifierPolicy::Qualified.accepts("(weird"));
        assert!(IdentifierPolicy::Qualified.accepts("Foo.Bar.X"));
    }
}
