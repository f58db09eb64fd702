//! Boolean expression model for WHERE clauses

use super::params::SqlParams;

/// Comparison operators supported by [`Expr::Compare`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    NotEq,
    Gt,
    GtOrEq,
    Lt,
    LtOrEq,
    Like,
    NotLike,
    ILike,
    NotILike,
}

/// A WHERE clause expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Compare {
        field: String,
        operator: CompareOp,
        value: String,
    },
    /// Parenthesized conjunction of expressions
    And(Vec<Expr>),
    /// Parenthesized disjunction of expressions
    Or(Vec<Expr>),
    /// Opaque SQL text, rendered verbatim with no parameters
    Raw(String),
}

impl Expr {
    pub fn compare(field: impl Into<String>, operator: CompareOp, value: impl Into<String>) -> Self {
        Self::Compare {
            field: field.into(),
            operator,
            value: value.into(),
        }
    }

    pub fn eq(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::compare(field, CompareOp::Eq, value)
    }

    pub fn not_eq(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::compare(field, CompareOp::NotEq, value)
    }

    pub fn gt(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::compare(field, CompareOp::Gt, value)
    }

    pub fn gt_or_eq(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::compare(field, CompareOp::GtOrEq, value)
    }

    pub fn lt(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::compare(field, CompareOp::Lt, value)
    }

    pub fn lt_or_eq(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::compare(field, CompareOp::LtOrEq, value)
    }

    pub fn like(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::compare(field, CompareOp::Like, value)
    }

    pub fn not_like(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::compare(field, CompareOp::NotLike, value)
    }

    pub fn ilike(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::compare(field, CompareOp::ILike, value)
    }

    pub fn not_ilike(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::compare(field, CompareOp::NotILike, value)
    }

    pub fn and(exprs: Vec<Expr>) -> Self {
        Self::And(exprs)
    }

    pub fn or(exprs: Vec<Expr>) -> Self {
        Self::Or(exprs)
    }

    pub fn raw(sql: impl Into<String>) -> Self {
        Self::Raw(sql.into())
    }

    /// Generate SQL WHERE clause fragment
    /// Returns the SQL clause with dialect placeholders and updates params
    pub fn to_sql(&self, params: &mut SqlParams) -> String {
        match self {
            Self::Compare {
                field,
                operator,
                value,
            } => {
                let op = match operator {
                    CompareOp::Eq => "=",
                    CompareOp::NotEq => "<>",
                    CompareOp::Gt => ">",
                    CompareOp::GtOrEq => ">=",
                    CompareOp::Lt => "<",
                    CompareOp::LtOrEq => "<=",
                    CompareOp::Like => "LIKE",
                    CompareOp::NotLike => "NOT LIKE",
                    CompareOp::ILike => params.dialect().ilike(false),
                    CompareOp::NotILike => params.dialect().ilike(true),
                };
                let placeholder = params.bind(value);
                format!("{} {} {}", field, op, placeholder)
            }
            Self::And(exprs) => join_group(exprs, " AND ", "(1=1)", params),
            Self::Or(exprs) => join_group(exprs, " OR ", "(1=0)", params),
            Self::Raw(sql) => sql.clone(),
        }
    }
}

fn join_group(exprs: &[Expr], separator: &str, empty: &str, params: &mut SqlParams) -> String {
    if exprs.is_empty() {
        return empty.to_string();
    }
    let parts: Vec<String> = exprs.iter().map(|e| e.to_sql(params)).collect();
    format!("({})", parts.join(separator))
}
