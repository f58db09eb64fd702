//! SELECT statement builder

use crate::data::sql::Backend;

use super::error::QueryError;
use super::expr::Expr;
use super::params::SqlParams;

/// Target of filter composition
///
/// The filter core only needs to attach WHERE expressions and pick the
/// placeholder style; anything that can do both can receive a filter.
pub trait WhereClauseBuilder: Sized {
    /// Attach an expression; successive expressions are ANDed together
    fn where_expr(self, expr: Expr) -> Self;

    /// Select the placeholder style used when rendering
    fn placeholder(self, backend: Backend) -> Self;
}

/// Builds `SELECT <columns> FROM <table> [WHERE ...]` statements
///
/// Owned and consumed by value at each step, so a builder is never shared
/// between concurrent filter calls.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectBuilder {
    columns: Vec<String>,
    table: Option<String>,
    wheres: Vec<Expr>,
    backend: Backend,
}

impl SelectBuilder {
    /// Start a select over the given columns, with `?` placeholders
    pub fn select<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            table: None,
            wheres: Vec::new(),
            backend: Backend::Sqlite,
        }
    }

    pub fn from(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Expressions attached so far, in attachment order
    pub fn wheres(&self) -> &[Expr] {
        &self.wheres
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Render SQL text and the ordered bind values
    ///
    /// Placeholder numbering restarts at 1 on every call.
    pub fn to_sql(&self) -> Result<(String, Vec<String>), QueryError> {
        if self.columns.is_empty() {
            return Err(QueryError::NoColumns);
        }
        let table = self.table.as_deref().ok_or(QueryError::NoTable)?;

        let mut params = SqlParams::new(self.backend);
        let mut sql = format!("SELECT {} FROM {}", self.columns.join(", "), table);

        if !self.wheres.is_empty() {
            let clauses: Vec<String> = self.wheres.iter().map(|e| e.to_sql(&mut params)).collect();
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }

        Ok((sql, params.values))
    }
}

impl WhereClauseBuilder for SelectBuilder {
    fn where_expr(mut self, expr: Expr) -> Self {
        self.wheres.push(expr);
        self
    }

    fn placeholder(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }
}
