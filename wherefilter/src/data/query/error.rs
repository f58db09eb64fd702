//! Query builder error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("select statement must specify at least one column")]
    NoColumns,

    #[error("select statement must specify a table")]
    NoTable,
}
