//! Data layer
//!
//! - `filters` - Filter expression parsing and WHERE clause translation
//! - `query` - Minimal SELECT builder the filters compose onto
//! - `sql` - Dialect abstraction (placeholders, case-insensitive matching)
//! - `schema` - Field validation against a table's column definitions

pub mod filters;
pub mod query;
pub mod schema;
pub mod sql;

pub use filters::{FilterError, FilterParser, parse_filter};
pub use query::{Expr, SelectBuilder, WhereClauseBuilder};
pub use schema::{FieldValidator, NoopValidator, SchemaValidator};
pub use sql::Backend;
