//! Schema-aware field validation
//!
//! Optional: the filter core runs with [`NoopValidator`] unless a caller
//! injects something else.

mod error;
mod postgres;
mod validator;

pub use error::{SchemaError, ValidationError};
pub use postgres::{connect, load_table_schema};
pub use validator::{
    ColumnInfo, ColumnType, FieldValidator, NoopValidator, SchemaValidator, TableSchema,
};
