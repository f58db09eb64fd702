//! Field validation and schema loading errors

use thiserror::Error;

use super::validator::ColumnType;

/// A condition that does not fit the table it is meant for
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("there is no field {field} in table {table}")]
    UnknownField { field: String, table: String },

    #[error("incorrect type for {column} column, required {expected}, got {actual}")]
    TypeMismatch {
        column: String,
        expected: ColumnType,
        actual: ColumnType,
    },

    #[error("unexpected data type {data_type} received from table {table}, column {column}")]
    UnsupportedColumnType {
        table: String,
        column: String,
        data_type: String,
    },
}

/// Failure to read a table's column listing
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Table {0} not found or has no columns")]
    TableNotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_field_display() {
        let err = ValidationError::UnknownField {
            field: "idddd".to_string(),
            table: "cats".to_string(),
        };
        assert_eq!(err.to_string(), "there is no field idddd in table cats");
    }

    #[test]
    fn test_type_mismatch_display() {
        let err = ValidationError::TypeMismatch {
            column: "id".to_string(),
            expected: ColumnType::Integer,
            actual: ColumnType::Text,
        };
        assert_eq!(
            err.to_string(),
            "incorrect type for id column, required integer, got text"
        );
    }

    #[test]
    fn test_table_not_found_display() {
        let err = SchemaError::TableNotFound("cats".to_string());
        assert_eq!(err.to_string(), "Table cats not found or has no columns");
    }
}
