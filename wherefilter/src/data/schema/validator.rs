//! Field validation capability
//!
//! The filter core consults a [`FieldValidator`] once per parsed condition.
//! [`NoopValidator`] accepts everything and is the default, so parsing never
//! needs a database. [`SchemaValidator`] checks conditions against a table's
//! column listing, usually loaded with
//! [`load_table_schema`](super::load_table_schema).

use std::fmt;

use super::error::ValidationError;

/// Generic column type, as far as filter values are concerned
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Text,
    /// Any other database type, kept by name
    Other(String),
}

impl ColumnType {
    /// Map a PostgreSQL `information_schema.columns.data_type` value
    pub fn from_data_type(data_type: &str) -> Self {
        match data_type {
            "character varying" | "text" | "varchar" | "char" | "character" => Self::Text,
            "smallint" | "integer" | "bigint" => Self::Integer,
            other => Self::Other(other.to_string()),
        }
    }

    /// Kind of a raw filter value: integer if it parses as one, text otherwise
    pub fn of_value(value: &str) -> Self {
        if value.parse::<i64>().is_ok() {
            Self::Integer
        } else {
            Self::Text
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::Integer => write!(f, "integer"),
            ColumnType::Text => write!(f, "text"),
            ColumnType::Other(name) => write!(f, "{}", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    pub name: String,
    pub column_type: ColumnType,
}

impl ColumnInfo {
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
        }
    }
}

/// Column name/type listing of one table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    table: String,
    columns: Vec<ColumnInfo>,
}

impl TableSchema {
    pub fn new(table: impl Into<String>, columns: Vec<ColumnInfo>) -> Self {
        Self {
            table: table.into(),
            columns,
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn columns(&self) -> &[ColumnInfo] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&ColumnInfo> {
        self.columns.iter().find(|c| c.name == name)
    }
}

/// Decides whether a field/value pair is acceptable before translation
pub trait FieldValidator: Send + Sync {
    /// `value` is `None` for bare field conditions
    fn validate(&self, field: &str, value: Option<&str>) -> Result<(), ValidationError>;
}

/// Accepts every condition
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopValidator;

impl FieldValidator for NoopValidator {
    fn validate(&self, _field: &str, _value: Option<&str>) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Checks field existence and value type against a [`TableSchema`]
#[derive(Debug, Clone)]
pub struct SchemaValidator {
    schema: TableSchema,
}

impl SchemaValidator {
    pub fn new(schema: TableSchema) -> Self {
        Self { schema }
    }
}

impl FieldValidator for SchemaValidator {
    fn validate(&self, field: &str, value: Option<&str>) -> Result<(), ValidationError> {
        let column = self
            .schema
            .column(field)
            .ok_or_else(|| ValidationError::UnknownField {
                field: field.to_string(),
                table: self.schema.table().to_string(),
            })?;

        let Some(value) = value else {
            return Ok(());
        };

        if let ColumnType::Other(data_type) = &column.column_type {
            return Err(ValidationError::UnsupportedColumnType {
                table: self.schema.table().to_string(),
                column: column.name.clone(),
                data_type: data_type.clone(),
            });
        }

        let actual = ColumnType::of_value(value);
        if actual != column.column_type {
            return Err(ValidationError::TypeMismatch {
                column: column.name.clone(),
                expected: column.column_type.clone(),
                actual,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cats() -> SchemaValidator {
        SchemaValidator::new(TableSchema::new(
            "cats",
            vec![
                ColumnInfo::new("id", ColumnType::Integer),
                ColumnInfo::new("name", ColumnType::Text),
                ColumnInfo::new("Foo.Bar.Alpha", ColumnType::Text),
                ColumnInfo::new("born_at", ColumnType::from_data_type("timestamp with time zone")),
            ],
        ))
    }

    #[test]
    fn accepts_matching_types() {
        let validator = cats();
        assert!(validator.validate("id", Some("1")).is_ok());
        assert!(validator.validate("name", Some("Dar")).is_ok());
        assert!(validator.validate("Foo.Bar.Alpha", Some("boris")).is_ok());
    }

    #[test]
    fn rejects_text_for_integer_column() {
        let err = cats().validate("id", Some("Dar")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "incorrect type for id column, required integer, got text"
        );
    }

    #[test]
    fn rejects_integer_for_text_column() {
        let err = cats().validate("name", Some("1")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "incorrect type for name column, required text, got integer"
        );
    }

    #[test]
    fn rejects_unknown_field() {
        let err = cats().validate("idddd", Some("1")).unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownField {
                field: "idddd".to_string(),
                table: "cats".to_string(),
            }
        );
    }

    #[test]
    fn bare_field_only_checks_existence() {
        let validator = cats();
        assert!(validator.validate("id", None).is_ok());
        assert!(validator.validate("born_at", None).is_ok());
        assert!(validator.validate("missing", None).is_err());
    }

    #[test]
    fn unsupported_column_type_with_value() {
        let err = cats().validate("born_at", Some("2024")).unwrap_err();
        assert!(matches!(err, ValidationError::UnsupportedColumnType { .. }));
    }

    #[test]
    fn data_type_mapping() {
        assert_eq!(ColumnType::from_data_type("character varying"), ColumnType::Text);
        assert_eq!(ColumnType::from_data_type("text"), ColumnType::Text);
        assert_eq!(ColumnType::from_data_type("integer"), ColumnType::Integer);
        assert_eq!(ColumnType::from_data_type("bigint"), ColumnType::Integer);
        assert_eq!(
            ColumnType::from_data_type("boolean"),
            ColumnType::Other("boolean".to_string())
        );
    }

    #[test]
    fn noop_accepts_everything() {
        assert!(NoopValidator.validate("anything", Some("x")).is_ok());
        assert!(NoopValidator.validate("", None).is_ok());
    }
}
