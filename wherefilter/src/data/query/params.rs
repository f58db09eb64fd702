//! Bound parameter collection

use crate::data::sql::{Backend, SqlDialect};

/// Collects SQL parameters during query building (maintains insertion order)
#[derive(Debug)]
pub struct SqlParams {
    pub values: Vec<String>,
    backend: Backend,
}

impl SqlParams {
    pub fn new(backend: Backend) -> Self {
        Self {
            values: Vec::new(),
            backend,
        }
    }

    /// Record a value and return the placeholder that refers to it
    pub fn bind(&mut self, value: &str) -> String {
        self.values.push(value.to_string());
        self.dialect().placeholder(self.values.len())
    }

    pub fn dialect(&self) -> &'static dyn SqlDialect {
        self.backend.dialect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_numbers_postgres_placeholders_in_order() {
        let mut params = SqlParams::new(Backend::Postgres);
        assert_eq!(params.bind("a"), "$1");
        assert_eq!(params.bind("b"), "$2");
        assert_eq!(params.values, vec!["a", "b"]);
    }

    #[test]
    fn bind_uses_question_marks_for_sqlite() {
        let mut params = SqlParams::new(Backend::Sqlite);
        assert_eq!(params.bind("a"), "?");
        assert_eq!(params.bind("b"), "?");
        assert_eq!(params.values.len(), 2);
    }
}
