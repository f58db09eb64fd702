//! SQLite SQL dialect implementation

use super::SqlDialect;

/// SQLite SQL dialect
pub struct SqliteDialect;

impl SqlDialect for SqliteDialect {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn placeholder(&self, _index: usize) -> String {
        "?".to_string()
    }

    fn ilike(&self, negated: bool) -> &'static str {
        // SQLite has no ILIKE; LIKE is case-insensitive for ASCII
        if negated { "NOT LIKE" } else { "LIKE" }
    }
}
