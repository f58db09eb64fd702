//! PostgreSQL SQL dialect implementation

use super::SqlDialect;

/// PostgreSQL SQL dialect
pub struct PostgresDialect;

impl SqlDialect for PostgresDialect {
    fn name(&self) -> &'static str {
        "postgres"
    }

    fn placeholder(&self, index: usize) -> String {
        format!("${}", index)
    }

    fn ilike(&self, negated: bool) -> &'static str {
        if negated { "NOT ILIKE" } else { "ILIKE" }
    }
}
