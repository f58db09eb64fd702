//! SQL dialects
//!
//! Placeholder style and the few operator spellings that differ between
//! PostgreSQL and SQLite.

mod dialect;
mod postgres_dialect;
mod sqlite_dialect;

pub use dialect::SqlDialect;
pub use postgres_dialect::PostgresDialect;
pub use sqlite_dialect::SqliteDialect;

use serde::{Deserialize, Serialize};

/// Database backend identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    Sqlite,
    Postgres,
}

impl Backend {
    /// Get the SQL dialect for this backend
    pub fn dialect(&self) -> &'static dyn SqlDialect {
        match self {
            Backend::Sqlite => &SqliteDialect,
            Backend::Postgres => &PostgresDialect,
        }
    }

    /// Get the backend name
    pub fn name(&self) -> &'static str {
        self.dialect().name()
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
