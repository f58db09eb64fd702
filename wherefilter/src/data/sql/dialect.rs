//! SQL dialect trait for placeholder selection
//!
//! This trait defines the interface for generating database-specific SQL syntax.

/// SQL dialect trait for generating database-specific SQL
pub trait SqlDialect: Send + Sync {
    /// Get the dialect name
    fn name(&self) -> &'static str;

    /// Generate a parameter placeholder for the given index (1-based)
    ///
    /// - SQLite: Always returns "?"
    /// - PostgreSQL: Returns "$1", "$2", etc.
    fn placeholder(&self, index: usize) -> String;

    /// Operator for case-insensitive LIKE
    ///
    /// - PostgreSQL: `ILIKE`
    /// - SQLite: `LIKE` (already case-insensitive for ASCII)
    fn ilike(&self, negated: bool) -> &'static str;
}
