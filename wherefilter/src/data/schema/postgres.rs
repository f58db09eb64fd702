//! PostgreSQL column listing for schema validation

use std::time::Duration;

use sqlx::ConnectOptions;
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use tracing::log::LevelFilter;

use super::error::SchemaError;
use super::validator::{ColumnInfo, ColumnType, TableSchema};

const COLUMNS_QUERY: &str = "SELECT column_name::text, data_type::text \
     FROM information_schema.columns \
     WHERE table_name = $1 \
     ORDER BY ordinal_position";

/// Open a single-connection pool for schema lookups
pub async fn connect(url: &str, acquire_timeout_secs: u64) -> Result<PgPool, SchemaError> {
    if url.is_empty() {
        return Err(SchemaError::Config("PostgreSQL URL is required".into()));
    }

    let mut options: PgConnectOptions = url
        .parse()
        .map_err(|e| SchemaError::Config(format!("Invalid PostgreSQL URL: {}", e)))?;
    options = options.log_statements(LevelFilter::Trace);

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(Duration::from_secs(acquire_timeout_secs))
        .connect_with(options)
        .await?;

    tracing::debug!("PostgreSQL connection established");
    Ok(pool)
}

/// Read the column names and types of `table` from `information_schema`
pub async fn load_table_schema(pool: &PgPool, table: &str) -> Result<TableSchema, SchemaError> {
    let rows: Vec<(String, String)> = sqlx::query_as(COLUMNS_QUERY)
        .bind(table)
        .fetch_all(pool)
        .await?;

    if rows.is_empty() {
        return Err(SchemaError::TableNotFound(table.to_string()));
    }

    let columns = rows
        .into_iter()
        .map(|(name, data_type)| ColumnInfo::new(name, ColumnType::from_data_type(&data_type)))
        .collect::<Vec<_>>();

    tracing::debug!(table, columns = columns.len(), "Loaded table schema");
    Ok(TableSchema::new(table, columns))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn connect_rejects_empty_url() {
        let err = connect("", 1).await.unwrap_err();
        assert_eq!(err.to_string(), "Configuration error: PostgreSQL URL is required");
    }

    #[tokio::test]
    async fn connect_rejects_malformed_url() {
        let err = connect("not a url", 1).await.unwrap_err();
        assert!(matches!(err, SchemaError::Config(_)));
    }
}
