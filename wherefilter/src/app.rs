//! Core application

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::core::cli::{self, Commands};
use crate::core::config::AppConfig;
use crate::core::constants::{APP_NAME_LOWER, ENV_LOG};
use crate::data::filters::FilterParser;
use crate::data::query::SelectBuilder;
use crate::data::schema::{self, FieldValidator, NoopValidator, SchemaValidator};

pub struct CoreApp {
    pub config: AppConfig,
    pub parser: FilterParser,
}

impl CoreApp {
    /// Run the application with CLI argument parsing
    pub async fn run() -> Result<()> {
        dotenvy::dotenv().ok();
        Self::init_logging();

        tracing::debug!("Application starting");

        let (cli_config, command) = cli::parse();
        tracing::trace!(command = ?command, "Parsed command");

        let config = AppConfig::load(&cli_config)?;

        match command {
            Commands::Render { filter, json } => {
                let app = Self::init(config, true).await?;
                app.render(&filter, json)
            }
            Commands::Inspect { filter } => {
                let app = Self::init(config, false).await?;
                app.inspect(&filter)
            }
        }
    }

    async fn init(config: AppConfig, with_validation: bool) -> Result<Self> {
        let validator = if with_validation && config.database.validate {
            Self::load_validator(&config).await?
        } else {
            Arc::new(NoopValidator) as Arc<dyn FieldValidator>
        };

        let parser = FilterParser::new()
            .with_identifier_policy(config.parser.identifiers)
            .with_backend(config.query.backend)
            .with_validator(validator);

        Ok(Self { config, parser })
    }

    /// Load the table's columns from PostgreSQL and build a schema validator
    async fn load_validator(config: &AppConfig) -> Result<Arc<dyn FieldValidator>> {
        let url = config
            .database
            .postgres_url
            .as_deref()
            .context("PostgreSQL URL is required for schema validation")?;
        let table = config
            .query
            .table
            .as_deref()
            .context("A table is required for schema validation")?;

        let pool = schema::connect(url, config.database.acquire_timeout_secs)
            .await
            .context("Failed to connect to PostgreSQL")?;
        let table_schema = schema::load_table_schema(&pool, table).await;
        pool.close().await;
        let table_schema =
            table_schema.with_context(|| format!("Failed to load schema of table {}", table))?;

        tracing::info!(
            table,
            columns = table_schema.columns().len(),
            "Schema validation enabled"
        );
        Ok(Arc::new(SchemaValidator::new(table_schema)))
    }

    fn render(&self, filter: &str, json: bool) -> Result<()> {
        let table = self
            .config
            .query
            .table
            .as_deref()
            .context("No table configured (use --table or query.table in the config file)")?;

        let builder = SelectBuilder::select(self.config.query.columns.iter()).from(table);
        let builder = self.parser.apply(filter, builder)?;
        let (sql, params) = builder.to_sql()?;

        if json {
            let output = serde_json::json!({ "sql": sql, "params": params });
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{}", sql);
            for (i, param) in params.iter().enumerate() {
                println!("  [{}] {}", i + 1, param);
            }
        }
        Ok(())
    }

    fn inspect(&self, filter: &str) -> Result<()> {
        let conditions = self.parser.parse_conditions(filter)?;
        println!("{}", serde_json::to_string_pretty(&conditions)?);
        Ok(())
    }

    fn init_logging() {
        let default_filter = format!("info,{}=info", APP_NAME_LOWER);

        let filter = std::env::var(ENV_LOG)
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or(default_filter);

        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_ids(false)
            .with_level(true)
            .with_ansi(true)
            .compact()
            .with_env_filter(filter)
            .init();
    }
}
