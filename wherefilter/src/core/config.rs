use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::data::filters::IdentifierPolicy;
use crate::data::sql::Backend;

use super::cli::CliConfig;
use super::constants::{
    APP_DOT_FOLDER, CONFIG_FILE_NAME, DEFAULT_BACKEND, DEFAULT_COLUMNS,
    POSTGRES_DEFAULT_ACQUIRE_TIMEOUT_SECS,
};

// =============================================================================
// File Configuration
// =============================================================================

/// Query configuration section (from JSON config file)
#[derive(Debug, Default, Clone, Deserialize)]
pub struct QueryFileConfig {
    /// Table rendered in FROM
    pub table: Option<String>,
    /// SELECT column list (default: ["*"])
    pub columns: Option<Vec<String>>,
    /// Placeholder backend: postgres (default) or sqlite
    pub backend: Option<Backend>,
}

/// Parser configuration section (from JSON config file)
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ParserFileConfig {
    /// Identifier policy: lenient (default) or qualified
    pub identifiers: Option<IdentifierPolicy>,
}

/// Database configuration section (from JSON config file)
#[derive(Debug, Default, Clone, Deserialize)]
pub struct DatabaseFileConfig {
    /// PostgreSQL connection URL (or use WHEREFILTER_POSTGRES_URL env var)
    pub postgres_url: Option<String>,
    /// Validate fields against the table schema (default: false)
    pub validate: Option<bool>,
    /// Connection acquire timeout in seconds (default: 10)
    pub acquire_timeout_secs: Option<u64>,
}

/// File-based configuration (JSON)
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub query: Option<QueryFileConfig>,
    pub parser: Option<ParserFileConfig>,
    pub database: Option<DatabaseFileConfig>,
    #[serde(flatten)]
    pub extra: serde_json::Value,
}

impl FileConfig {
    /// Load configuration from a JSON file
    fn load_from_file(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "Loading config file");
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        tracing::trace!(config = ?config, "Parsed config file");
        Ok(config)
    }

    /// Warn about unknown fields in the config
    fn warn_unknown_fields(&self) {
        if let serde_json::Value::Object(map) = &self.extra
            && !map.is_empty()
        {
            let keys_str: String = map
                .keys()
                .map(|k| k.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            tracing::warn!(
                fields = %keys_str,
                "Unknown fields in config file (possible typos)"
            );
        }
    }

    /// Merge another FileConfig into this one (other takes precedence)
    fn merge(&mut self, other: FileConfig) {
        if let Some(query) = other.query {
            let current = self.query.get_or_insert_with(QueryFileConfig::default);
            if query.table.is_some() {
                tracing::trace!(table = ?query.table, "Merging query.table");
                current.table = query.table;
            }
            if query.columns.is_some() {
                tracing::trace!(columns = ?query.columns, "Merging query.columns");
                current.columns = query.columns;
            }
            if query.backend.is_some() {
                tracing::trace!(backend = ?query.backend, "Merging query.backend");
                current.backend = query.backend;
            }
        }

        if let Some(parser) = other.parser {
            let current = self.parser.get_or_insert_with(ParserFileConfig::default);
            if parser.identifiers.is_some() {
                tracing::trace!(identifiers = ?parser.identifiers, "Merging parser.identifiers");
                current.identifiers = parser.identifiers;
            }
        }

        if let Some(database) = other.database {
            let current = self
                .database
                .get_or_insert_with(DatabaseFileConfig::default);
            if database.postgres_url.is_some() {
                tracing::trace!("Merging database.postgres_url");
                current.postgres_url = database.postgres_url;
            }
            if database.validate.is_some() {
                tracing::trace!(validate = ?database.validate, "Merging database.validate");
                current.validate = database.validate;
            }
            if database.acquire_timeout_secs.is_some() {
                current.acquire_timeout_secs = database.acquire_timeout_secs;
            }
        }
    }
}

// =============================================================================
// Resolved Configuration
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct QueryConfig {
    pub table: Option<String>,
    pub columns: Vec<String>,
    pub backend: Backend,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParserConfig {
    pub identifiers: IdentifierPolicy,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    pub postgres_url: Option<String>,
    pub validate: bool,
    pub acquire_timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub query: QueryConfig,
    pub parser: ParserConfig,
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from all sources
    ///
    /// Priority (lowest to highest):
    /// 1. Defaults
    /// 2. Profile directory config (~/.wherefilter/wherefilter.json)
    /// 3. Local directory config OR CLI-specified config path
    /// 4. CLI arguments (which include env var fallbacks via clap)
    pub fn load(cli: &CliConfig) -> Result<Self> {
        tracing::debug!("Loading application configuration");
        tracing::trace!(cli = ?cli, "CLI config");

        let mut file_config = FileConfig::default();
        let mut found_configs: Vec<String> = Vec::new();

        if let Some(profile_path) = get_profile_config_path()
            && profile_path.exists()
        {
            let profile_config = FileConfig::load_from_file(&profile_path)?;
            profile_config.warn_unknown_fields();
            file_config.merge(profile_config);
            found_configs.push(profile_path.display().to_string());
        }

        let overlay_path = if let Some(ref path) = cli.config {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            Some(path.clone())
        } else {
            let local = PathBuf::from(CONFIG_FILE_NAME);
            if local.exists() { Some(local) } else { None }
        };

        if let Some(path) = overlay_path {
            let overlay_config = FileConfig::load_from_file(&path)?;
            overlay_config.warn_unknown_fields();
            file_config.merge(overlay_config);
            found_configs.push(path.display().to_string());
        }

        tracing::debug!(configs = ?found_configs, "Config files loaded");

        Self::layer(cli, file_config)
    }

    /// Layer defaults -> file config -> CLI/env overrides
    fn layer(cli: &CliConfig, file_config: FileConfig) -> Result<Self> {
        let file_query = file_config.query.unwrap_or_default();
        let file_parser = file_config.parser.unwrap_or_default();
        let file_database = file_config.database.unwrap_or_default();

        let columns = cli
            .columns
            .as_deref()
            .map(split_columns)
            .or(file_query.columns)
            .unwrap_or_else(|| vec![DEFAULT_COLUMNS.to_string()]);

        let identifiers = match cli.strict_identifiers {
            Some(true) => IdentifierPolicy::Qualified,
            Some(false) => IdentifierPolicy::Lenient,
            None => file_parser.identifiers.unwrap_or_default(),
        };

        let config = Self {
            query: QueryConfig {
                table: cli.table.clone().or(file_query.table),
                columns,
                backend: cli
                    .backend
                    .or(file_query.backend)
                    .unwrap_or(DEFAULT_BACKEND),
            },
            parser: ParserConfig { identifiers },
            database: DatabaseConfig {
                postgres_url: cli.postgres_url.clone().or(file_database.postgres_url),
                validate: cli.validate.or(file_database.validate).unwrap_or(false),
                acquire_timeout_secs: file_database
                    .acquire_timeout_secs
                    .unwrap_or(POSTGRES_DEFAULT_ACQUIRE_TIMEOUT_SECS),
            },
        };

        config.validate()?;
        tracing::debug!(config = ?config, "Configuration loaded");
        Ok(config)
    }

    /// Validate the configuration for consistency and correctness
    fn validate(&self) -> Result<()> {
        if self.query.columns.is_empty() {
            anyhow::bail!("Configuration error: query.columns must not be empty");
        }

        if self.database.validate {
            if self.database.postgres_url.is_none() {
                anyhow::bail!(
                    "Configuration error: schema validation requires a PostgreSQL URL \
                     (--postgres-url or WHEREFILTER_POSTGRES_URL)"
                );
            }
            if self.query.table.is_none() {
                anyhow::bail!("Configuration error: schema validation requires --table");
            }
        }

        Ok(())
    }
}

/// Split a comma-separated column list, dropping empty entries
fn split_columns(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(String::from)
        .collect()
}

/// Get the profile config path (~/.wherefilter/wherefilter.json)
fn get_profile_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(APP_DOT_FOLDER).join(CONFIG_FILE_NAME))
}
