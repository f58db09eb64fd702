use clap::{Parser, Subcommand};

use std::path::PathBuf;

use crate::data::sql::Backend;

use super::constants::{
    ENV_BACKEND, ENV_COLUMNS, ENV_CONFIG, ENV_POSTGRES_URL, ENV_STRICT_IDENTIFIERS, ENV_TABLE,
    ENV_VALIDATE,
};

#[derive(Parser)]
#[command(name = "wherefilter")]
#[command(version, about = "Translate filter expressions into SQL WHERE clauses", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Table rendered in the FROM clause
    #[arg(long, short = 't', global = true, env = ENV_TABLE)]
    pub table: Option<String>,

    /// Comma-separated SELECT column list
    #[arg(long, global = true, env = ENV_COLUMNS)]
    pub columns: Option<String>,

    /// Placeholder backend (postgres or sqlite)
    #[arg(long, short = 'b', global = true, env = ENV_BACKEND, value_parser = parse_backend)]
    pub backend: Option<Backend>,

    /// Require every field to be a whole dot-qualified identifier
    #[arg(long, global = true, env = ENV_STRICT_IDENTIFIERS)]
    pub strict_identifiers: Option<bool>,

    /// Validate fields and values against the table's PostgreSQL schema
    #[arg(long, global = true, env = ENV_VALIDATE)]
    pub validate: Option<bool>,

    /// PostgreSQL connection URL (required with --validate)
    #[arg(long, global = true, env = ENV_POSTGRES_URL)]
    pub postgres_url: Option<String>,

    /// Path to config file
    #[arg(long, short = 'c', global = true, env = ENV_CONFIG)]
    pub config: Option<PathBuf>,
}

/// Parse placeholder backend from CLI/env string
fn parse_backend(s: &str) -> Result<Backend, String> {
    match s.to_lowercase().as_str() {
        "postgres" | "postgresql" => Ok(Backend::Postgres),
        "sqlite" => Ok(Backend::Sqlite),
        _ => Err(format!(
            "Invalid backend '{}'. Valid options: postgres, sqlite",
            s
        )),
    }
}

#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Print the SELECT statement and its bound parameters
    Render {
        /// Filter expression, e.g. "age > 3 AND NOT name = 'Tom'"
        filter: String,
        /// Print as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
    /// Print the parsed condition list as JSON
    Inspect {
        /// Filter expression
        filter: String,
    },
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub table: Option<String>,
    pub columns: Option<String>,
    pub backend: Option<Backend>,
    pub strict_identifiers: Option<bool>,
    pub validate: Option<bool>,
    pub postgres_url: Option<String>,
    pub config: Option<PathBuf>,
}

/// Parse CLI arguments and return config with command
pub fn parse() -> (CliConfig, Commands) {
    let cli = Cli::parse();
    let config = CliConfig {
        table: cli.table,
        columns: cli.columns,
        backend: cli.backend,
        strict_identifiers: cli.strict_identifiers,
        validate: cli.validate,
        postgres_url: cli.postgres_url,
        config: cli.config,
    };
    (config, cli.command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_backend() {
        assert_eq!(parse_backend("postgres"), Ok(Backend::Postgres));
        assert_eq!(parse_backend("PostgreSQL"), Ok(Backend::Postgres));
        assert_eq!(parse_backend("sqlite"), Ok(Backend::Sqlite));
        assert!(parse_backend("duckdb").is_err());
    }

    #[test]
    fn test_cli_render_with_options() {
        let cli = Cli::try_parse_from([
            "wherefilter",
            "--table",
            "cats",
            "--backend",
            "sqlite",
            "render",
            "age > 3",
            "--json",
        ])
        .unwrap();

        assert_eq!(cli.table.as_deref(), Some("cats"));
        assert_eq!(cli.backend, Some(Backend::Sqlite));
        match cli.command {
            Commands::Render { filter, json } => {
                assert_eq!(filter, "age > 3");
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_global_options_after_subcommand() {
        let cli = Cli::try_parse_from(["wherefilter", "inspect", "a = 1", "--validate", "true"])
            .unwrap();
        assert_eq!(cli.validate, Some(true));
        assert!(matches!(cli.command, Commands::Inspect { .. }));
    }
}
