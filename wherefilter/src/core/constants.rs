use crate::data::sql::Backend;

// =============================================================================
// Application Identity
// =============================================================================

/// Application name in lowercase (for paths and identifiers)
pub const APP_NAME_LOWER: &str = "wherefilter";

/// Unix-style dotfile folder name
pub const APP_DOT_FOLDER: &str = ".wherefilter";

// =============================================================================
// Configuration Files
// =============================================================================

/// Config file name
pub const CONFIG_FILE_NAME: &str = "wherefilter.json";

/// Environment variable for config file path
pub const ENV_CONFIG: &str = "WHEREFILTER_CONFIG";

/// Environment variable for log level/filter
pub const ENV_LOG: &str = "WHEREFILTER_LOG";

// =============================================================================
// Environment Variables - Query
// =============================================================================

/// Environment variable for the table rendered in FROM
pub const ENV_TABLE: &str = "WHEREFILTER_TABLE";

/// Environment variable for the comma-separated SELECT column list
pub const ENV_COLUMNS: &str = "WHEREFILTER_COLUMNS";

/// Environment variable for the placeholder backend (postgres or sqlite)
pub const ENV_BACKEND: &str = "WHEREFILTER_BACKEND";

/// Environment variable for whole-token identifier checking
pub const ENV_STRICT_IDENTIFIERS: &str = "WHEREFILTER_STRICT_IDENTIFIERS";

// =============================================================================
// Environment Variables - Database
// =============================================================================

/// Environment variable to validate fields against the live table schema
pub const ENV_VALIDATE: &str = "WHEREFILTER_VALIDATE";

/// Environment variable for the PostgreSQL connection URL
pub const ENV_POSTGRES_URL: &str = "WHEREFILTER_POSTGRES_URL";

// =============================================================================
// Defaults
// =============================================================================

/// Default SELECT column list
pub const DEFAULT_COLUMNS: &str = "*";

/// Default placeholder backend
pub const DEFAULT_BACKEND: Backend = Backend::Postgres;

/// Default connection acquire timeout when loading a table schema
pub const POSTGRES_DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 10;
