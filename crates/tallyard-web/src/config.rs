//! Environment configuration for the server binary.

/// Default listen port when `PORT` is unset.
const DEFAULT_PORT: u16 = 3000;

/// Default bind address when `BIND_ADDR` is unset.
const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

/// Errors raised while reading the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is unset or empty.
    #[error("missing required environment variable {name}")]
    MissingVar {
        /// Variable name
        name: &'static str,
    },

    /// A variable is set to something unusable.
    #[error("invalid value for {name}: {message}")]
    InvalidVar {
        /// Variable name
        name: &'static str,
        /// What was wrong with it
        message: String,
    },
}

/// Spreadsheet export settings. Present only when both the sheet id and
/// the credentials path are configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetConfig {
    /// Path to the service-account JSON key file.
    pub credentials_path: String,
    /// Target spreadsheet id.
    pub spreadsheet_id: String,
    /// Sheet/range override for the append, if any.
    pub range: Option<String>,
}

/// Full server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// PostgreSQL connection string.
    pub database_url: String,
    /// Address to bind.
    pub bind_addr: String,
    /// Port to listen on.
    pub port: u16,
    /// Spreadsheet export settings, when configured.
    pub sheet: Option<SheetConfig>,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads configuration through an arbitrary variable lookup.
    ///
    /// Split out from [`AppConfig::from_env`] so tests can supply values
    /// without mutating process-global state.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingVar {
                name: "DATABASE_URL",
            })?;

        let port = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidVar {
                name: "PORT",
                message: format!("'{raw}' is not a port number"),
            })?,
            None => DEFAULT_PORT,
        };

        let bind_addr = lookup("BIND_ADDR")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let sheet = match (lookup("SHEET_ID"), lookup("GOOGLE_SHEET_CREDENTIALS_PATH")) {
            (Some(spreadsheet_id), Some(credentials_path))
                if !spreadsheet_id.is_empty() && !credentials_path.is_empty() =>
            {
                Some(SheetConfig {
                    credentials_path,
                    spreadsheet_id,
                    range: lookup("SHEET_RANGE").filter(|v| !v.is_empty()),
                })
            }
            _ => None,
        };

        Ok(AppConfig {
            database_url,
            bind_addr,
            port,
            sheet,
        })
    }
}
