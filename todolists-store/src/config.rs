//! Connection configuration
//!
//! Production connects to whatever `DATABASE_URL` points at. Development
//! always uses the local `todo-lists` database, with host/user/password
//! taken from the usual `PG*` environment defaults.

use std::env;
use std::fmt;
use std::str::FromStr;

use sqlx::postgres::PgConnectOptions;
use sqlx::ConnectOptions;

use crate::error::ConfigError;

/// Database used outside production.
pub const DEVELOPMENT_DATABASE: &str = "todo-lists";

/// Deployment mode, read from `APP_ENV` (or `RACK_ENV`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    Production,
    #[default]
    Development,
}

impl Environment {
    /// Resolve the mode from the process environment.
    ///
    /// Only an explicit `production` selects production; anything else,
    /// including an unset variable, means development.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = lookup("APP_ENV").or_else(|| lookup("RACK_ENV"));
        match value {
            Some(v) if v.trim().eq_ignore_ascii_case("production") => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Development => "development",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Self::Production),
            "development" | "dev" => Ok(Self::Development),
            other => Err(ConfigError::UnknownEnvironment(other.to_owned())),
        }
    }
}

/// Where a store connects to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseConfig {
    /// Full connection string, e.g. `postgres://user@host/db`.
    Url(String),
    /// Named database on the default local server.
    Local { database: String },
}

impl DatabaseConfig {
    /// Use an explicit connection string regardless of environment.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self::Url(url.into())
    }

    /// The fixed development database.
    pub fn development() -> Self {
        Self::Local {
            database: DEVELOPMENT_DATABASE.to_owned(),
        }
    }

    /// Configuration for the given mode, reading `DATABASE_URL` in production.
    pub fn from_env(environment: Environment) -> Result<Self, ConfigError> {
        Self::for_environment(environment, env::var("DATABASE_URL").ok())
    }

    /// Configuration for the given mode with an already-resolved url.
    ///
    /// The url is required in production and ignored in development.
    pub fn for_environment(
        environment: Environment,
        database_url: Option<String>,
    ) -> Result<Self, ConfigError> {
        match environment {
            Environment::Production => database_url
                .filter(|url| !url.trim().is_empty())
                .map(Self::Url)
                .ok_or(ConfigError::MissingDatabaseUrl),
            Environment::Development => Ok(Self::development()),
        }
    }

    /// sqlx connect options for this configuration.
    ///
    /// sqlx's own statement logging is switched off; the store logs every
    /// statement itself.
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        let options = match self {
            Self::Url(url) => PgConnectOptions::from_str(url)
                .map_err(|e| ConfigError::InvalidUrl(e.to_string()))?,
            Self::Local { database } => PgConnectOptions::new().database(database),
        };
        Ok(options.disable_statement_logging())
    }
}

impl fmt::Display for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Never print credentials: userinfo or query parameters
            Self::Url(url) => {
                let url = url.split_once('?').map_or(url.as_str(), |(base, _)| base);
                match url.rsplit_once('@') {
                    Some((_, host)) => write!(f, "url ...@{host}"),
                    None => write!(f, "url {url}"),
                }
            }
            Self::Local { database } => write!(f, "local database '{database}'"),
        }
    }
}
