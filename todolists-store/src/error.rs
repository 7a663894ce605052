//! Error types for todolists-store

use thiserror::Error;

pub type Result<T, E = StoreError> = std::result::Result<T, E>;

/// Errors surfaced by the store.
///
/// Nothing here recovers: database failures are passed through as-is so the
/// calling layer decides how to report them.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Problems resolving where to connect.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("DATABASE_URL must be set in production")]
    MissingDatabaseUrl,

    #[error("invalid database url: {0}")]
    InvalidUrl(String),

    #[error("unknown environment '{0}' (expected production or development)")]
    UnknownEnvironment(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_convert_into_store_errors() {
        let err: StoreError = ConfigError::MissingDatabaseUrl.into();
        assert!(matches!(err, StoreError::Config(ConfigError::MissingDatabaseUrl)));
        assert_eq!(
            err.to_string(),
            "configuration error: DATABASE_URL must be set in production"
        );
    }

    #[test]
    fn database_errors_keep_their_source() {
        let err: StoreError = sqlx::Error::RowNotFound.into();
        match err {
            StoreError::Database(sqlx::Error::RowNotFound) => {}
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
