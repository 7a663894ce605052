//! Database layer - connection handle and statements
//!
//! # Design Principles
//!
//! - One connection per store, no pool, no shared global handle
//! - Stores are passed explicitly and closed where they were opened
//! - List reads aggregate todo counts with a LEFT JOIN (no N+1)

mod mapping;
mod statement;
mod store;

use futures::future::BoxFuture;

pub use store::ListStore;

use crate::config::DatabaseConfig;
use crate::error::Result;

/// Open a store, run `f` with it, then close it.
///
/// The connection is released whether or not `f` succeeds. When both `f`
/// and the close fail, `f`'s error is returned and the close error is
/// logged.
///
/// # Example
///
/// ```ignore
/// let lists = with_store(&config, |store| Box::pin(async move {
///     store.all_lists().await
/// }))
/// .await?;
/// ```
pub async fn with_store<T, F>(config: &DatabaseConfig, f: F) -> Result<T>
where
    F: for<'s> FnOnce(&'s mut ListStore) -> BoxFuture<'s, Result<T>>,
{
    let mut store = ListStore::connect(config).await?;
    let outcome = f(&mut store).await;
    let closed = store.close().await;

    match (outcome, closed) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(close_err)) => Err(close_err),
        (Err(err), Ok(())) => Err(err),
        (Err(err), Err(close_err)) => {
            tracing::warn!("failed to close database connection: {}", close_err);
            Err(err)
        }
    }
}
