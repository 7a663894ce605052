//! todolists-store: PostgreSQL data access for todo lists
//!
//! A thin layer that turns list/todo operations into parameterized SQL,
//! runs them over a single connection and maps rows into plain records.
//!
//! # Design Principles
//!
//! - One connection per store, borrowed mutably per operation
//! - Aggregated counts come from a LEFT JOIN, never cached
//! - Engine errors pass through untouched
//! - Every statement is logged with its parameters before it runs

pub mod config;
pub mod db;
pub mod error;
pub mod models;

pub use config::{DatabaseConfig, Environment, DEVELOPMENT_DATABASE};
pub use db::{with_store, ListStore};
pub use error::{ConfigError, Result, StoreError};
pub use models::{List, ListId, Todo, TodoId};
