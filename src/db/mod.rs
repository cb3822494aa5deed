//! Database module: pool bootstrap, schema, row models, and the trivia store.
//!
//! Layout:
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `models.rs`: Rust structs mirroring DB rows
//! - `store.rs`: the `TriviaStore` persistence boundary and its SQLite impl

pub mod models;
pub mod schema;
pub mod store;

pub use schema::SQLITE_INIT;
pub use store::{SqliteTriviaStore, StoreTx, TriviaStore};

use crate::error::StoreError;
use sqlx::SqlitePool;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
};
use std::{str::FromStr, time::Duration};
use tracing::info;

/// Opens the SQLite pool and applies the schema idempotently.
pub async fn connect(database_url: &str) -> Result<SqlitePool, StoreError> {
    let connect_opts = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .busy_timeout(Duration::from_secs(5))
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;

    sqlx::raw_sql(SQLITE_INIT).execute(&pool).await?;

    info!("database initialized");
    Ok(pool)
}
