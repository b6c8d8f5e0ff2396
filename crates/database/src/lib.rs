//! PostgreSQL persistence for finished training episodes.
//!
//! One table holds every sealed episode twice over: queryable scalar
//! columns for statistics and listings, and the full episode document as
//! JSONB for dataset export. Writes happen once per finished game on the
//! episode hand-off; reads come from the HTTP query surface.
//!
//! ## Connectivity
//!
//! - [`db()`] — Establishes a database connection from `DB_URL`
//!
//! ## Core Types
//!
//! - [`Schema`] — Table metadata and DDL generation
//! - [`Store`] — Episode writes and dataset queries
//! - [`Stats`] — Aggregate win/length statistics
mod schema;
mod store;

pub use schema::*;
pub use store::*;

use std::sync::Arc;
use tokio_postgres::Client;

/// Establishes a database connection.
///
/// Connects to PostgreSQL using the `DB_URL` environment variable.
/// Returns an `Arc<Client>` suitable for sharing across async tasks.
///
/// # Panics
///
/// Panics if `DB_URL` is not set or if connection fails.
pub async fn db() -> Arc<Client> {
    log::info!("connecting to database");
    let tls = tokio_postgres::tls::NoTls;
    let ref url = std::env::var("DB_URL").expect("DB_URL must be set");
    let (client, connection) = tokio_postgres::connect(url, tls)
        .await
        .expect("database connection failed");
    tokio::spawn(connection);
    client
        .execute("SET client_min_messages TO WARNING", &[])
        .await
        .expect("set client_min_messages");
    Arc::new(client)
}

/// PostgreSQL error type alias.
pub type PgErr = tokio_postgres::Error;

/// Table for sealed training episodes.
#[rustfmt::skip]
pub const EPISODES: &str = "episodes";
