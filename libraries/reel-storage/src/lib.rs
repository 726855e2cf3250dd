//! Reel Storage
//!
//! `SQLite` persistence for the Reel playlist catalog.
//!
//! The playlist record itself carries no behavior; everything the
//! record's invariants demand from its surroundings lives here:
//! referential integrity for `channel_id`, the atomic view-count
//! increment, and validation surfacing at create/update time.
//!
//! # Architecture
//!
//! - **Vertical slicing**: each entity owns its own queries
//!   (`playlists`, `channels`)
//! - **Embedded migrations**: schema ships inside the binary
//!
//! # Example
//!
//! ```rust,no_run
//! use reel_core::types::{CreateChannel, CreatePlaylist};
//! use reel_storage::{create_pool, run_migrations};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://reel.db").await?;
//! run_migrations(&pool).await?;
//!
//! let channel = reel_storage::channels::create(
//!     &pool,
//!     CreateChannel { name: "Lofi Beats".to_string() },
//! )
//! .await?;
//!
//! let playlist = reel_storage::playlists::create(
//!     &pool,
//!     CreatePlaylist {
//!         channel_id: channel.id,
//!         title: "Late Night Mix".to_string(),
//!         preview_url: "https://cdn.example.com/previews/late-night.jpg".to_string(),
//!     },
//! )
//! .await?;
//!
//! reel_storage::playlists::record_view(&pool, playlist.id).await?;
//! # Ok(())
//! # }
//! ```

mod error;

// Vertical slices
pub mod channels;
pub mod playlists;

pub use error::StorageError;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// Call once at application start to bring the schema up to date.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    tracing::debug!("running migrations");
    MIGRATOR.run(pool).await
}

/// Create a new `SQLite` pool
///
/// Foreign keys are switched on for every connection: `channel_id`
/// integrity is enforced by the database, not by the record.
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://reel.db>`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!(url = database_url, "creating sqlite pool");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::info!("sqlite pool ready");

    Ok(pool)
}
