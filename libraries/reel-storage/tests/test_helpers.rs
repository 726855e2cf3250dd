//! Test helpers and fixtures for storage integration tests
//!
//! These helpers create test databases using REAL SQLite files (NOT
//! in-memory) to match production behavior and properly test
//! migrations, constraints, and indexes.

use reel_core::types::*;
use sqlx::SqlitePool;
use tempfile::TempDir;

/// Test database wrapper that cleans up on drop
pub struct TestDb {
    pub pool: SqlitePool,
    _temp_dir: TempDir,
}

impl TestDb {
    /// Create a new test database with migrations applied
    pub async fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let db_url = format!("sqlite://{}", db_path.display());

        let pool = reel_storage::create_pool(&db_url)
            .await
            .expect("Failed to create pool");

        reel_storage::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        Self {
            pool,
            _temp_dir: temp_dir,
        }
    }

    /// Get the pool reference
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Test fixture: Create a test channel
pub async fn create_test_channel(pool: &SqlitePool, name: &str) -> ChannelId {
    let channel = reel_storage::channels::create(
        pool,
        CreateChannel {
            name: name.to_string(),
        },
    )
    .await
    .expect("Failed to create test channel");

    channel.id
}

/// Test fixture: Create a test playlist
pub async fn create_test_playlist(
    pool: &SqlitePool,
    channel_id: ChannelId,
    title: &str,
) -> PlaylistId {
    let playlist = reel_storage::playlists::create(
        pool,
        CreatePlaylist {
            channel_id,
            title: title.to_string(),
            preview_url: format!("https://cdn.example.com/previews/{title}.jpg"),
        },
    )
    .await
    .expect("Failed to create test playlist");

    playlist.id
}
