//! Playlist queries
//!
//! Creation assigns the UUID and timestamp; `record_view` owns the
//! counter increment as a single atomic statement so concurrent views
//! cannot lose updates.

use chrono::{DateTime, Utc};
use reel_core::{error::Result, types::*, ReelError};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

/// Create a new playlist
///
/// Validates the payload, assigns a fresh ID and creation timestamp,
/// and inserts. A missing owning channel surfaces as
/// `ReelError::ChannelNotFound`.
pub async fn create(pool: &SqlitePool, create: CreatePlaylist) -> Result<Playlist> {
    create.validate()?;

    let playlist = Playlist::new(create.channel_id, create.title, create.preview_url);

    let result = sqlx::query(
        r#"
        INSERT INTO playlists (id, channel_id, title, preview_url, created_at, views_count)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(playlist.id.clone())
    .bind(playlist.channel_id.clone())
    .bind(&playlist.title)
    .bind(&playlist.preview_url)
    .bind(playlist.created_at.to_rfc3339())
    .bind(i64::from(playlist.views_count))
    .execute(pool)
    .await;

    if let Err(err) = result {
        if is_foreign_key_violation(&err) {
            return Err(ReelError::ChannelNotFound(playlist.channel_id));
        }
        return Err(err.into());
    }

    Ok(playlist)
}

/// Get playlist by ID
pub async fn get_by_id(pool: &SqlitePool, id: PlaylistId) -> Result<Option<Playlist>> {
    let row = sqlx::query(
        r#"
        SELECT id, channel_id, title, preview_url, created_at, views_count
        FROM playlists
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.map(|row| row_to_playlist(&row)).transpose()
}

/// Get a channel's playlists, newest first
pub async fn get_channel_playlists(
    pool: &SqlitePool,
    channel_id: ChannelId,
) -> Result<Vec<Playlist>> {
    let rows = sqlx::query(
        r#"
        SELECT id, channel_id, title, preview_url, created_at, views_count
        FROM playlists
        WHERE channel_id = ?
        ORDER BY created_at DESC
        "#,
    )
    .bind(channel_id)
    .fetch_all(pool)
    .await?;

    rows.iter().map(row_to_playlist).collect()
}

/// Edit a playlist's title and/or preview URL
///
/// The ID, owning channel, creation timestamp, and view counter are
/// not reachable through this path.
pub async fn update(pool: &SqlitePool, id: PlaylistId, update: UpdatePlaylist) -> Result<Playlist> {
    update.validate()?;

    if !update.is_empty() {
        let result = sqlx::query(
            r#"
            UPDATE playlists
            SET title = COALESCE(?, title),
                preview_url = COALESCE(?, preview_url)
            WHERE id = ?
            "#,
        )
        .bind(&update.title)
        .bind(&update.preview_url)
        .bind(id.clone())
        .execute(pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(ReelError::PlaylistNotFound(id));
        }
    }

    get_by_id(pool, id.clone())
        .await?
        .ok_or(ReelError::PlaylistNotFound(id))
}

/// Record one view, returning the new count
///
/// One atomic UPDATE; concurrent callers each land their increment.
pub async fn record_view(pool: &SqlitePool, id: PlaylistId) -> Result<u32> {
    let row = sqlx::query(
        r#"
        UPDATE playlists
        SET views_count = views_count + 1
        WHERE id = ?
        RETURNING views_count
        "#,
    )
    .bind(id.clone())
    .fetch_optional(pool)
    .await?;

    match row {
        Some(row) => views_from_row(&row),
        None => Err(ReelError::PlaylistNotFound(id)),
    }
}

/// Delete playlist
pub async fn delete(pool: &SqlitePool, id: PlaylistId) -> Result<()> {
    let result = sqlx::query("DELETE FROM playlists WHERE id = ?")
        .bind(id.clone())
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ReelError::PlaylistNotFound(id));
    }

    Ok(())
}

// Helper functions

fn row_to_playlist(row: &SqliteRow) -> Result<Playlist> {
    Ok(Playlist::with_id(
        row.get("id"),
        row.get("channel_id"),
        row.get::<String, _>("title"),
        row.get::<String, _>("preview_url"),
        parse_timestamp(&row.get::<String, _>("created_at"))?,
        views_from_row(row)?,
    ))
}

fn views_from_row(row: &SqliteRow) -> Result<u32> {
    // The schema CHECK keeps the column non-negative
    u32::try_from(row.get::<i64, _>("views_count"))
        .map_err(|_| ReelError::storage("views_count out of range"))
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|err| ReelError::storage(format!("invalid created_at '{raw}': {err}")))
}

fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.message().contains("FOREIGN KEY"))
}
