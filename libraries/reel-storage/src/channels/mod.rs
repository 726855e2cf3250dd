//! Channel queries
//!
//! The catalog only needs enough of the channel entity to anchor the
//! `channel_id` foreign key; the channel service owns the rest.

use crate::StorageError;
use chrono::{DateTime, Utc};
use reel_core::types::{Channel, ChannelId, CreateChannel};
use sqlx::{Row, SqlitePool};

type Result<T> = std::result::Result<T, StorageError>;

/// Create a new channel
pub async fn create(pool: &SqlitePool, create: CreateChannel) -> Result<Channel> {
    let channel = Channel::new(create.name);

    sqlx::query("INSERT INTO channels (id, name, created_at) VALUES (?, ?, ?)")
        .bind(channel.id.clone())
        .bind(&channel.name)
        .bind(channel.created_at.to_rfc3339())
        .execute(pool)
        .await?;

    Ok(channel)
}

/// Get channel by ID
pub async fn get_by_id(pool: &SqlitePool, id: ChannelId) -> Result<Option<Channel>> {
    let row = sqlx::query("SELECT id, name, created_at FROM channels WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.map(|row| {
        Ok(Channel {
            id: row.get("id"),
            name: row.get("name"),
            created_at: parse_timestamp(&row.get::<String, _>("created_at"))?,
        })
    })
    .transpose()
}

/// Delete channel
///
/// The schema cascades the delete to the channel's playlists.
pub async fn delete(pool: &SqlitePool, id: ChannelId) -> Result<()> {
    let result = sqlx::query("DELETE FROM channels WHERE id = ?")
        .bind(id.clone())
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(StorageError::not_found("channel", id.as_str()));
    }

    Ok(())
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|err| StorageError::Query(format!("invalid created_at '{raw}': {err}")))
}
