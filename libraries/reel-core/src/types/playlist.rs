/// Playlist domain types
use crate::error::{ReelError, Result};
use crate::types::ids::{ChannelId, PlaylistId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum title length in characters
pub const TITLE_MAX_LEN: usize = 100;

/// Maximum preview URL length in characters
pub const PREVIEW_URL_MAX_LEN: usize = 255;

/// A named collection of media items owned by a channel
///
/// The wire shape uses the field names below verbatim: `id`,
/// `channel_id`, `title`, `preview_url`, `created_at`, `views_count`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Unique playlist identifier, assigned once at creation
    pub id: PlaylistId,

    /// Owning channel ID (non-owning reference; the storage layer
    /// enforces that it points at an existing channel)
    pub channel_id: ChannelId,

    /// Display title
    pub title: String,

    /// Preview image URL
    pub preview_url: String,

    /// Creation timestamp, never modified afterwards
    pub created_at: DateTime<Utc>,

    /// View counter; starts at 0 and only ever grows
    pub views_count: u32,
}

impl Playlist {
    /// Create a new playlist with a fresh ID, the current time, and
    /// zero views
    pub fn new(
        channel_id: ChannelId,
        title: impl Into<String>,
        preview_url: impl Into<String>,
    ) -> Self {
        Self {
            id: PlaylistId::generate(),
            channel_id,
            title: title.into(),
            preview_url: preview_url.into(),
            created_at: Utc::now(),
            views_count: 0,
        }
    }

    /// Create a playlist with specific values (for database loading)
    pub fn with_id(
        id: PlaylistId,
        channel_id: ChannelId,
        title: impl Into<String>,
        preview_url: impl Into<String>,
        created_at: DateTime<Utc>,
        views_count: u32,
    ) -> Self {
        Self {
            id,
            channel_id,
            title: title.into(),
            preview_url: preview_url.into(),
            created_at,
            views_count,
        }
    }

    /// Check required fields and length bounds
    pub fn validate(&self) -> Result<()> {
        validate_fields(&self.channel_id, &self.title, &self.preview_url)
    }
}

/// Data for creating a new playlist
///
/// Id, timestamp, and view counter are assigned by the storage layer
/// at insert time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylist {
    pub channel_id: ChannelId,
    pub title: String,
    pub preview_url: String,
}

impl CreatePlaylist {
    /// Check required fields and length bounds
    pub fn validate(&self) -> Result<()> {
        validate_fields(&self.channel_id, &self.title, &self.preview_url)
    }
}

/// Partial edit of a playlist's mutable fields
///
/// Only the title and preview URL can change after creation; the ID,
/// owning channel, creation time, and view counter cannot be set
/// through an update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePlaylist {
    pub title: Option<String>,
    pub preview_url: Option<String>,
}

impl UpdatePlaylist {
    /// Check length bounds on the fields being changed
    pub fn validate(&self) -> Result<()> {
        if let Some(title) = &self.title {
            check_bounded("title", title, TITLE_MAX_LEN)?;
        }
        if let Some(url) = &self.preview_url {
            check_bounded("preview_url", url, PREVIEW_URL_MAX_LEN)?;
        }
        Ok(())
    }

    /// Whether the update changes anything at all
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.preview_url.is_none()
    }
}

fn validate_fields(channel_id: &ChannelId, title: &str, preview_url: &str) -> Result<()> {
    if channel_id.is_empty() {
        return Err(ReelError::missing_field("channel_id"));
    }
    check_bounded("title", title, TITLE_MAX_LEN)?;
    check_bounded("preview_url", preview_url, PREVIEW_URL_MAX_LEN)?;
    Ok(())
}

fn check_bounded(field: &'static str, value: &str, max: usize) -> Result<()> {
    if value.is_empty() {
        return Err(ReelError::missing_field(field));
    }
    // Bounds are character counts, matching varchar semantics
    let len = value.chars().count();
    if len > max {
        return Err(ReelError::field_too_long(field, max, len));
    }
    Ok(())
}
