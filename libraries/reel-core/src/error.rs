/// Core error types for Reel
use crate::types::{ChannelId, PlaylistId};
use thiserror::Error;

/// Result type alias using `ReelError`
pub type Result<T> = std::result::Result<T, ReelError>;

/// Core error type for Reel
#[derive(Error, Debug)]
pub enum ReelError {
    /// A required field was empty
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A bounded-length field exceeded its maximum
    #[error("field {field} too long: {len} chars (max {max})")]
    FieldTooLong {
        /// Field name
        field: &'static str,
        /// Maximum allowed length in characters
        max: usize,
        /// Actual length in characters
        len: usize,
    },

    /// Playlist not found
    #[error("playlist not found: {0}")]
    PlaylistNotFound(PlaylistId),

    /// Channel not found (including foreign-key failures on create)
    #[error("channel not found: {0}")]
    ChannelNotFound(ChannelId),

    /// Storage-related errors
    #[error("storage error: {0}")]
    Storage(String),

    /// Database errors (for storage implementations)
    #[error("database error: {0}")]
    Database(String),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ReelError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a missing-field validation error
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField(field)
    }

    /// Create a field-too-long validation error
    pub fn field_too_long(field: &'static str, max: usize, len: usize) -> Self {
        Self::FieldTooLong { field, max, len }
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for ReelError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}
