/// Channel domain type
///
/// Channels own playlists. The full channel model (owner account,
/// branding, moderation state) lives in the channel service; this is
/// the slice the catalog needs so that `channel_id` references can be
/// enforced and tested.
use crate::types::ids::ChannelId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Owning entity for playlists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    /// Unique channel identifier
    pub id: ChannelId,

    /// Display name
    pub name: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Channel {
    /// Create a new channel with a fresh ID
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ChannelId::generate(),
            name: name.into(),
            created_at: Utc::now(),
        }
    }
}

/// Data for creating a new channel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateChannel {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_creation() {
        let channel = Channel::new("Lofi Beats");
        assert_eq!(channel.name, "Lofi Beats");
        assert!(!channel.id.is_empty());
        assert!(channel.created_at <= Utc::now());
    }
}
