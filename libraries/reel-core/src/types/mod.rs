//! Domain types for the Reel catalog

mod channel;
mod ids;
mod playlist;

pub use channel::{Channel, CreateChannel};
pub use ids::{ChannelId, PlaylistId};
pub use playlist::{CreatePlaylist, Playlist, UpdatePlaylist, PREVIEW_URL_MAX_LEN, TITLE_MAX_LEN};
