//! Reel Core
//!
//! Domain types, identifiers, and error handling for the Reel
//! playlist catalog.
//!
//! This crate defines the shape and invariants of the data that the
//! storage layer persists and the wire layer serializes. It carries no
//! persistence or transport logic of its own.
//!
//! # Example
//!
//! ```rust
//! use reel_core::types::{Channel, Playlist};
//!
//! let channel = Channel::new("Lofi Beats");
//! let playlist = Playlist::new(
//!     channel.id.clone(),
//!     "Late Night Mix",
//!     "https://cdn.example.com/previews/late-night.jpg",
//! );
//!
//! assert_eq!(playlist.views_count, 0);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{ReelError, Result};

pub use types::{
    Channel, ChannelId, CreateChannel, CreatePlaylist, Playlist, PlaylistId, UpdatePlaylist,
};
