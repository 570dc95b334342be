//! Road-trip music helpers: a prefix-searchable song index, a play-count
//! tracker, and a priority-based playlist builder.
//!
//! These are plain containers with no routing-engine state; they only share
//! the [`Song`] shape.

pub mod index;
pub mod playlist;
pub mod plays;

pub use index::{Song, SongIndex};
pub use playlist::PlaylistBuilder;
pub use plays::PlayCounts;
