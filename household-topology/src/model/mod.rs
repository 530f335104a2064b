//! Household data model
//!
//! Strict tree ownership: a [`Household`] owns its [`Group`]s, each group owns
//! its [`Member`]s. Every snapshot is rebuilt from scratch.

pub mod address;
pub mod channel_map;
pub mod household;
pub mod id_types;

pub use address::{NetworkAddress, DEFAULT_PLAYER_PORT};
pub use channel_map::ChannelMap;
pub use household::{Group, Household, Member};
pub use id_types::{GroupId, PlayerId};
