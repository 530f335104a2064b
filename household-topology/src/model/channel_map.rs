//! Stereo-pair channel assignment

use serde::{Deserialize, Serialize};
use std::fmt;

use super::PlayerId;

/// Left-front / right-front assignment of a stereo pair.
///
/// Parsed from the `ChannelMapSet` attribute, which looks like
/// `RINCON_A:LF,LF;RINCON_B:RF,RF`. Both players of the pair carry the
/// same value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChannelMap {
    pub left_front: PlayerId,
    pub right_front: PlayerId,
}

impl ChannelMap {
    /// Parse a raw `ChannelMapSet` value.
    ///
    /// Returns `None` unless both a left-front and a right-front player are named.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut left_front = None;
        let mut right_front = None;

        for entry in raw.split(';').map(str::trim).filter(|e| !e.is_empty()) {
            let (player, channels) = entry.split_once(':')?;
            let player = player.trim();
            if player.is_empty() {
                return None;
            }
            match channels.split(',').next().map(str::trim) {
                Some("LF") => left_front = Some(PlayerId::new(player)),
                Some("RF") => right_front = Some(PlayerId::new(player)),
                _ => {}
            }
        }

        Some(Self {
            left_front: left_front?,
            right_front: right_front?,
        })
    }

    /// Fixed two-channel label, e.g. `RINCON_A:LF,LF;RINCON_B:RF,RF`
    pub fn label(&self) -> String {
        self.to_string()
    }

    /// Whether the given player is one half of this pair
    pub fn contains(&self, player: &PlayerId) -> bool {
        &self.left_front == player || &self.right_front == player
    }
}

impl fmt::Display for ChannelMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:LF,LF;{}:RF,RF", self.left_front, self.right_front)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stereo_pair() {
        let map = ChannelMap::parse("RINCON_A:LF,LF;RINCON_B:RF,RF").unwrap();
        assert_eq!(map.left_front.as_str(), "RINCON_A");
        assert_eq!(map.right_front.as_str(), "RINCON_B");
        assert!(map.contains(&PlayerId::new("RINCON_B")));
        assert!(!map.contains(&PlayerId::new("RINCON_C")));
    }

    #[test]
    fn test_label_is_normalized() {
        let map = ChannelMap::parse(" RINCON_B:RF,RF ; RINCON_A:LF,LF ;").unwrap();
        assert_eq!(map.label(), "RINCON_A:LF,LF;RINCON_B:RF,RF");
    }

    #[test]
    fn test_parse_incomplete() {
        assert!(ChannelMap::parse("").is_none());
        assert!(ChannelMap::parse("RINCON_A:LF,LF").is_none());
        assert!(ChannelMap::parse("garbage").is_none());
        assert!(ChannelMap::parse(":LF,LF;RINCON_B:RF,RF").is_none());
    }
}
