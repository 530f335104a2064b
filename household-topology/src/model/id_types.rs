//! Identity types for players and groups

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! impl_id_type {
    ($name:ident) => {
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                $name::new(s)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                $name::new(s)
            }
        }
    };
}

/// Unique identifier of a player, as assigned by the device firmware
///
/// Typically `RINCON_xxxxxxxxxxxx01400`. A leading "uuid:" prefix is stripped
/// so ids taken from device descriptions compare equal to topology ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        match id.strip_prefix("uuid:") {
            Some(stripped) => Self(stripped.to_string()),
            None => Self(id),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl_id_type!(PlayerId);

/// Identifier of a playback group
///
/// Usually `RINCON_xxxxx:n`. May be empty when the topology was derived from
/// data that does not carry group ids; an empty id is still a valid id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GroupId(String);

impl GroupId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl_id_type!(GroupId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_strips_uuid_prefix() {
        let id = PlayerId::new("uuid:RINCON_123");
        assert_eq!(id.as_str(), "RINCON_123");
        assert_eq!(id, PlayerId::from("RINCON_123"));
    }

    #[test]
    fn test_group_id_may_be_empty() {
        let id = GroupId::default();
        assert!(id.is_empty());
        assert_eq!(id.to_string(), "");

        let id = GroupId::from("RINCON_123:7".to_string());
        assert!(!id.is_empty());
        assert_eq!(format!("{}", id), "RINCON_123:7");
    }
}
