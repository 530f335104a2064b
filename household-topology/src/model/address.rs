//! Network address of a player, derived from its device-description location

use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

use crate::error::{Result, TopologyError};

/// Port players listen on when the location URL names neither a port nor a
/// scheme with a well-known default.
pub const DEFAULT_PLAYER_PORT: u16 = 1400;

/// Reachable address of a player: scheme, host and port, without any path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NetworkAddress {
    pub scheme: String,
    pub host: String,
    pub port: u16,
}

impl NetworkAddress {
    /// Parse a location URL such as
    /// `http://192.168.4.40:1400/xml/device_description.xml`.
    pub fn from_location(location: &str) -> Result<Self> {
        let url = Url::parse(location.trim()).map_err(|e| {
            TopologyError::malformed(format!("invalid member location '{}': {}", location, e))
        })?;

        let host = url
            .host_str()
            .filter(|host| !host.is_empty())
            .ok_or_else(|| {
                TopologyError::malformed(format!("member location '{}' has no host", location))
            })?
            .to_string();

        Ok(Self {
            scheme: url.scheme().to_string(),
            host,
            port: url.port_or_known_default().unwrap_or(DEFAULT_PLAYER_PORT),
        })
    }

    /// Base URL of the player, e.g. `http://192.168.4.40:1400`
    pub fn base_url(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for NetworkAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}:{}", self.scheme, self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_location_discards_path() {
        let addr =
            NetworkAddress::from_location("http://192.168.4.40:1400/xml/device_description.xml")
                .unwrap();
        assert_eq!(addr.scheme, "http");
        assert_eq!(addr.host, "192.168.4.40");
        assert_eq!(addr.port, 1400);
        assert_eq!(addr.base_url(), "http://192.168.4.40:1400");
    }

    #[test]
    fn test_from_location_known_default_port() {
        let addr = NetworkAddress::from_location("http://10.0.0.1/xml").unwrap();
        assert_eq!(addr.port, 80);
    }

    #[test]
    fn test_from_location_rejects_garbage() {
        let err = NetworkAddress::from_location("not a url").unwrap_err();
        assert!(err.is_malformed());

        let err = NetworkAddress::from_location("").unwrap_err();
        assert!(err.is_malformed());
    }
}
