//! Topology-changed notification payloads
//!
//! A player announces topology changes with a UPnP NOTIFY whose body is a
//! property set. The `ZoneGroupState` property carries the topology document,
//! XML-escaped:
//!
//! ```xml
//! <e:propertyset xmlns:e="urn:schemas-upnp-org:event-1-0">
//!   <e:property>
//!     <ZoneGroupState>&lt;ZoneGroupState&gt;&lt;ZoneGroups&gt;...</ZoneGroupState>
//!   </e:property>
//! </e:propertyset>
//! ```
//!
//! The escaping belongs to the envelope, so it is undone here, before the
//! document reaches the decoder.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TopologyError};
use crate::model::Household;
use crate::normalizer::{parse_household, NormalizeOptions};
use crate::xml_decode;

/// Parsed ZoneGroupTopology notification body
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename = "propertyset")]
pub struct TopologyEvent {
    #[serde(rename = "property", default)]
    properties: Vec<EventProperty>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct EventProperty {
    #[serde(rename = "ZoneGroupState", default)]
    zone_group_state: Option<String>,
}

impl TopologyEvent {
    /// Parse a NOTIFY body.
    pub fn from_xml(xml: &str) -> Result<Self> {
        if xml.trim().is_empty() {
            return Err(TopologyError::InvalidInput(
                "event body is empty".to_string(),
            ));
        }
        xml_decode::parse(xml.trim())
    }

    /// The unescaped topology document, if this notification carries one
    pub fn zone_group_state(&self) -> Option<&str> {
        self.properties
            .iter()
            .filter_map(|p| p.zone_group_state.as_deref())
            .find(|state| !state.trim().is_empty())
    }

    /// Decode and normalize the carried topology document.
    pub fn household(&self, options: NormalizeOptions) -> Result<Household> {
        let document = self.zone_group_state().ok_or_else(|| {
            TopologyError::malformed("event carries no ZoneGroupState property")
        })?;
        parse_household(document, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_EVENT: &str = r#"<e:propertyset xmlns:e="urn:schemas-upnp-org:event-1-0"><e:property><ZoneGroupState>&lt;ZoneGroupState&gt;&lt;ZoneGroups&gt;&lt;ZoneGroup Coordinator=&quot;RINCON_5CAAFDAE58BD01400&quot; ID=&quot;RINCON_5CAAFDAE58BD01400:361632566&quot;&gt;&lt;ZoneGroupMember UUID=&quot;RINCON_5CAAFDAE58BD01400&quot; Location=&quot;http://192.168.4.40:1400/xml/device_description.xml&quot; ZoneName=&quot;Basement&quot; Configuration=&quot;1&quot; SoftwareVersion=&quot;85.0-64200&quot;/&gt;&lt;/ZoneGroup&gt;&lt;/ZoneGroups&gt;&lt;VanishedDevices&gt;&lt;/VanishedDevices&gt;&lt;/ZoneGroupState&gt;</ZoneGroupState></e:property></e:propertyset>"#;

    #[test]
    fn test_extracts_unescaped_document() {
        let event = TopologyEvent::from_xml(SAMPLE_EVENT).unwrap();
        let state = event.zone_group_state().unwrap();
        assert!(state.starts_with("<ZoneGroupState><ZoneGroups>"));
        assert!(state.contains(r#"ZoneName="Basement""#));
    }

    #[test]
    fn test_event_household() {
        let event = TopologyEvent::from_xml(SAMPLE_EVENT).unwrap();
        let household = event.household(NormalizeOptions::default()).unwrap();

        assert_eq!(household.len(), 1);
        let group = &household.groups()[0];
        assert_eq!(group.id().as_str(), "RINCON_5CAAFDAE58BD01400:361632566");
        let coordinator = group.coordinator().unwrap();
        assert_eq!(coordinator.name, "Basement");
        assert_eq!(coordinator.host(), "192.168.4.40");
    }

    #[test]
    fn test_event_without_topology() {
        let xml = r#"<e:propertyset xmlns:e="urn:schemas-upnp-org:event-1-0"><e:property><AreasUpdateID>RINCON_1,42</AreasUpdateID></e:property></e:propertyset>"#;
        let event = TopologyEvent::from_xml(xml).unwrap();
        assert!(event.zone_group_state().is_none());

        let err = event.household(NormalizeOptions::default()).unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_empty_event_body() {
        assert!(matches!(
            TopologyEvent::from_xml(""),
            Err(TopologyError::InvalidInput(_))
        ));
    }
}
