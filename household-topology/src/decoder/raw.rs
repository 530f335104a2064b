//! Raw group and member records, one-to-one with the document's elements.
//!
//! Attribute values are kept as the device sent them. Interpreting them is
//! the normalizer's job.

use serde::{Deserialize, Serialize};
use xmltree::Element;

use super::ensure_list;

pub(crate) const GROUP_ELEMENT: &str = "ZoneGroup";
pub(crate) const MEMBER_ELEMENT: &str = "ZoneGroupMember";

/// One `ZoneGroup` element
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawGroup {
    /// `Coordinator` attribute: id of the coordinating member
    pub coordinator: Option<String>,
    /// `ID` attribute
    pub id: Option<String>,
    /// `ZoneGroupMember` children, always a list
    pub members: Vec<RawMember>,
}

/// One `ZoneGroupMember` element
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMember {
    /// `UUID` attribute
    pub uuid: Option<String>,
    /// `Location` attribute: device description URL
    pub location: Option<String>,
    /// `ZoneName` attribute
    pub zone_name: Option<String>,
    /// `Invisible` attribute, "1" when hidden
    pub invisible: Option<String>,
    /// `ChannelMapSet` attribute, stereo pairs only
    pub channel_map_set: Option<String>,
}

impl RawGroup {
    pub(crate) fn from_element(element: &Element) -> Self {
        Self {
            coordinator: attribute(element, "Coordinator"),
            id: attribute(element, "ID"),
            members: ensure_list(element, MEMBER_ELEMENT)
                .into_iter()
                .map(RawMember::from_element)
                .collect(),
        }
    }
}

impl RawMember {
    pub(crate) fn from_element(element: &Element) -> Self {
        Self {
            uuid: attribute(element, "UUID"),
            location: attribute(element, "Location"),
            zone_name: attribute(element, "ZoneName"),
            invisible: attribute(element, "Invisible"),
            channel_map_set: attribute(element, "ChannelMapSet"),
        }
    }
}

fn attribute(element: &Element, name: &str) -> Option<String> {
    element.attributes.get(name).cloned()
}
