//! Conversion of raw groups into the canonical [`Household`] model.

use tracing::{debug, trace, warn};

use crate::decoder::{RawGroup, RawMember, TopologyDecoder};
use crate::error::{Result, TopologyError};
use crate::model::{ChannelMap, Group, GroupId, Household, Member, NetworkAddress, PlayerId};

/// Per-call normalization options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Keep invisible members (satellites, hidden stereo halves). Default: false
    pub include_invisible: bool,
}

impl NormalizeOptions {
    pub fn include_invisible() -> Self {
        Self {
            include_invisible: true,
        }
    }
}

/// Position of a member while its group is being assembled.
///
/// Index 0 starts out as a placeholder for the coordinator and is filled when
/// the coordinator's own record turns up, wherever it sits in the document.
enum Slot {
    Placeholder(PlayerId),
    Filled(Member),
}

/// Builds [`Household`] snapshots from decoded raw groups
#[derive(Debug, Clone, Copy, Default)]
pub struct TopologyNormalizer {
    options: NormalizeOptions,
}

impl TopologyNormalizer {
    pub fn new(options: NormalizeOptions) -> Self {
        Self { options }
    }

    /// Normalize raw groups into a household.
    ///
    /// Every resulting group has its coordinator at index 0 unless the
    /// visibility filter removed it. Groups left without members are dropped.
    pub fn normalize(&self, raw_groups: Vec<RawGroup>) -> Result<Household> {
        let mut groups = Vec::with_capacity(raw_groups.len());
        for raw in raw_groups {
            if let Some(group) = self.normalize_group(raw)? {
                groups.push(group);
            }
        }
        Ok(Household::new(groups))
    }

    fn normalize_group(&self, raw: RawGroup) -> Result<Option<Group>> {
        let coordinator_id = raw
            .coordinator
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(PlayerId::new)
            .ok_or_else(|| {
                TopologyError::malformed(format!(
                    "zone group '{}' has no coordinator",
                    raw.id.as_deref().unwrap_or_default()
                ))
            })?;
        let group_id = GroupId::new(raw.id.unwrap_or_default());

        if raw.members.is_empty() {
            return Err(TopologyError::malformed(format!(
                "zone group '{}' has no members",
                group_id
            )));
        }

        let mut slots = vec![Slot::Placeholder(coordinator_id.clone())];
        for raw_member in raw.members {
            let member = build_member(raw_member, &coordinator_id)?;
            trace!(group = %group_id, player = %member.id, coordinator = member.is_coordinator, "member");
            if member.is_coordinator {
                slots[0] = Slot::Filled(member);
            } else {
                slots.push(Slot::Filled(member));
            }
        }

        let mut members = Vec::with_capacity(slots.len());
        for slot in slots {
            match slot {
                Slot::Filled(member) => members.push(member),
                Slot::Placeholder(id) => {
                    return Err(TopologyError::malformed(format!(
                        "coordinator {} of zone group '{}' is not among its members",
                        id, group_id
                    )));
                }
            }
        }

        if !self.options.include_invisible {
            members.retain(Member::is_visible);
            if members.is_empty() {
                debug!(group = %group_id, "dropping group with no visible members");
                return Ok(None);
            }
        }

        debug!(group = %group_id, members = members.len(), "normalized group");
        Ok(Some(Group::new(group_id, coordinator_id, members)))
    }
}

fn build_member(raw: RawMember, coordinator_id: &PlayerId) -> Result<Member> {
    let id = raw
        .uuid
        .as_deref()
        .map(str::trim)
        .filter(|uuid| !uuid.is_empty())
        .map(PlayerId::new)
        .ok_or_else(|| TopologyError::malformed("zone group member has no UUID"))?;

    let location = raw.location.as_deref().ok_or_else(|| {
        TopologyError::malformed(format!("zone group member {} has no location", id))
    })?;
    let address = NetworkAddress::from_location(location)?;

    let channel_map = match raw.channel_map_set.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(value) => {
            let parsed = ChannelMap::parse(value);
            if parsed.is_none() {
                warn!(player = %id, value, "ignoring unrecognized channel map");
            }
            parsed
        }
    };

    Ok(Member {
        is_coordinator: &id == coordinator_id,
        id,
        address,
        name: raw.zone_name.unwrap_or_default(),
        invisible: raw.invisible.as_deref() == Some("1"),
        channel_map,
    })
}

/// Decode and normalize a topology document in one step.
pub fn parse_household(document: &str, options: NormalizeOptions) -> Result<Household> {
    let decoded = TopologyDecoder::decode(document)?;
    TopologyNormalizer::new(options).normalize(decoded.groups)
}

impl Household {
    /// Build a household from a topology document with default options
    /// (invisible members excluded).
    pub fn from_document(document: &str) -> Result<Self> {
        parse_household(document, NormalizeOptions::default())
    }
}
