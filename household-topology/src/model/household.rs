//! Household, Group and Member types

use serde::{Deserialize, Serialize};

use super::{ChannelMap, GroupId, NetworkAddress, PlayerId};

/// One speaker unit of the household
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Firmware-assigned unique id
    pub id: PlayerId,
    /// Where the player can be reached
    pub address: NetworkAddress,
    /// Display (zone) name, e.g. "Kitchen"
    pub name: String,
    /// Satellite or hidden half of a stereo pair, not independently addressable
    pub invisible: bool,
    /// Stereo-pair channel assignment, if the player is part of a pair
    pub channel_map: Option<ChannelMap>,
    /// Whether this member coordinates its group
    pub is_coordinator: bool,
}

impl Member {
    /// Host part of the player's address
    pub fn host(&self) -> &str {
        &self.address.host
    }

    pub fn is_visible(&self) -> bool {
        !self.invisible
    }
}

/// A set of players synchronized for playback.
///
/// The coordinator sits at index 0, followed by the joiners in the order the
/// device reported them. When the coordinator is hidden by the visibility
/// filter the group keeps its visible joiners and [`Group::coordinator`]
/// returns `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    id: GroupId,
    coordinator: PlayerId,
    members: Vec<Member>,
}

impl Group {
    /// Members must be non-empty, with the coordinator (if kept) first.
    pub(crate) fn new(id: GroupId, coordinator: PlayerId, members: Vec<Member>) -> Self {
        debug_assert!(!members.is_empty());
        debug_assert!(members.iter().skip(1).all(|m| !m.is_coordinator));
        debug_assert!(members
            .first()
            .is_some_and(|m| m.is_coordinator == (m.id == coordinator)));
        Self {
            id,
            coordinator,
            members,
        }
    }

    pub fn id(&self) -> &GroupId {
        &self.id
    }

    /// Id of the coordinator, whether or not it is among [`Group::members`]
    pub fn coordinator_id(&self) -> &PlayerId {
        &self.coordinator
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// The coordinator, unless it was filtered out as invisible
    pub fn coordinator(&self) -> Option<&Member> {
        self.members.first().filter(|m| m.is_coordinator)
    }

    pub fn joiners(&self) -> &[Member] {
        match self.coordinator() {
            Some(_) => &self.members[1..],
            None => &self.members,
        }
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Check if this is a standalone player (group of 1)
    pub fn is_standalone(&self) -> bool {
        self.members.len() == 1
    }

    pub fn contains(&self, player: &PlayerId) -> bool {
        self.members.iter().any(|m| &m.id == player)
    }
}

/// Snapshot of the whole household topology at one instant.
///
/// Built fresh on every refresh and never updated in place. Group order
/// carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Household {
    groups: Vec<Group>,
}

impl Household {
    pub(crate) fn new(groups: Vec<Group>) -> Self {
        Self { groups }
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn group_by_id(&self, id: &GroupId) -> Option<&Group> {
        self.groups.iter().find(|g| g.id() == id)
    }

    pub fn group_by_coordinator(&self, coordinator: &PlayerId) -> Option<&Group> {
        self.groups.iter().find(|g| g.coordinator_id() == coordinator)
    }

    /// Find the group that contains a specific player
    pub fn group_containing(&self, player: &PlayerId) -> Option<&Group> {
        self.groups.iter().find(|g| g.contains(player))
    }

    /// Ids of all coordinators, in household order
    pub fn coordinators(&self) -> Vec<&PlayerId> {
        self.groups.iter().map(Group::coordinator_id).collect()
    }

    /// All players across every group
    pub fn players(&self) -> impl Iterator<Item = &Member> {
        self.groups.iter().flat_map(|g| g.members.iter())
    }

    pub fn player_count(&self) -> usize {
        self.groups.iter().map(Group::member_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: &str, host: &str, name: &str, is_coordinator: bool) -> Member {
        Member {
            id: PlayerId::new(id),
            address: NetworkAddress {
                scheme: "http".to_string(),
                host: host.to_string(),
                port: 1400,
            },
            name: name.to_string(),
            invisible: false,
            channel_map: None,
            is_coordinator,
        }
    }

    fn create_test_household() -> Household {
        Household::new(vec![
            Group::new(
                GroupId::new("U1:1"),
                PlayerId::new("U1"),
                vec![
                    member("U1", "10.0.0.1", "Kitchen", true),
                    member("U2", "10.0.0.2", "Office", false),
                ],
            ),
            Group::new(
                GroupId::new("U3:1"),
                PlayerId::new("U3"),
                vec![member("U3", "10.0.0.3", "Bath", true)],
            ),
            Group::new(
                GroupId::new("U5:1"),
                PlayerId::new("U5"),
                vec![member("U6", "10.0.0.6", "Den", false)],
            ),
        ])
    }

    #[test]
    fn test_group_accessors() {
        let household = create_test_household();
        let group = &household.groups()[0];

        assert_eq!(group.id().as_str(), "U1:1");
        assert_eq!(group.coordinator().map(|m| m.name.as_str()), Some("Kitchen"));
        assert_eq!(group.joiners().len(), 1);
        assert_eq!(group.joiners()[0].host(), "10.0.0.2");
        assert!(!group.is_standalone());
        assert!(household.groups()[1].is_standalone());
    }

    #[test]
    fn test_group_with_hidden_coordinator() {
        let household = create_test_household();
        let group = &household.groups()[2];

        assert!(group.coordinator().is_none());
        assert_eq!(group.coordinator_id().as_str(), "U5");
        assert_eq!(group.joiners().len(), 1);
        assert_eq!(group.joiners()[0].name, "Den");
        assert!(!group.contains(&PlayerId::new("U5")));
    }

    #[test]
    fn test_household_queries() {
        let household = create_test_household();

        assert_eq!(household.len(), 3);
        assert_eq!(household.player_count(), 4);
        assert_eq!(
            household.coordinators(),
            vec![&PlayerId::new("U1"), &PlayerId::new("U3"), &PlayerId::new("U5")]
        );

        let group = household.group_containing(&PlayerId::new("U2")).unwrap();
        assert_eq!(group.id().as_str(), "U1:1");

        assert!(household.group_by_coordinator(&PlayerId::new("U2")).is_none());
        assert!(household.group_by_id(&GroupId::new("U3:1")).is_some());
        assert_eq!(
            household.group_by_coordinator(&PlayerId::new("U5")).map(|g| g.id().as_str()),
            Some("U5:1")
        );
        assert_eq!(household.players().filter(|m| m.is_coordinator).count(), 2);
    }

    #[test]
    fn test_empty_household() {
        let household = Household::default();
        assert!(household.is_empty());
        assert_eq!(household.player_count(), 0);
        assert!(household.coordinators().is_empty());
    }
}
