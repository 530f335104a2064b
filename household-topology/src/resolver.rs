//! Resolution of a single player to its group
//!
//! Command dispatch needs to know which group a player belongs to and
//! whether it coordinates that group. [`GroupResolver`] answers that from a
//! [`Household`] snapshot, by display name or by network host.
//!
//! ```rust,ignore
//! use household_topology::{GroupResolver, LookupKey, PlayerRole};
//!
//! let resolved = GroupResolver::resolve(&household, &LookupKey::by_name("Kitchen"))?;
//! if resolved.role() == PlayerRole::Joiner {
//!     send_to(&resolved.coordinator_id);
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::error::{Result, TopologyError};
use crate::model::{GroupId, Household, Member, PlayerId};

/// Identifies the player to resolve.
///
/// A non-empty display name takes precedence; the host is only used when no
/// name is given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupKey {
    pub name: Option<String>,
    pub host: Option<String>,
}

impl LookupKey {
    pub fn new(name: Option<String>, host: Option<String>) -> Self {
        Self { name, host }
    }

    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            host: None,
        }
    }

    pub fn by_host(host: impl Into<String>) -> Self {
        Self {
            name: None,
            host: Some(host.into()),
        }
    }

    fn criterion(&self) -> Result<Criterion<'_>> {
        if let Some(name) = non_empty(&self.name) {
            Ok(Criterion::Name(name))
        } else if let Some(host) = non_empty(&self.host) {
            Ok(Criterion::Host(host))
        } else {
            Err(TopologyError::InvalidInput(
                "lookup key needs a player name or a host".to_string(),
            ))
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, Copy)]
enum Criterion<'a> {
    Name(&'a str),
    Host(&'a str),
}

impl Criterion<'_> {
    fn matches(&self, member: &Member) -> bool {
        match self {
            Criterion::Name(name) => member.name == *name,
            Criterion::Host(host) => member.host() == *host,
        }
    }
}

impl fmt::Display for Criterion<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Criterion::Name(name) => write!(f, "name '{}'", name),
            Criterion::Host(host) => write!(f, "host '{}'", host),
        }
    }
}

/// Role of the resolved player within its group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerRole {
    /// Coordinates a group with at least one joiner
    Coordinator,
    /// Follows another player's coordinator
    Joiner,
    /// Alone in its group
    Standalone,
}

/// The group owning a resolved player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedGroup {
    pub group_id: GroupId,
    pub coordinator_id: PlayerId,
    /// Index of the resolved player in `members`
    pub player_index: usize,
    /// `Some(0)` while the coordinator is visible, `None` when it is hidden
    pub coordinator_index: Option<usize>,
    /// Visible members of the group, coordinator first when present
    pub members: Vec<Member>,
}

impl ResolvedGroup {
    pub fn player(&self) -> &Member {
        &self.members[self.player_index]
    }

    pub fn coordinator(&self) -> Option<&Member> {
        self.coordinator_index.map(|index| &self.members[index])
    }

    /// A player alone with its own coordination is standalone; anyone not
    /// coordinating is a joiner, even if its coordinator is hidden.
    pub fn role(&self) -> PlayerRole {
        if !self.player().is_coordinator {
            PlayerRole::Joiner
        } else if self.members.len() == 1 {
            PlayerRole::Standalone
        } else {
            PlayerRole::Coordinator
        }
    }
}

/// Finds the group of a player in a household snapshot
pub struct GroupResolver;

impl GroupResolver {
    /// Resolve `key` against `household`.
    ///
    /// Only visible members can match. When several groups claim a match the
    /// first one in household order wins.
    pub fn resolve(household: &Household, key: &LookupKey) -> Result<ResolvedGroup> {
        let criterion = key.criterion()?;

        for group in household.groups() {
            let visible: Vec<&Member> = group.members().iter().filter(|m| m.is_visible()).collect();

            if let Some(player_index) = visible.iter().position(|m| criterion.matches(m)) {
                debug!(%criterion, group = %group.id(), player_index, "resolved player");
                let coordinator_index = visible.first().filter(|m| m.is_coordinator).map(|_| 0);
                return Ok(ResolvedGroup {
                    group_id: group.id().clone(),
                    coordinator_id: group.coordinator_id().clone(),
                    player_index,
                    coordinator_index,
                    members: visible.into_iter().cloned().collect(),
                });
            }
        }

        Err(TopologyError::PlayerNotFound(format!(
            "no visible player with {} in any group",
            criterion
        )))
    }
}

impl Household {
    /// Shorthand for [`GroupResolver::resolve`]
    pub fn resolve(&self, key: &LookupKey) -> Result<ResolvedGroup> {
        GroupResolver::resolve(self, key)
    }
}
