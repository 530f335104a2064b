//! # household-topology
//!
//! Reconstructs the topology of a multi-room audio household from the
//! `ZoneGroupState` document a player reports, and answers "which group does
//! this player belong to, and is it the coordinator?".
//!
//! ```text
//! raw document ──► TopologyDecoder ──► TopologyNormalizer ──► Household
//!                                                               │
//!                                  LookupKey ──► GroupResolver ◄┘
//!                                                      │
//!                                                      ▼
//!                                                ResolvedGroup
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use household_topology::{Household, LookupKey, PlayerRole};
//!
//! let document = r#"<ZoneGroupState><ZoneGroups>
//!   <ZoneGroup Coordinator="RINCON_1" ID="RINCON_1:7">
//!     <ZoneGroupMember UUID="RINCON_2" Location="http://10.0.0.2:1400/xml/device_description.xml" ZoneName="Office"/>
//!     <ZoneGroupMember UUID="RINCON_1" Location="http://10.0.0.1:1400/xml/device_description.xml" ZoneName="Kitchen"/>
//!   </ZoneGroup>
//! </ZoneGroups></ZoneGroupState>"#;
//!
//! let household = Household::from_document(document)?;
//! let kitchen = household.groups()[0].coordinator().map(|m| m.name.as_str());
//! assert_eq!(kitchen, Some("Kitchen"));
//!
//! let resolved = household.resolve(&LookupKey::by_host("10.0.0.2"))?;
//! assert_eq!(resolved.role(), PlayerRole::Joiner);
//! # Ok::<(), household_topology::TopologyError>(())
//! ```
//!
//! Snapshots are plain immutable values. Each refresh builds a new one, so
//! they can be shared between threads without locking.

pub mod config;
pub mod decoder;
pub mod error;
pub mod event;
pub mod logging;
pub mod model;
pub mod normalizer;
pub mod resolver;
pub mod source;
pub mod xml_decode;

pub use config::TopologyConfig;
pub use decoder::{DecodedTopology, DocumentShape, RawGroup, RawMember, TopologyDecoder};
pub use error::{Result, TopologyError};
pub use event::TopologyEvent;
pub use logging::{init_logging, init_logging_from_env, LoggingMode};
pub use model::{ChannelMap, Group, GroupId, Household, Member, NetworkAddress, PlayerId};
pub use normalizer::{parse_household, NormalizeOptions, TopologyNormalizer};
pub use resolver::{GroupResolver, LookupKey, PlayerRole, ResolvedGroup};
pub use source::{snapshot, StaticSource, TopologySource};
