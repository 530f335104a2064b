//! Where topology documents come from
//!
//! Fetching the document is the control plane's job (a `GetZoneGroupState`
//! SOAP call, or the payload of a topology event). This module only defines
//! the seam, so a snapshot can be built from any of them.

use tracing::debug;

use crate::error::Result;
use crate::model::Household;
use crate::normalizer::{parse_household, NormalizeOptions};

/// Supplier of raw `ZoneGroupState` documents
pub trait TopologySource {
    /// Fetch the current topology document
    fn zone_group_state(&self) -> Result<String>;
}

/// A fixed, in-memory document
#[derive(Debug, Clone)]
pub struct StaticSource {
    document: String,
}

impl StaticSource {
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
        }
    }
}

impl TopologySource for StaticSource {
    fn zone_group_state(&self) -> Result<String> {
        Ok(self.document.clone())
    }
}

impl<S: TopologySource + ?Sized> TopologySource for &S {
    fn zone_group_state(&self) -> Result<String> {
        (**self).zone_group_state()
    }
}

/// Fetch a document from `source` and build a fresh household snapshot.
pub fn snapshot<S: TopologySource + ?Sized>(
    source: &S,
    options: NormalizeOptions,
) -> Result<Household> {
    let document = source.zone_group_state()?;
    let household = parse_household(&document, options)?;
    debug!(
        groups = household.len(),
        players = household.player_count(),
        "built household snapshot"
    );
    Ok(household)
}
