//! Topology document decoding
//!
//! Turns the raw `ZoneGroupState` text into a list of [`RawGroup`]s, each
//! with a list of [`RawMember`]s. The decoder accepts both known document
//! shapes (see [`DocumentShape`]) and makes sure one child and many children
//! always come out the same way: as a list.
//!
//! ```rust,ignore
//! use household_topology::TopologyDecoder;
//!
//! let decoded = TopologyDecoder::decode(&zone_group_state)?;
//! println!("{} groups ({} shape)", decoded.groups.len(), decoded.shape);
//! ```

pub mod raw;
pub mod shape;

pub use raw::{RawGroup, RawMember};
pub use shape::DocumentShape;

use tracing::{debug, trace};
use xmltree::{Element, XMLNode};

use crate::error::{Result, TopologyError};
use crate::xml_decode;
use raw::GROUP_ELEMENT;

/// Groups decoded from one document, together with the shape that matched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedTopology {
    pub shape: DocumentShape,
    pub groups: Vec<RawGroup>,
}

/// Collect the children of `parent` named `name` as a list.
///
/// A lone child and a run of siblings come back the same way, so callers
/// never need to special-case "exactly one".
pub fn ensure_list<'a>(parent: &'a Element, name: &str) -> Vec<&'a Element> {
    parent
        .children
        .iter()
        .filter_map(|node| match node {
            XMLNode::Element(child) if child.name == name => Some(child),
            _ => None,
        })
        .collect()
}

/// Decoder for raw topology documents
pub struct TopologyDecoder;

impl TopologyDecoder {
    /// Decode a topology document into raw groups.
    ///
    /// Fails with [`TopologyError::InvalidInput`] for an empty document and
    /// with [`TopologyError::MalformedTopology`] when the text is not XML or
    /// matches neither known shape.
    pub fn decode(document: &str) -> Result<DecodedTopology> {
        let document = document.trim();
        if document.is_empty() {
            return Err(TopologyError::InvalidInput(
                "topology document is empty".to_string(),
            ));
        }

        let root = xml_decode::parse_tree(document)?;

        for shape in DocumentShape::PROBE_ORDER {
            let Some(container) = shape.locate(&root) else {
                trace!(%shape, root = %root.name, "document shape does not match");
                continue;
            };

            let group_elements = ensure_list(container, GROUP_ELEMENT);
            if group_elements.is_empty() {
                trace!(%shape, "ZoneGroups container holds no ZoneGroup");
                continue;
            }

            let groups: Vec<RawGroup> = group_elements
                .into_iter()
                .map(RawGroup::from_element)
                .collect();
            debug!(%shape, groups = groups.len(), "decoded topology document");

            return Ok(DecodedTopology { shape, groups });
        }

        Err(TopologyError::malformed(format!(
            "root element <{}> matches no known topology shape",
            root.name
        )))
    }

    /// Decode and keep only the raw groups
    pub fn decode_groups(document: &str) -> Result<Vec<RawGroup>> {
        Self::decode(document).map(|decoded| decoded.groups)
    }
}
