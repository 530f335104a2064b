//! Known top-level shapes of the topology document.

use std::fmt;
use xmltree::Element;

/// Top-level layout of a topology document.
///
/// Newer firmware wraps the groups in a `ZoneGroupState` root:
///
/// ```xml
/// <ZoneGroupState>
///   <ZoneGroups><ZoneGroup Coordinator="..." ID="...">...</ZoneGroup></ZoneGroups>
///   <VanishedDevices/>
/// </ZoneGroupState>
/// ```
///
/// Old firmware sends the `ZoneGroups` element as the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentShape {
    /// `ZoneGroupState` → `ZoneGroups`
    Wrapped,
    /// `ZoneGroups` at the root
    Legacy,
}

impl DocumentShape {
    /// Order in which shapes are tried. Wrapped always wins when both could match.
    pub const PROBE_ORDER: [DocumentShape; 2] = [DocumentShape::Wrapped, DocumentShape::Legacy];

    /// Find the `ZoneGroups` container for this shape, if the root matches it.
    pub fn locate<'a>(&self, root: &'a Element) -> Option<&'a Element> {
        match self {
            DocumentShape::Wrapped if root.name == "ZoneGroupState" => root.get_child("ZoneGroups"),
            DocumentShape::Legacy if root.name == "ZoneGroups" => Some(root),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentShape::Wrapped => "wrapped",
            DocumentShape::Legacy => "legacy",
        }
    }
}

impl fmt::Display for DocumentShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(xml: &str) -> Element {
        Element::parse(xml.as_bytes()).unwrap()
    }

    #[test]
    fn test_wrapped_locate() {
        let root = tree("<ZoneGroupState><ZoneGroups><ZoneGroup/></ZoneGroups></ZoneGroupState>");
        let container = DocumentShape::Wrapped.locate(&root).unwrap();
        assert_eq!(container.name, "ZoneGroups");
        assert!(DocumentShape::Legacy.locate(&root).is_none());
    }

    #[test]
    fn test_legacy_locate() {
        let root = tree("<ZoneGroups><ZoneGroup/></ZoneGroups>");
        let container = DocumentShape::Legacy.locate(&root).unwrap();
        assert_eq!(container.name, "ZoneGroups");
        assert!(DocumentShape::Wrapped.locate(&root).is_none());
    }

    #[test]
    fn test_wrapped_without_groups() {
        let root = tree("<ZoneGroupState><VanishedDevices/></ZoneGroupState>");
        assert!(DocumentShape::Wrapped.locate(&root).is_none());
    }

    #[test]
    fn test_probe_order() {
        assert_eq!(
            DocumentShape::PROBE_ORDER,
            [DocumentShape::Wrapped, DocumentShape::Legacy]
        );
        assert_eq!(DocumentShape::Legacy.to_string(), "legacy");
    }
}
