//! Shared helpers for the topology integration tests

#![allow(dead_code)]

use std::path::PathBuf;

/// Directory holding the captured topology documents
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Load a fixture file by name
pub fn load_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Build a wrapped topology document from `(coordinator, id, members)` groups,
/// where each member is `(uuid, host, name, invisible)`.
pub fn build_document(groups: &[(String, String, Vec<(String, String, String, bool)>)]) -> String {
    let mut xml = String::from("<ZoneGroupState><ZoneGroups>");
    for (coordinator, id, members) in groups {
        xml.push_str(&format!(
            r#"<ZoneGroup Coordinator="{}" ID="{}">"#,
            coordinator, id
        ));
        for (uuid, host, name, invisible) in members {
            xml.push_str(&format!(
                r#"<ZoneGroupMember UUID="{}" Location="http://{}:1400/xml/device_description.xml" ZoneName="{}" Invisible="{}"/>"#,
                uuid,
                host,
                name,
                if *invisible { "1" } else { "0" }
            ));
        }
        xml.push_str("</ZoneGroup>");
    }
    xml.push_str("</ZoneGroups><VanishedDevices/></ZoneGroupState>");
    xml
}
