//! Text and JSON rendering of households and resolved groups

use anyhow::Result;
use household_topology::{Household, Member, ResolvedGroup};

pub fn print_household(household: &Household, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(household)?);
        return Ok(());
    }
    print!("{}", render_household(household));
    Ok(())
}

pub fn print_resolved(resolved: &ResolvedGroup, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(resolved)?);
        return Ok(());
    }
    print!("{}", render_resolved(resolved));
    Ok(())
}

fn render_household(household: &Household) -> String {
    if household.is_empty() {
        return "No groups\n".to_string();
    }

    let mut out = String::new();
    for group in household.groups() {
        let id = if group.id().is_empty() { "-" } else { group.id().as_str() };
        out.push_str(&format!("Group {} ({} members)\n", id, group.member_count()));
        if group.coordinator().is_none() {
            out.push_str(&format!("  (coordinator {} hidden)\n", group.coordinator_id()));
        }
        for member in group.members() {
            out.push_str(&format!("  {}\n", render_member(member)));
        }
    }
    out
}

fn render_resolved(resolved: &ResolvedGroup) -> String {
    let coordinator = match resolved.coordinator_index {
        Some(index) => format!("coordinator index {}", index),
        None => format!("coordinator {} hidden", resolved.coordinator_id),
    };
    let mut out = format!(
        "{} is {:?} in group {} (index {}, {})\n",
        resolved.player().name,
        resolved.role(),
        resolved.group_id,
        resolved.player_index,
        coordinator
    );
    for member in &resolved.members {
        out.push_str(&format!("  {}\n", render_member(member)));
    }
    out
}

fn render_member(member: &Member) -> String {
    let mut line = format!(
        "{} {:<20} {:<24} {}",
        if member.is_coordinator { "*" } else { " " },
        member.name,
        member.address,
        member.id
    );
    if member.invisible {
        line.push_str(" [invisible]");
    }
    if let Some(map) = &member.channel_map {
        line.push_str(&format!(" [{}]", map));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r#"<ZoneGroups><ZoneGroup Coordinator="U1" ID="U1:1"><ZoneGroupMember UUID="U2" Location="http://10.0.0.2:1400/xml" ZoneName="Office"/><ZoneGroupMember UUID="U1" Location="http://10.0.0.1:1400/xml" ZoneName="Kitchen"/></ZoneGroup></ZoneGroups>"#;

    #[test]
    fn test_render_household() {
        let household = Household::from_document(DOCUMENT).unwrap();
        let text = render_household(&household);

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Group U1:1 (2 members)");
        assert!(lines[1].starts_with("  * Kitchen"));
        assert!(lines[1].contains("http://10.0.0.1:1400"));
        assert!(lines[2].contains("Office"));
    }

    #[test]
    fn test_render_resolved() {
        let household = Household::from_document(DOCUMENT).unwrap();
        let resolved = household
            .resolve(&household_topology::LookupKey::by_name("Office"))
            .unwrap();
        let text = render_resolved(&resolved);
        assert!(text.starts_with("Office is Joiner in group U1:1 (index 1, coordinator index 0)"));
    }

    #[test]
    fn test_render_hidden_coordinator() {
        let document = r#"<ZoneGroups><ZoneGroup Coordinator="U1" ID="U1:1"><ZoneGroupMember UUID="U1" Location="http://10.0.0.1:1400/xml" ZoneName="Sub" Invisible="1"/><ZoneGroupMember UUID="U2" Location="http://10.0.0.2:1400/xml" ZoneName="Office"/></ZoneGroup></ZoneGroups>"#;
        let household = Household::from_document(document).unwrap();

        let text = render_household(&household);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Group U1:1 (1 members)");
        assert_eq!(lines[1], "  (coordinator U1 hidden)");

        let resolved = household
            .resolve(&household_topology::LookupKey::by_name("Office"))
            .unwrap();
        assert!(render_resolved(&resolved)
            .starts_with("Office is Joiner in group U1:1 (index 0, coordinator U1 hidden)"));
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_household(&Household::default()), "No groups\n");
    }
}
