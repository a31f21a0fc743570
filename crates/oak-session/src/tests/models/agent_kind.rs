use crate::AgentKind;

use std::str::FromStr;

use serde_json::json;

#[test]
fn test_agent_kind_from_str() {
    assert_eq!(AgentKind::from_str("travel").unwrap(), AgentKind::Travel);
    assert_eq!(AgentKind::from_str("financial").unwrap(), AgentKind::Financial);
    assert_eq!(AgentKind::from_str("").unwrap(), AgentKind::Unknown);
    assert_eq!(
        AgentKind::from_str("weather").unwrap(),
        AgentKind::Other(String::from("weather"))
    );
}

#[test]
fn test_agent_kind_as_str_round_trips() {
    for tag in ["travel", "financial", "unknown", "weather"] {
        assert_eq!(AgentKind::from_str(tag).unwrap().as_str(), tag);
    }
}

#[test]
fn test_agent_kind_serializes_as_plain_tag() {
    assert_eq!(serde_json::to_value(AgentKind::Travel).unwrap(), json!("travel"));
    assert_eq!(
        serde_json::from_value::<AgentKind>(json!("financial")).unwrap(),
        AgentKind::Financial
    );
}

#[test]
fn test_agent_kind_display_names() {
    assert_eq!(AgentKind::Travel.display_name(), "Travel Assistant");
    assert_eq!(
        AgentKind::Financial.display_name(),
        "Financial Analysis Assistant"
    );
    assert_eq!(AgentKind::default(), AgentKind::Unknown);
}
