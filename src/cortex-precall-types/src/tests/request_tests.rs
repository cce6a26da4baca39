//! Tests for agent requests and pre-call tool declarations.

use pretty_assertions::assert_eq;
use serde_json::json;

use crate::request::{AgentIdentity, AgentRequest, PreCallTool, ToolType};

#[test]
fn test_tool_type_display() {
    assert_eq!(ToolType::Plugin.to_string(), "plugin");
    assert_eq!(ToolType::Workflow.to_string(), "workflow");
}

#[test]
fn test_plugin_constructor() {
    let tool = PreCallTool::plugin(7, 11, "search", "{}");

    assert_eq!(tool.tool_type, ToolType::Plugin);
    assert_eq!(tool.plugin_id, 7);
    assert_eq!(tool.tool_id, Some(11));
    assert_eq!(tool.tool_name, "search");
}

#[test]
fn test_workflow_constructor_has_no_tool_id() {
    let tool = PreCallTool::workflow(99, "summarize", r#"{"q":1}"#);

    assert_eq!(tool.tool_type, ToolType::Workflow);
    assert_eq!(tool.plugin_id, 99);
    assert_eq!(tool.tool_id, None);
}

#[test]
fn test_identity_builder() {
    let identity = AgentIdentity::new("u-1", 5, 1024)
        .with_version("1.2.0")
        .draft();

    assert_eq!(identity.user_id, "u-1");
    assert_eq!(identity.agent_id, 5);
    assert_eq!(identity.connector_id, 1024);
    assert_eq!(identity.version, "1.2.0");
    assert!(identity.is_draft);
}

#[test]
fn test_request_deserialize() {
    let raw = json!({
        "identity": { "user_id": "u-1", "agent_id": 5, "connector_id": 1024 },
        "pre_call_tools": [
            { "type": "plugin", "plugin_id": 1, "tool_id": 2, "tool_name": "search", "arguments": "{}" },
            { "type": "workflow", "plugin_id": 3, "tool_name": "flow", "arguments": "{\"q\":1}" }
        ]
    });

    let request: AgentRequest = serde_json::from_value(raw).expect("deserialize");

    assert!(!request.identity.is_draft);
    assert!(request.identity.version.is_empty());
    assert_eq!(request.pre_call_tools.len(), 2);
    assert_eq!(request.pre_call_tools[0], PreCallTool::plugin(1, 2, "search", "{}"));
    assert_eq!(
        request.pre_call_tools[1],
        PreCallTool::workflow(3, "flow", "{\"q\":1}")
    );
}

#[test]
fn test_request_without_tools_field() {
    let raw = json!({ "identity": { "user_id": "u", "agent_id": 1, "connector_id": 2 } });
    let request: AgentRequest = serde_json::from_value(raw).expect("deserialize");

    assert!(request.pre_call_tools.is_empty());
}

#[test]
fn test_request_builder_preserves_order() {
    let request = AgentRequest::new(AgentIdentity::new("u", 1, 2))
        .with_tool(PreCallTool::plugin(1, 1, "first", "{}"))
        .with_tool(PreCallTool::workflow(2, "second", "{}"));

    let names: Vec<&str> = request
        .pre_call_tools
        .iter()
        .map(|t| t.tool_name.as_str())
        .collect();
    assert_eq!(names, vec!["first", "second"]);
}
