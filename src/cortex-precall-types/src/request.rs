//! Agent request and pre-call tool declarations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Backend kind a pre-call tool is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolType {
    /// A registered plugin tool.
    Plugin,
    /// A workflow invoked synchronously as a tool.
    Workflow,
}

impl ToolType {
    /// Get the lowercase name used in logs and on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plugin => "plugin",
            Self::Workflow => "workflow",
        }
    }
}

impl fmt::Display for ToolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tool invocation declared ahead of the model turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreCallTool {
    /// Which backend handles this call.
    #[serde(rename = "type")]
    pub tool_type: ToolType,
    /// Plugin ID, or workflow ID for workflow tools.
    pub plugin_id: i64,
    /// Tool ID within the plugin. Unused for workflows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_id: Option<i64>,
    /// Name copied into the synthesized tool-call message.
    pub tool_name: String,
    /// Call arguments as JSON text.
    pub arguments: String,
}

impl PreCallTool {
    /// Declare a plugin tool call.
    pub fn plugin(
        plugin_id: i64,
        tool_id: i64,
        tool_name: impl Into<String>,
        arguments: impl Into<String>,
    ) -> Self {
        Self {
            tool_type: ToolType::Plugin,
            plugin_id,
            tool_id: Some(tool_id),
            tool_name: tool_name.into(),
            arguments: arguments.into(),
        }
    }

    /// Declare a workflow call.
    pub fn workflow(
        workflow_id: i64,
        tool_name: impl Into<String>,
        arguments: impl Into<String>,
    ) -> Self {
        Self {
            tool_type: ToolType::Workflow,
            plugin_id: workflow_id,
            tool_id: None,
            tool_name: tool_name.into(),
            arguments: arguments.into(),
        }
    }
}

/// Who is running the agent and against which definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentIdentity {
    /// End user the agent is acting for.
    pub user_id: String,
    /// Agent ID.
    pub agent_id: i64,
    /// Connector (channel) the request came in on.
    pub connector_id: i64,
    /// Published agent version.
    #[serde(default)]
    pub version: String,
    /// Whether the unpublished draft is being executed.
    #[serde(default)]
    pub is_draft: bool,
}

impl AgentIdentity {
    /// Create an identity for a published agent.
    pub fn new(user_id: impl Into<String>, agent_id: i64, connector_id: i64) -> Self {
        Self {
            user_id: user_id.into(),
            agent_id,
            connector_id,
            version: String::new(),
            is_draft: false,
        }
    }

    /// Set the agent version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Mark this identity as executing the draft.
    pub fn draft(mut self) -> Self {
        self.is_draft = true;
        self
    }
}

/// Input to the pre-call pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentRequest {
    /// Identity of the running agent.
    pub identity: AgentIdentity,
    /// Tools to execute before the model turn, in transcript order.
    #[serde(default)]
    pub pre_call_tools: Vec<PreCallTool>,
}

impl AgentRequest {
    /// Create a request without pre-call tools.
    pub fn new(identity: AgentIdentity) -> Self {
        Self {
            identity,
            pre_call_tools: Vec::new(),
        }
    }

    /// Append a pre-call tool.
    pub fn with_tool(mut self, tool: PreCallTool) -> Self {
        self.pre_call_tools.push(tool);
        self
    }
}
