//! Plugin backend contract.

use async_trait::async_trait;
use cortex_precall_types::{ExecuteScene, InvalidResponseStrategy, ProjectType};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Request to execute one plugin tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecuteToolRequest {
    /// User the call is made on behalf of.
    pub user_id: String,
    /// Execute the tool's draft definition instead of the published one.
    pub exec_draft_tool: bool,
    /// Plugin ID.
    pub plugin_id: i64,
    /// Tool ID within the plugin.
    pub tool_id: Option<i64>,
    /// Arguments as JSON text, forwarded verbatim.
    pub arguments_in_json: String,
    /// Scene the call runs under.
    pub exec_scene: ExecuteScene,
}

/// Execution options accompanying an [`ExecuteToolRequest`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecuteToolOptions {
    /// Handling of responses that fail schema validation.
    pub invalid_resp_strategy: InvalidResponseStrategy,
    /// Project the call is attributed to.
    pub project_info: Option<ProjectInfo>,
}

/// Project descriptor for plugin calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInfo {
    pub project_id: i64,
    pub project_type: ProjectType,
    pub project_version: Option<String>,
}

/// Plugin tool response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecuteToolResponse {
    /// Response body as returned by the tool.
    pub raw_resp: String,
    /// Response reduced to the fields declared in the tool schema.
    pub trimmed_resp: String,
}

impl ExecuteToolResponse {
    /// Create a response whose raw and trimmed forms are identical.
    pub fn text(resp: impl Into<String>) -> Self {
        let resp = resp.into();
        Self {
            raw_resp: resp.clone(),
            trimmed_resp: resp,
        }
    }
}

/// Errors returned by a plugin backend.
#[derive(Debug, Error)]
pub enum PluginError {
    /// Plugin or tool is not registered.
    #[error("Plugin tool not found: plugin {plugin_id}, tool {tool_id:?}")]
    NotFound { plugin_id: i64, tool_id: Option<i64> },

    /// The tool ran and failed.
    #[error("Plugin execution error in {plugin_id}: {message}")]
    Execution { plugin_id: i64, message: String },

    /// The tool returned a response the engine could not use.
    #[error("Invalid plugin response: {0}")]
    InvalidResponse(String),

    /// Transport or engine failure.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PluginError {
    /// Create an execution error.
    pub fn execution(plugin_id: i64, message: impl Into<String>) -> Self {
        Self::Execution {
            plugin_id,
            message: message.into(),
        }
    }
}

/// Executes plugin tools.
#[async_trait]
pub trait PluginBackend: Send + Sync {
    /// Execute a tool and wait for its response.
    async fn execute_tool(
        &self,
        request: ExecuteToolRequest,
        options: ExecuteToolOptions,
    ) -> Result<ExecuteToolResponse, PluginError>;
}
