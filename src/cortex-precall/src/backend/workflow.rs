//! Workflow backend contract.

use async_trait::async_trait;
use cortex_precall_types::{ExecuteMode, TaskType};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Configuration of a synchronous workflow run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecuteConfig {
    /// Workflow ID.
    pub id: i64,
    /// Connector the agent is serving.
    pub connector_id: i64,
    /// Connector-scoped user ID.
    pub connector_uid: String,
    /// Scheduling of the run.
    pub task_type: TaskType,
    /// Parent agent, when the workflow runs as an agent tool.
    pub agent_id: Option<i64>,
    /// Draft or published definition.
    pub mode: ExecuteMode,
}

/// Output of a completed workflow run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowExecution {
    /// Final output text. `None` when the workflow produced no output.
    pub output: Option<String>,
    /// Run bookkeeping.
    pub trace: TraceInfo,
}

impl WorkflowExecution {
    /// Create an execution result with output text.
    pub fn with_output(output: impl Into<String>) -> Self {
        Self {
            output: Some(output.into()),
            trace: TraceInfo::default(),
        }
    }
}

/// Bookkeeping about a workflow run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceInfo {
    pub execute_id: Option<i64>,
}

/// Metadata of a run that stopped waiting for interactive input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("workflow stopped at node {node_key} ({node_type}) awaiting input")]
pub struct InterruptInfo {
    /// Key of the node that stopped the run.
    pub node_key: String,
    /// Node type, e.g. `InputReceiver`.
    pub node_type: String,
    /// Event to resume the run with.
    pub event_id: Option<i64>,
}

impl InterruptInfo {
    /// Create interrupt metadata.
    pub fn new(node_key: impl Into<String>, node_type: impl Into<String>) -> Self {
        Self {
            node_key: node_key.into(),
            node_type: node_type.into(),
            event_id: None,
        }
    }
}

/// Errors returned by a workflow backend.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// The run stopped at an interactive node.
    #[error(transparent)]
    Interrupted(InterruptInfo),

    /// Workflow is not registered or not published.
    #[error("Workflow not found: {0}")]
    NotFound(i64),

    /// A node failed.
    #[error("Workflow execution failed: {0}")]
    Execution(String),

    /// Transport or engine failure.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Executes workflows.
#[async_trait]
pub trait WorkflowBackend: Send + Sync {
    /// Run a workflow to completion and return its output.
    async fn sync_execute(
        &self,
        config: ExecuteConfig,
        input: Map<String, Value>,
    ) -> Result<WorkflowExecution, WorkflowError>;
}
