//! Execution scope selected from the agent identity.

use serde::{Deserialize, Serialize};

use crate::request::AgentIdentity;

/// Scene a plugin tool is executed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteScene {
    /// Agent draft opened in the editor.
    DraftAgent,
    /// Published agent serving a connector.
    OnlineAgent,
}

impl ExecuteScene {
    /// Pick the scene for an identity.
    pub fn for_identity(identity: &AgentIdentity) -> Self {
        if identity.is_draft {
            Self::DraftAgent
        } else {
            Self::OnlineAgent
        }
    }
}

/// Workflow execution mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecuteMode {
    /// Run the draft workflow definition.
    Debug,
    /// Run the published workflow definition.
    Release,
}

impl ExecuteMode {
    /// Pick the mode for an identity.
    pub fn for_identity(identity: &AgentIdentity) -> Self {
        if identity.is_draft {
            Self::Debug
        } else {
            Self::Release
        }
    }
}

/// How a workflow run is scheduled by the workflow engine.
///
/// Pre-call runs are always [`TaskType::Foreground`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    /// Caller blocks until the run completes.
    #[default]
    Foreground,
    /// Run is queued and polled separately.
    Background,
}

/// Kind of project a plugin call is attributed to.
///
/// Pre-call plugin calls are always attributed to [`ProjectType::Agent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Agent,
    App,
}

/// What the plugin engine does when a tool returns a response that does not
/// match its declared schema.
///
/// Pre-call plugin calls always use [`InvalidResponseStrategy::ReturnDefault`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidResponseStrategy {
    /// Substitute schema defaults for the invalid fields.
    #[default]
    ReturnDefault,
    /// Fail the call.
    ReturnError,
}
