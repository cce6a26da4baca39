//! Routing of pre-call tools to their backends.

use std::future::Future;
use std::sync::Arc;

use cortex_precall_types::{
    AgentIdentity, ExecuteMode, ExecuteScene, InvalidResponseStrategy, Message, PreCallTool,
    ProjectType, TaskType, ToolType,
};
use serde::Serialize;
use serde_json::{Map, Value};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::backend::{
    ExecuteConfig, ExecuteToolOptions, ExecuteToolRequest, PluginBackend, ProjectInfo,
    WorkflowBackend,
};
use crate::error::{PreCallError, Result};
use crate::interrupt::InterruptClassifier;
use crate::message_pair::build_message_pair;

/// Result of dispatching a single pre-call tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The backend returned this text. May be empty.
    Output(String),
    /// The workflow was interrupted and left for the model to call later.
    Skipped,
}

/// Routes pre-call tools to the plugin or workflow backend.
pub struct ToolDispatcher {
    plugin: Arc<dyn PluginBackend>,
    workflow: Arc<dyn WorkflowBackend>,
    classifier: InterruptClassifier,
    log_responses: bool,
}

impl ToolDispatcher {
    /// Create a dispatcher over the given backends.
    pub fn new(plugin: Arc<dyn PluginBackend>, workflow: Arc<dyn WorkflowBackend>) -> Self {
        Self {
            plugin,
            workflow,
            classifier: InterruptClassifier::default(),
            log_responses: false,
        }
    }

    /// Set the interrupt classifier.
    pub fn with_classifier(mut self, classifier: InterruptClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Log every backend response as JSON at debug level.
    pub fn with_response_logging(mut self, enabled: bool) -> Self {
        self.log_responses = enabled;
        self
    }

    /// Get the interrupt classifier.
    pub fn classifier(&self) -> &InterruptClassifier {
        &self.classifier
    }

    /// Run every tool in order and collect the resulting message pairs.
    ///
    /// Stops at the first hard failure; nothing collected so far is returned
    /// in that case.
    pub async fn dispatch_all(
        &self,
        cancel: &CancellationToken,
        identity: &AgentIdentity,
        tools: &[PreCallTool],
    ) -> Result<Vec<Message>> {
        let mut messages = Vec::with_capacity(tools.len() * 2);

        for (index, tool) in tools.iter().enumerate() {
            if cancel.is_cancelled() {
                warn!(index, tool_name = %tool.tool_name, "Pre-call pipeline cancelled");
                return Err(PreCallError::Cancelled);
            }

            match self.dispatch(cancel, identity, tool).await? {
                DispatchOutcome::Output(text) if !text.is_empty() => {
                    messages.extend(build_message_pair(&tool.tool_name, &tool.arguments, &text));
                }
                DispatchOutcome::Output(_) => {
                    debug!(index, tool_name = %tool.tool_name, "Empty pre-call result dropped");
                }
                DispatchOutcome::Skipped => {}
            }
        }

        Ok(messages)
    }

    /// Run a single tool on its backend.
    pub async fn dispatch(
        &self,
        cancel: &CancellationToken,
        identity: &AgentIdentity,
        tool: &PreCallTool,
    ) -> Result<DispatchOutcome> {
        match tool.tool_type {
            ToolType::Plugin => self.call_plugin(cancel, identity, tool).await,
            ToolType::Workflow => self.call_workflow(cancel, identity, tool).await,
        }
    }

    async fn call_plugin(
        &self,
        cancel: &CancellationToken,
        identity: &AgentIdentity,
        tool: &PreCallTool,
    ) -> Result<DispatchOutcome> {
        let request = plugin_request(identity, tool);
        let options = plugin_options(identity);

        info!(
            plugin_id = tool.plugin_id,
            tool_id = ?tool.tool_id,
            tool_name = %tool.tool_name,
            is_draft = identity.is_draft,
            "Executing pre-call plugin tool"
        );

        match cancellable(cancel, self.plugin.execute_tool(request, options)).await? {
            Ok(resp) => {
                self.log_response(ToolType::Plugin, &resp);
                info!(
                    plugin_id = tool.plugin_id,
                    tool_id = ?tool.tool_id,
                    resp_len = resp.trimmed_resp.len(),
                    "Pre-call plugin tool completed"
                );
                Ok(DispatchOutcome::Output(resp.trimmed_resp))
            }
            Err(err) => {
                error!(
                    plugin_id = tool.plugin_id,
                    tool_id = ?tool.tool_id,
                    error = %err,
                    "Pre-call plugin tool failed"
                );
                Err(err.into())
            }
        }
    }

    async fn call_workflow(
        &self,
        cancel: &CancellationToken,
        identity: &AgentIdentity,
        tool: &PreCallTool,
    ) -> Result<DispatchOutcome> {
        // `null` runs the workflow with no input.
        let input: Option<Map<String, Value>> =
            serde_json::from_str(&tool.arguments).map_err(|err| {
                error!(
                    workflow_id = tool.plugin_id,
                    arguments = %tool.arguments,
                    error = %err,
                    "Failed to parse pre-call workflow arguments"
                );
                err
            })?;
        let input = input.unwrap_or_default();
        let config = workflow_config(identity, tool);

        info!(
            workflow_id = tool.plugin_id,
            tool_name = %tool.tool_name,
            mode = ?config.mode,
            "Executing pre-call workflow"
        );

        match cancellable(cancel, self.workflow.sync_execute(config, input)).await? {
            Ok(execution) => {
                self.log_response(ToolType::Workflow, &execution);
                info!(
                    workflow_id = tool.plugin_id,
                    execute_id = ?execution.trace.execute_id,
                    has_output = execution.output.is_some(),
                    "Pre-call workflow completed"
                );
                Ok(DispatchOutcome::Output(execution.output.unwrap_or_default()))
            }
            Err(err) if self.classifier.is_interrupt(&err) => {
                info!(
                    workflow_id = tool.plugin_id,
                    error = %err,
                    "Workflow interrupted during pre-call (contains interactive nodes), skipping"
                );
                Ok(DispatchOutcome::Skipped)
            }
            Err(err) => {
                error!(
                    workflow_id = tool.plugin_id,
                    error = %err,
                    "Pre-call workflow failed"
                );
                Err(err.into())
            }
        }
    }

    fn log_response<T: Serialize>(&self, backend: ToolType, resp: &T) {
        if !self.log_responses {
            return;
        }
        match serde_json::to_string(resp) {
            Ok(json) => debug!(%backend, response = %json, "Pre-call backend response"),
            Err(err) => debug!(%backend, error = %err, "Pre-call backend response not serializable"),
        }
    }
}

/// Build the plugin request for a tool.
pub fn plugin_request(identity: &AgentIdentity, tool: &PreCallTool) -> ExecuteToolRequest {
    ExecuteToolRequest {
        user_id: identity.user_id.clone(),
        exec_draft_tool: false,
        plugin_id: tool.plugin_id,
        tool_id: tool.tool_id,
        arguments_in_json: tool.arguments.clone(),
        exec_scene: ExecuteScene::for_identity(identity),
    }
}

/// Build the plugin execution options for an identity.
pub fn plugin_options(identity: &AgentIdentity) -> ExecuteToolOptions {
    ExecuteToolOptions {
        invalid_resp_strategy: InvalidResponseStrategy::ReturnDefault,
        project_info: Some(ProjectInfo {
            project_id: identity.agent_id,
            project_type: ProjectType::Agent,
            project_version: Some(identity.version.clone()),
        }),
    }
}

/// Build the workflow execution config for a tool.
pub fn workflow_config(identity: &AgentIdentity, tool: &PreCallTool) -> ExecuteConfig {
    ExecuteConfig {
        id: tool.plugin_id,
        connector_id: identity.connector_id,
        connector_uid: identity.user_id.clone(),
        task_type: TaskType::Foreground,
        agent_id: Some(identity.agent_id),
        mode: ExecuteMode::for_identity(identity),
    }
}

/// Await `fut` unless `cancel` fires first. Cancellation drops `fut`.
async fn cancellable<F>(cancel: &CancellationToken, fut: F) -> Result<F::Output>
where
    F: Future,
{
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(PreCallError::Cancelled),
        out = fut => Ok(out),
    }
}
