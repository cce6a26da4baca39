//! Pre-call pipeline entry point.

use std::sync::Arc;

use cortex_precall_types::{AgentRequest, Message};
use tokio_util::sync::CancellationToken;
use tracing::instrument;

use crate::backend::{PluginBackend, WorkflowBackend};
use crate::config::PreCallConfig;
use crate::dispatcher::ToolDispatcher;
use crate::error::Result;
use crate::interrupt::InterruptClassifier;

/// Runs the tools an agent declared for execution before its model turn.
///
/// The pipeline keeps no state between runs and may be shared across tasks.
pub struct PreCallPipeline {
    dispatcher: ToolDispatcher,
}

impl PreCallPipeline {
    /// Create a pipeline with the default interrupt policy.
    pub fn new(plugin: Arc<dyn PluginBackend>, workflow: Arc<dyn WorkflowBackend>) -> Self {
        Self {
            dispatcher: ToolDispatcher::new(plugin, workflow),
        }
    }

    /// Create a pipeline from configuration.
    pub fn from_config(
        config: &PreCallConfig,
        plugin: Arc<dyn PluginBackend>,
        workflow: Arc<dyn WorkflowBackend>,
    ) -> Self {
        let dispatcher = ToolDispatcher::new(plugin, workflow)
            .with_classifier(InterruptClassifier::new(config.interrupt_policy()))
            .with_response_logging(config.log_responses);
        Self { dispatcher }
    }

    /// Get the dispatcher.
    pub fn dispatcher(&self) -> &ToolDispatcher {
        &self.dispatcher
    }

    /// Execute the request's pre-call tools and return the messages to inject
    /// into the transcript.
    ///
    /// Messages come in tool-call / tool-result pairs, in the order the tools
    /// were declared. The first hard failure aborts the run and no messages
    /// are returned.
    #[instrument(
        name = "precall",
        skip_all,
        fields(
            agent_id = request.identity.agent_id,
            tools = request.pre_call_tools.len(),
        )
    )]
    pub async fn run(
        &self,
        cancel: &CancellationToken,
        request: &AgentRequest,
    ) -> Result<Vec<Message>> {
        if request.pre_call_tools.is_empty() {
            return Ok(Vec::new());
        }

        self.dispatcher
            .dispatch_all(cancel, &request.identity, &request.pre_call_tools)
            .await
    }
}
