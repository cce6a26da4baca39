//! Testing utilities.
//!
//! Scripted backends that replay queued replies in call order and record
//! every request they receive.

use std::collections::VecDeque;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::Mutex;

use crate::backend::{
    ExecuteConfig, ExecuteToolOptions, ExecuteToolRequest, ExecuteToolResponse, PluginBackend,
    PluginError, WorkflowBackend, WorkflowError, WorkflowExecution,
};

enum Reply<T, E> {
    Ready(Result<T, E>),
    /// Never completes; used to exercise cancellation.
    Pending,
}

impl<T, E> Reply<T, E> {
    async fn resolve(self) -> Result<T, E> {
        match self {
            Reply::Ready(result) => result,
            Reply::Pending => std::future::pending().await,
        }
    }
}

/// A plugin call seen by [`MockPluginBackend`].
#[derive(Debug, Clone)]
pub struct PluginCall {
    pub request: ExecuteToolRequest,
    pub options: ExecuteToolOptions,
}

/// Scripted plugin backend.
#[derive(Default)]
pub struct MockPluginBackend {
    replies: Mutex<VecDeque<Reply<ExecuteToolResponse, PluginError>>>,
    calls: Mutex<Vec<PluginCall>>,
}

impl MockPluginBackend {
    /// Create a backend with no queued replies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response.
    pub fn respond(mut self, text: impl Into<String>) -> Self {
        self.replies
            .get_mut()
            .push_back(Reply::Ready(Ok(ExecuteToolResponse::text(text))));
        self
    }

    /// Queue a failure.
    pub fn fail(mut self, err: PluginError) -> Self {
        self.replies.get_mut().push_back(Reply::Ready(Err(err)));
        self
    }

    /// Queue a call that never completes.
    pub fn pending(mut self) -> Self {
        self.replies.get_mut().push_back(Reply::Pending);
        self
    }

    /// Calls received so far.
    pub async fn calls(&self) -> Vec<PluginCall> {
        self.calls.lock().await.clone()
    }

    /// Number of calls received so far.
    pub async fn call_count(&self) -> usize {
        self.calls.lock().await.len()
    }
}

#[async_trait]
impl PluginBackend for MockPluginBackend {
    async fn execute_tool(
        &self,
        request: ExecuteToolRequest,
        options: ExecuteToolOptions,
    ) -> Result<ExecuteToolResponse, PluginError> {
        let plugin_id = request.plugin_id;
        let tool_id = request.tool_id;
        self.calls.lock().await.push(PluginCall { request, options });

        let reply = self.replies.lock().await.pop_front();
        match reply {
            Some(reply) => reply.resolve().await,
            None => Err(PluginError::NotFound { plugin_id, tool_id }),
        }
    }
}

/// A workflow run seen by [`MockWorkflowBackend`].
#[derive(Debug, Clone)]
pub struct WorkflowCall {
    pub config: ExecuteConfig,
    pub input: Map<String, Value>,
}

/// Scripted workflow backend.
#[derive(Default)]
pub struct MockWorkflowBackend {
    replies: Mutex<VecDeque<Reply<WorkflowExecution, WorkflowError>>>,
    calls: Mutex<Vec<WorkflowCall>>,
}

impl MockWorkflowBackend {
    /// Create a backend with no queued replies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a run producing `output`.
    pub fn respond(mut self, output: impl Into<String>) -> Self {
        self.replies
            .get_mut()
            .push_back(Reply::Ready(Ok(WorkflowExecution::with_output(output))));
        self
    }

    /// Queue a run result.
    pub fn complete(mut self, execution: WorkflowExecution) -> Self {
        self.replies.get_mut().push_back(Reply::Ready(Ok(execution)));
        self
    }

    /// Queue a failure.
    pub fn fail(mut self, err: WorkflowError) -> Self {
        self.replies.get_mut().push_back(Reply::Ready(Err(err)));
        self
    }

    /// Queue a run that never completes.
    pub fn pending(mut self) -> Self {
        self.replies.get_mut().push_back(Reply::Pending);
        self
    }

    /// Runs received so far.
    pub async fn calls(&self) -> Vec<WorkflowCall> {
        self.calls.lock().await.clone()
    }

    /// Number of runs received so far.
    pub async fn call_count(&self) -> usize {
        self.calls.lock().await.len()
    }
}

#[async_trait]
impl WorkflowBackend for MockWorkflowBackend {
    async fn sync_execute(
        &self,
        config: ExecuteConfig,
        input: Map<String, Value>,
    ) -> Result<WorkflowExecution, WorkflowError> {
        let id = config.id;
        self.calls.lock().await.push(WorkflowCall { config, input });

        let reply = self.replies.lock().await.pop_front();
        match reply {
            Some(reply) => reply.resolve().await,
            None => Err(WorkflowError::NotFound(id)),
        }
    }
}
