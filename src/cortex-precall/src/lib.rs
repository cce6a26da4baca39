//! # Cortex Pre-Call Pipeline
//!
//! Executes the tools an agent declares for invocation *before* its model
//! turn and turns their results into synthetic conversation messages.
//!
//! Each declared tool is routed to the plugin or workflow backend, one at a
//! time and in declaration order. A non-empty result becomes an assistant
//! tool-call message followed by its tool-result message, linked by a fresh
//! `call_` ID. Workflows that stop at an interactive node are skipped so the
//! model can call them itself later; any other failure aborts the run.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use cortex_precall::{PreCallConfig, PreCallPipeline};
//! use tokio_util::sync::CancellationToken;
//!
//! let config = PreCallConfig::load_from_file(path).await?;
//! let pipeline = PreCallPipeline::from_config(&config, plugin_backend, workflow_backend);
//!
//! let messages = pipeline.run(&CancellationToken::new(), &request).await?;
//! transcript.extend(messages);
//! ```

pub mod backend;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod interrupt;
pub mod message_pair;
pub mod pipeline;
pub mod testing;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use backend::{
    ExecuteConfig, ExecuteToolOptions, ExecuteToolRequest, ExecuteToolResponse, InterruptInfo,
    PluginBackend, PluginError, ProjectInfo, TraceInfo, WorkflowBackend, WorkflowError,
    WorkflowExecution,
};
pub use config::{InterruptConfig, PreCallConfig};
pub use dispatcher::{DispatchOutcome, ToolDispatcher};
pub use error::{ConfigError, PreCallError, Result};
pub use interrupt::{
    DEFAULT_INTERRUPT_KEYWORDS, InterruptClassifier, InterruptPolicy, extract_interrupt_info,
};
pub use message_pair::{
    MAX_TOOL_CALL_ID_LEN, TOOL_CALL_ID_PREFIX, build_message_pair, new_tool_call_id,
};
pub use pipeline::PreCallPipeline;
