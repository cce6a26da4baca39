//! Backend boundaries the pipeline dispatches to.
//!
//! Both backends are injected into the pipeline as trait objects; the
//! pipeline never reaches for a process-wide default service.

pub mod plugin;
pub mod workflow;

pub use plugin::{
    ExecuteToolOptions, ExecuteToolRequest, ExecuteToolResponse, PluginBackend, PluginError,
    ProjectInfo,
};
pub use workflow::{
    ExecuteConfig, InterruptInfo, TraceInfo, WorkflowBackend, WorkflowError, WorkflowExecution,
};
