//! Cortex Pre-Call Types - data shared between the pre-call pipeline and its callers
//!
//! This crate defines the agent request handed to the tool pre-call pipeline,
//! the execution scope derived from the agent identity, and the conversation
//! messages the pipeline produces for the model transcript.

pub mod message;
pub mod request;
pub mod scope;

#[cfg(test)]
mod tests;

// Re-exports
pub use message::{FunctionCall, Message, MessageRole, TOOL_CALL_TYPE_FUNCTION, ToolCall};
pub use request::{AgentIdentity, AgentRequest, PreCallTool, ToolType};
pub use scope::{ExecuteMode, ExecuteScene, InvalidResponseStrategy, ProjectType, TaskType};
