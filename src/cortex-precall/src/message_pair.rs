//! Tool-call / tool-result message pairs.

use cortex_precall_types::{Message, ToolCall};
use uuid::Uuid;

/// Prefix of every synthesized tool call ID.
pub const TOOL_CALL_ID_PREFIX: &str = "call_";

/// Longest tool call ID accepted by the model providers.
pub const MAX_TOOL_CALL_ID_LEN: usize = 40;

/// Generate a fresh tool call ID: the prefix followed by a hyphen-free UUID.
pub fn new_tool_call_id() -> String {
    let id = format!("{TOOL_CALL_ID_PREFIX}{}", Uuid::new_v4().simple());
    debug_assert!(id.len() <= MAX_TOOL_CALL_ID_LEN);
    id
}

/// Build the assistant tool-call message and its tool-result message.
///
/// Both share one freshly generated ID. The tool call always comes first and
/// callers must keep the pair adjacent.
pub fn build_message_pair(tool_name: &str, arguments: &str, result: &str) -> [Message; 2] {
    let call_id = new_tool_call_id();
    tracing::debug!(call_id = %call_id, tool_name, "Built pre-call message pair");

    [
        Message::assistant_tool_call(ToolCall::function(call_id.clone(), tool_name, arguments)),
        Message::tool_result(call_id, result),
    ]
}
