//! Tests for pipeline error types.

use crate::backend::{PluginError, WorkflowError};
use crate::error::PreCallError;

#[test]
fn test_plugin_error_surfaces_verbatim() {
    let err: PreCallError = PluginError::execution(7, "quota exhausted").into();

    assert_eq!(
        err.to_string(),
        PluginError::execution(7, "quota exhausted").to_string()
    );
    assert!(matches!(
        err,
        PreCallError::Plugin(PluginError::Execution { plugin_id: 7, .. })
    ));
    assert!(err.is_backend_failure());
    assert!(!err.is_input_defect());
}

#[test]
fn test_workflow_error_surfaces_verbatim() {
    let err: PreCallError = WorkflowError::NotFound(9).into();

    assert_eq!(err.to_string(), "Workflow not found: 9");
    assert!(err.is_backend_failure());
}

#[test]
fn test_wrapped_backend_error_keeps_source_text() {
    let err: PreCallError = PluginError::Other(anyhow::anyhow!("tls handshake failed")).into();
    assert_eq!(err.to_string(), "tls handshake failed");
}

#[test]
fn test_parse_error_is_input_defect() {
    let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let expected = parse_err.to_string();
    let err: PreCallError = parse_err.into();

    assert!(err.is_input_defect());
    assert!(!err.is_backend_failure());
    assert_eq!(err.to_string(), expected);
}

#[test]
fn test_cancelled_display() {
    assert_eq!(
        PreCallError::Cancelled.to_string(),
        "Pre-call pipeline cancelled"
    );
}
