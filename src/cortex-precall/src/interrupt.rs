//! Classification of workflow failures that are really interruptions.
//!
//! A workflow containing an interactive node (an input receiver, a
//! question-answer node) cannot finish inside the pre-call phase. Such runs
//! must be skipped so the model can call the workflow itself later, while
//! every other failure aborts the pipeline.
//!
//! Classification runs in two tiers:
//!
//! 1. typed extraction of [`InterruptInfo`] from the error value;
//! 2. a case-sensitive keyword scan of the error text, driven by
//!    [`InterruptPolicy`].
//!
//! The keyword tier only knows the node types listed in the policy. Other
//! interactive node types are classified as hard failures until their
//! wording is added, either here or through configuration.

use crate::backend::{InterruptInfo, WorkflowError};

/// Keywords that mark a workflow error as an interruption.
pub const DEFAULT_INTERRUPT_KEYWORDS: &[&str] = &[
    "interrupt",
    "InterruptEvent",
    "interrupt and rerun",
    "NewInterruptAndRerunErr",
    "InputReceiver",
    "QuestionAnswer",
];

/// Keyword policy for the textual classification tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterruptPolicy {
    keywords: Vec<String>,
}

impl InterruptPolicy {
    /// Create a policy from an explicit keyword list.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut policy = Self {
            keywords: Vec::new(),
        };
        policy.extend(keywords);
        policy
    }

    /// Add keywords. Empty and duplicate keywords are ignored.
    pub fn extend<I, S>(&mut self, keywords: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for keyword in keywords {
            let keyword = keyword.into();
            // An empty needle would match every error.
            if keyword.is_empty() || self.keywords.contains(&keyword) {
                continue;
            }
            self.keywords.push(keyword);
        }
    }

    /// Builder form of [`InterruptPolicy::extend`].
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extend(keywords);
        self
    }

    /// Get the active keywords.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Find the first keyword contained in `message`.
    pub fn matching_keyword(&self, message: &str) -> Option<&str> {
        self.keywords
            .iter()
            .find(|k| message.contains(k.as_str()))
            .map(String::as_str)
    }

    /// Check whether `message` contains any keyword.
    pub fn matches(&self, message: &str) -> bool {
        self.matching_keyword(message).is_some()
    }
}

impl Default for InterruptPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_INTERRUPT_KEYWORDS.iter().copied())
    }
}

/// Extract interrupt metadata carried by a workflow error.
///
/// Looks at the error itself and, for wrapped errors, at every cause in the
/// source chain.
pub fn extract_interrupt_info(err: &WorkflowError) -> Option<&InterruptInfo> {
    match err {
        WorkflowError::Interrupted(info) => Some(info),
        WorkflowError::Other(inner) => inner
            .chain()
            .find_map(|cause| cause.downcast_ref::<InterruptInfo>()),
        WorkflowError::NotFound(_) | WorkflowError::Execution(_) => None,
    }
}

/// Full display text of a workflow error, including every wrapped cause.
fn error_text(err: &WorkflowError) -> String {
    match err {
        // Alternate formatting renders the whole chain as `outer: inner`.
        WorkflowError::Other(inner) => format!("{inner:#}"),
        _ => err.to_string(),
    }
}

/// Decides whether a workflow failure is a recoverable interruption.
#[derive(Debug, Clone, Default)]
pub struct InterruptClassifier {
    policy: InterruptPolicy,
}

impl InterruptClassifier {
    /// Create a classifier with the given keyword policy.
    pub fn new(policy: InterruptPolicy) -> Self {
        Self { policy }
    }

    /// Get the keyword policy.
    pub fn policy(&self) -> &InterruptPolicy {
        &self.policy
    }

    /// Check if `err` is an interruption rather than a hard failure.
    pub fn is_interrupt(&self, err: &WorkflowError) -> bool {
        if let Some(info) = extract_interrupt_info(err) {
            tracing::debug!(
                node_key = %info.node_key,
                node_type = %info.node_type,
                "Workflow error carries interrupt metadata"
            );
            return true;
        }

        match self.policy.matching_keyword(&error_text(err)) {
            Some(keyword) => {
                tracing::debug!(keyword, "Workflow error matched interrupt keyword");
                true
            }
            None => false,
        }
    }
}
