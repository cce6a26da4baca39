//! Pre-call pipeline configuration.
//!
//! ```toml
//! log_responses = false
//!
//! [interrupt]
//! # Replaces the built-in keyword list when set.
//! # keywords = ["interrupt", "InputReceiver"]
//! extra_keywords = ["HumanApproval"]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::interrupt::{DEFAULT_INTERRUPT_KEYWORDS, InterruptPolicy};

/// Pre-call pipeline configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreCallConfig {
    /// Log backend responses as JSON at debug level.
    #[serde(default)]
    pub log_responses: bool,
    /// Interrupt classification settings.
    #[serde(default)]
    pub interrupt: InterruptConfig,
}

/// Keyword settings for interrupt classification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterruptConfig {
    /// Full keyword list. `None` keeps the built-in list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    /// Keywords added on top of the base list.
    #[serde(default)]
    pub extra_keywords: Vec<String>,
}

impl PreCallConfig {
    /// Parse from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load from a TOML file.
    pub async fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_toml_str(&content)
    }

    /// Build the interrupt keyword policy.
    pub fn interrupt_policy(&self) -> InterruptPolicy {
        let policy = match &self.interrupt.keywords {
            Some(keywords) => InterruptPolicy::new(keywords.iter().cloned()),
            None => InterruptPolicy::new(DEFAULT_INTERRUPT_KEYWORDS.iter().copied()),
        };
        policy.with_keywords(self.interrupt.extra_keywords.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = PreCallConfig::from_toml_str("").unwrap();

        assert_eq!(config, PreCallConfig::default());
        assert!(!config.log_responses);
        assert_eq!(config.interrupt_policy(), InterruptPolicy::default());
    }

    #[test]
    fn test_extra_keywords_extend_defaults() {
        let config = PreCallConfig::from_toml_str(
            r#"
            log_responses = true

            [interrupt]
            extra_keywords = ["HumanApproval"]
            "#,
        )
        .unwrap();

        let policy = config.interrupt_policy();
        assert!(config.log_responses);
        assert_eq!(policy.keywords().len(), DEFAULT_INTERRUPT_KEYWORDS.len() + 1);
        assert!(policy.matches("HumanApproval node pending"));
        assert!(policy.matches("QuestionAnswer"));
    }

    #[test]
    fn test_keywords_replace_defaults() {
        let config = PreCallConfig::from_toml_str(
            r#"
            [interrupt]
            keywords = ["Suspended"]
            extra_keywords = ["Paused"]
            "#,
        )
        .unwrap();

        let policy = config.interrupt_policy();
        assert_eq!(
            policy.keywords(),
            ["Suspended".to_string(), "Paused".to_string()]
        );
        assert!(!policy.matches("QuestionAnswer"));
    }

    #[test]
    fn test_invalid_toml() {
        let err = PreCallConfig::from_toml_str("log_responses = \"yes\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("precall.toml");
        tokio::fs::write(&path, "[interrupt]\nextra_keywords = [\"Confirm\"]\n")
            .await
            .unwrap();

        let config = PreCallConfig::load_from_file(&path).await.unwrap();
        assert_eq!(config.interrupt.extra_keywords, vec!["Confirm".to_string()]);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let err = PreCallConfig::load_from_file(&path).await.unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("missing.toml"));
    }
}
