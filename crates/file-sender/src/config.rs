//! Configuration for the file sender.

use file_sender_core::ValidationPolicy;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Configuration for a [`FileSender`](crate::FileSender).
///
/// The default accepts format versions `"4.0"` and `"3.1"` and documents
/// younger than one calendar month.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSenderConfig {
    /// Format and freshness rules.
    #[serde(flatten)]
    pub validation: ValidationPolicy,
}

impl FileSenderConfig {
    /// Parse from JSON and check the result. Missing fields take defaults.
    ///
    /// ```json
    /// { "accepted_formats": ["4.0", "3.1"], "max_age_months": 1 }
    /// ```
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations under which nothing could ever be sent.
    pub fn validate(&self) -> Result<()> {
        if self.validation.accepted_formats.is_empty() {
            return Err(ConfigError::NoAcceptedFormats);
        }
        if self.validation.max_age_months == 0 {
            return Err(ConfigError::ZeroMaxAge);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_built_in_rules() {
        let config = FileSenderConfig::default();
        assert_eq!(config.validation.accepted_formats, ["4.0", "3.1"]);
        assert_eq!(config.validation.max_age_months, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = FileSenderConfig::from_json(r#"{"max_age_months": 6}"#).unwrap();
        assert_eq!(config.validation.max_age_months, 6);
        assert!(config.validation.accepts_format("4.0"));
    }

    #[test]
    fn test_from_json_empty_object_is_default() {
        assert_eq!(
            FileSenderConfig::from_json("{}").unwrap(),
            FileSenderConfig::default()
        );
    }

    #[test]
    fn test_from_json_rejects_empty_formats() {
        let err = FileSenderConfig::from_json(r#"{"accepted_formats": []}"#).unwrap_err();
        assert!(matches!(err, ConfigError::NoAcceptedFormats));
    }

    #[test]
    fn test_from_json_rejects_zero_age() {
        let err = FileSenderConfig::from_json(r#"{"max_age_months": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroMaxAge));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = FileSenderConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_serializes_flat() {
        let json = serde_json::to_value(FileSenderConfig::default()).unwrap();
        assert_eq!(json["max_age_months"], 1);
        assert_eq!(json["accepted_formats"][0], "4.0");
    }
}
