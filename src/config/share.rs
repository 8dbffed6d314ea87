//! Share link configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Base of generated share URLs
#[derive(Debug, Clone, Deserialize)]
pub struct ShareConfig {
    /// Origin and path the `#state=` fragment is appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl ShareConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let url = self.base_url.trim();
        if url.is_empty() {
            return Err(ValidationError::MissingRequired("share.base_url"));
        }
        let has_scheme = url.starts_with("http://") || url.starts_with("https://");
        if !has_scheme || url.contains('#') {
            return Err(ValidationError::InvalidShareBaseUrl);
        }
        Ok(())
    }
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:5173/".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_config_defaults() {
        let config = ShareConfig::default();
        assert_eq!(config.base_url, "http://localhost:5173/");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_relative_url() {
        let config = ShareConfig {
            base_url: "/proposal".to_string(),
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidShareBaseUrl));
    }

    #[test]
    fn test_validation_rejects_fragment() {
        let config = ShareConfig {
            base_url: "https://example.com/#state=abc".to_string(),
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidShareBaseUrl));
    }
}
