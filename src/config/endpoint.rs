//! Collection endpoint configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::Environment;

/// Collection endpoint configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EndpointConfig {
    /// URL used for both account creation (POST) and the directory (GET)
    #[serde(default = "default_collection_url")]
    pub collection_url: String,

    /// Optional request timeout in seconds; unset means wait indefinitely
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl EndpointConfig {
    /// Get request timeout as Duration, if configured
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Validate endpoint configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.collection_url.is_empty() {
            return Err(ValidationError::MissingRequired("COLLECTION_URL"));
        }
        if !self.collection_url.starts_with("http://") && !self.collection_url.starts_with("https://")
        {
            return Err(ValidationError::InvalidCollectionUrl);
        }
        if *environment == Environment::Production && !self.collection_url.starts_with("https://") {
            return Err(ValidationError::UrlMustBeHttps);
        }
        if let Some(secs) = self.request_timeout_secs {
            if secs == 0 || secs > 300 {
                return Err(ValidationError::InvalidTimeout);
            }
        }
        Ok(())
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            collection_url: default_collection_url(),
            request_timeout_secs: None,
        }
    }
}

fn default_collection_url() -> String {
    "https://dummyjson.com/c/bb8d-b76d-4113-aec3".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_config_defaults() {
        let config = EndpointConfig::default();
        assert!(config.collection_url.starts_with("https://dummyjson.com/c/"));
        assert!(config.request_timeout().is_none());
    }

    #[test]
    fn test_request_timeout_duration() {
        let config = EndpointConfig {
            request_timeout_secs: Some(15),
            ..Default::default()
        };
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_validation_rejects_non_http_url() {
        let config = EndpointConfig {
            collection_url: "ftp://example.com/c".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(&Environment::Development),
            Err(ValidationError::InvalidCollectionUrl)
        );
    }

    #[test]
    fn test_validation_production_requires_https() {
        let config = EndpointConfig {
            collection_url: "http://localhost:8080/c".to_string(),
            ..Default::default()
        };
        assert!(config.validate(&Environment::Development).is_ok());
        assert_eq!(
            config.validate(&Environment::Production),
            Err(ValidationError::UrlMustBeHttps)
        );
    }

    #[test]
    fn test_validation_invalid_timeout() {
        for secs in [0, 500] {
            let config = EndpointConfig {
                request_timeout_secs: Some(secs),
                ..Default::default()
            };
            assert_eq!(
                config.validate(&Environment::Development),
                Err(ValidationError::InvalidTimeout)
            );
        }
    }
}
