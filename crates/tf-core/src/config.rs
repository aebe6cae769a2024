//! Contact endpoint configuration

use crate::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT_URL: &str = "http://127.0.0.1:3000/api/contact";
pub const DEFAULT_USER_AGENT: &str = "TerafenceSite/0.1 (contact-form)";

/// Where inquiries are posted and how the client identifies itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Absolute URL of the contact endpoint
    pub endpoint_url: String,
    /// User agent sent with every submission
    pub user_agent: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint_url: std::env::var("CONTACT_ENDPOINT_URL")
                .unwrap_or_else(|_| DEFAULT_ENDPOINT_URL.to_string()),
            user_agent: std::env::var("CONTACT_USER_AGENT")
                .unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string()),
        }
    }
}

impl ContactConfig {
    pub fn new(endpoint_url: impl Into<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// The endpoint must be an absolute http(s) URL
    pub fn validate(&self) -> CoreResult<()> {
        let url = url::Url::parse(&self.endpoint_url).map_err(|e| {
            CoreError::Config(format!("invalid endpoint URL '{}': {}", self.endpoint_url, e))
        })?;

        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(CoreError::Config(format!(
                "unsupported endpoint scheme '{}'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(ContactConfig::new("http://localhost:3000/api/contact").validate().is_ok());
        assert!(ContactConfig::new("https://terafence.in/api/contact").validate().is_ok());
    }

    #[test]
    fn test_rejects_relative_url() {
        let err = ContactConfig::new("/api/contact").validate().unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn test_rejects_other_schemes() {
        assert!(ContactConfig::new("ftp://example.com/contact").validate().is_err());
    }
}
