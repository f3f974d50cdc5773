// Copyright (C) 2025 LiveMux Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Client configuration for transports talking to the control plane.

use std::time::Duration;

use thiserror::Error;
use tracing::debug;

/// Failure while assembling a [`ClientConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment variable held a value that does not parse.
    #[error("invalid {var}: {reason}")]
    InvalidEnvVar { var: &'static str, reason: String },
}

/// Configuration for a control-plane client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Endpoint URL of the control plane.
    pub endpoint: String,
    /// Region the client operates in.
    pub region: String,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// Request timeout.
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://livemux.localhost:8443".to_string(),
            region: "local".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration from environment variables.
    ///
    /// Environment variables:
    /// - `LIVEMUX_ENDPOINT`: Endpoint URL (default: "https://livemux.localhost:8443")
    /// - `LIVEMUX_REGION`: Region name (default: "local")
    /// - `LIVEMUX_CONNECT_TIMEOUT_MS`: Connection timeout in milliseconds (default: 10000)
    /// - `LIVEMUX_REQUEST_TIMEOUT_MS`: Request timeout in milliseconds (default: 30000)
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(endpoint) = std::env::var("LIVEMUX_ENDPOINT") {
            debug!(endpoint = %endpoint, "using endpoint from environment");
            config.endpoint = endpoint;
        }

        if let Ok(region) = std::env::var("LIVEMUX_REGION") {
            debug!(region = %region, "using region from environment");
            config.region = region;
        }

        if let Ok(raw) = std::env::var("LIVEMUX_CONNECT_TIMEOUT_MS") {
            let millis: u64 = raw.parse().map_err(|e| ConfigError::InvalidEnvVar {
                var: "LIVEMUX_CONNECT_TIMEOUT_MS",
                reason: format!("{e}"),
            })?;
            debug!(connect_timeout_ms = millis, "using connect timeout from environment");
            config.connect_timeout = Duration::from_millis(millis);
        }

        if let Ok(raw) = std::env::var("LIVEMUX_REQUEST_TIMEOUT_MS") {
            let millis: u64 = raw.parse().map_err(|e| ConfigError::InvalidEnvVar {
                var: "LIVEMUX_REQUEST_TIMEOUT_MS",
                reason: format!("{e}"),
            })?;
            debug!(request_timeout_ms = millis, "using request timeout from environment");
            config.request_timeout = Duration::from_millis(millis);
        }

        Ok(config)
    }

    /// Set the endpoint URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Set the connection timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint, "https://livemux.localhost:8443");
        assert_eq!(config.region, "local");
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_builder_methods() {
        let config = ClientConfig::new()
            .with_endpoint("https://control.livemux.example")
            .with_region("eu-west")
            .with_connect_timeout(Duration::from_secs(5))
            .with_request_timeout(Duration::from_secs(60));

        assert_eq!(config.endpoint, "https://control.livemux.example");
        assert_eq!(config.region, "eu-west");
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
        assert_eq!(config.request_timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_invalid_timeout_reported() {
        let err = ConfigError::InvalidEnvVar {
            var: "LIVEMUX_CONNECT_TIMEOUT_MS",
            reason: "invalid digit found in string".to_string(),
        };
        assert!(err.to_string().contains("LIVEMUX_CONNECT_TIMEOUT_MS"));
    }
}
