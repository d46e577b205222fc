//! Configuration System
//!
//! Hierarchical configuration for the generation service client: merge-policy
//! defaults, a global file under the user config directory, and workspace
//! files, with later sources overriding earlier ones.

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Connect timeout applied when none is configured.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Request timeout applied when none is configured. Video generation is slow;
/// the transport default is deliberately generous and nothing shorter is
/// enforced per step.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;
/// Base URL used when no configuration names the service host.
pub const DEFAULT_SERVICE_URL: &str = "http://localhost:5000";

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipsmithConfig {
    /// Remote generation service settings
    #[serde(default)]
    pub service: ServiceConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for ClipsmithConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Remote generation service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the generation service
    #[serde(default = "default_service_url")]
    pub base_url: String,

    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_service_url() -> String {
    DEFAULT_SERVICE_URL.to_string()
}

fn default_connect_timeout() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_SECS
}

fn default_request_timeout() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_service_url(),
            connect_timeout_secs: default_connect_timeout(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ServiceConfig {
    /// Validate service configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("Service base URL cannot be empty".to_string());
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(format!(
                "Service base URL must start with http:// or https://: {}",
                self.base_url
            ));
        }
        if self.connect_timeout_secs == 0 || self.request_timeout_secs == 0 {
            return Err("Timeouts must be greater than zero".to_string());
        }
        Ok(())
    }
}

impl ClipsmithConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), String> {
        self.service.validate()
    }
}
