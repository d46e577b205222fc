//! Merge rules: defaults, override order, conflict handling.

use crate::config::{
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SERVICE_URL,
};
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("service.base_url", DEFAULT_SERVICE_URL)?
        .set_default(
            "service.connect_timeout_secs",
            DEFAULT_CONNECT_TIMEOUT_SECS as i64,
        )?
        .set_default(
            "service.request_timeout_secs",
            DEFAULT_REQUEST_TIMEOUT_SECS as i64,
        )
}
