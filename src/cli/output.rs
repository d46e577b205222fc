//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ClientError;

/// Map domain errors to a string for CLI output.
///
/// Service rejections carry the service's own message and are shown verbatim.
/// Transport failures collapse to a generic connectivity message; the raw
/// detail is already in the logs.
pub fn map_error(e: &ClientError) -> String {
    match e {
        ClientError::Transport(_) => {
            "Could not reach the generation service. Check your connection and the configured service URL.".to_string()
        }
        other => other.to_string(),
    }
}
