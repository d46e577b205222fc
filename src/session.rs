//! Transient generation session state.
//!
//! One session per generation attempt: created from validated inputs, mutated
//! only by the orchestrator, discarded afterwards. Nothing here is persisted.

use crate::catalog::{Dialect, Voice};
use crate::error::ClientError;
use serde::Serialize;

/// Validated inputs plus the artifacts accumulated by a run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationSession {
    pub text: String,
    pub dialect: Dialect,
    pub voice: Voice,
    /// True while a run is in flight; a second invocation is a no-op.
    pub generating: bool,
    pub project_id: Option<String>,
    pub audio_url: Option<String>,
    pub video_url: Option<String>,
    /// Set when the service queued the video as an asynchronous job instead
    /// of returning a finished URL; polled via the status endpoint.
    pub job_id: Option<String>,
}

impl GenerationSession {
    /// Build a session after input validation. Text must be non-blank.
    pub fn new(text: &str, dialect: Dialect, voice: Voice) -> Result<Self, ClientError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ClientError::InvalidInput(
                "Text is required and must not be blank".to_string(),
            ));
        }
        Ok(Self {
            text: text.to_string(),
            dialect,
            voice,
            generating: false,
            project_id: None,
            audio_url: None,
            video_url: None,
            job_id: None,
        })
    }

    /// Mark the session in flight. Returns false when a run is already active,
    /// in which case the caller must not start another.
    pub fn try_begin(&mut self) -> bool {
        if self.generating {
            return false;
        }
        self.generating = true;
        self.project_id = None;
        self.audio_url = None;
        self.video_url = None;
        self.job_id = None;
        true
    }

    /// Clear the in-flight flag, keeping whatever artifacts were recorded.
    pub fn finish(&mut self) {
        self.generating = false;
    }

    /// Most recent available artifact, video preferred over audio.
    pub fn display_artifact(&self) -> Option<&str> {
        self.video_url
            .as_deref()
            .or(self.audio_url.as_deref())
    }
}
