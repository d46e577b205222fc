//! Generation orchestrator.
//!
//! Runs the three remote calls strictly in order: create project, synthesize
//! preview audio, generate video. Each call is a blocking round-trip with no
//! retry; the first failure halts the remaining steps. A failed run after the
//! audio step leaves the audio reference in the session (partial state is
//! surfaced as-is), and a project created before a later failure is not
//! cleaned up.

use crate::client::VideoServiceClient;
use crate::error::ClientError;
use crate::session::GenerationSession;
use std::sync::Arc;
use tracing::{error, info};

/// How a run invocation ended, outside of errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// All three steps completed; the session holds the preview audio plus
    /// either the finished video or a job id to poll.
    Completed,
    /// Another run was already in flight; nothing was called.
    SkippedInFlight,
}

/// Drives a [`GenerationSession`] through the three-step pipeline.
pub struct GenerationRunner {
    client: Arc<dyn VideoServiceClient>,
}

impl GenerationRunner {
    pub fn new(client: Arc<dyn VideoServiceClient>) -> Self {
        Self { client }
    }

    /// Execute the pipeline against the session.
    ///
    /// Re-entrancy is guarded by the session's generating flag: when a run is
    /// already in flight the invocation is a no-op. On error the flag is
    /// cleared and whatever artifacts were recorded before the failure remain
    /// in the session.
    pub async fn run(&self, session: &mut GenerationSession) -> Result<RunOutcome, ClientError> {
        if !session.try_begin() {
            info!("Generation already in flight; ignoring request");
            return Ok(RunOutcome::SkippedInFlight);
        }

        let result = self.run_steps(session).await;
        session.finish();
        match &result {
            Ok(_) => info!(
                project_id = session.project_id.as_deref().unwrap_or(""),
                "Generation completed"
            ),
            Err(e) => error!("Generation failed: {}", e),
        }
        result.map(|_| RunOutcome::Completed)
    }

    async fn run_steps(&self, session: &mut GenerationSession) -> Result<(), ClientError> {
        info!(dialect = %session.dialect, voice = %session.voice, "Creating project");
        let project = self
            .client
            .create_project(&session.text, session.dialect, session.voice)
            .await?;
        session.project_id = Some(project.id.clone());

        info!(project_id = %project.id, "Synthesizing preview audio");
        let preview = self.client.preview_tts(&session.text, session.voice).await?;
        session.audio_url = Some(preview.audio_url);

        info!(project_id = %project.id, "Generating video");
        let artifact = self.client.generate_video(&project.id).await?;
        session.video_url = artifact.video_url;
        session.job_id = artifact.job_id;

        Ok(())
    }
}
