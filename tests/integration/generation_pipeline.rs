//! End-to-end pipeline tests against a scripted service client

use async_trait::async_trait;
use clipsmith::catalog::{Dialect, Voice};
use clipsmith::client::{
    AudioPreview, Project, VideoArtifact, VideoJobStatus, VideoServiceClient,
};
use clipsmith::cli::{format_generation_report_text, map_error};
use clipsmith::error::{ClientError, GenerationStep};
use clipsmith::generation::{GenerationRunner, RunOutcome};
use clipsmith::session::GenerationSession;
use std::sync::Arc;

/// Stub service that succeeds, optionally failing the video step with an
/// application-level rejection carrying a service-provided message.
struct StubService {
    reject_video_with: Option<&'static str>,
}

#[async_trait]
impl VideoServiceClient for StubService {
    async fn create_project(
        &self,
        text: &str,
        dialect: Dialect,
        voice: Voice,
    ) -> Result<Project, ClientError> {
        Ok(Project {
            id: "proj-1".to_string(),
            text: Some(text.to_string()),
            dialect: Some(dialect.code().to_string()),
            voice: Some(voice.id().to_string()),
            status: Some("created".to_string()),
        })
    }

    async fn preview_tts(&self, _text: &str, _voice: Voice) -> Result<AudioPreview, ClientError> {
        Ok(AudioPreview {
            audio_url: "http://svc/api/audio/preview_1.wav".to_string(),
            duration: Some(3.2),
        })
    }

    async fn generate_video(&self, project_id: &str) -> Result<VideoArtifact, ClientError> {
        if let Some(message) = self.reject_video_with {
            return Err(ClientError::ServiceRejected {
                step: GenerationStep::GenerateVideo,
                message: message.to_string(),
            });
        }
        Ok(VideoArtifact {
            video_url: Some(format!("http://svc/api/videos/{}.mp4", project_id)),
            job_id: Some("job-1".to_string()),
        })
    }

    async fn list_projects(&self) -> Result<Vec<Project>, ClientError> {
        Ok(vec![])
    }

    async fn video_status(&self, _job_id: &str) -> Result<VideoJobStatus, ClientError> {
        Ok(VideoJobStatus {
            status: "completed".to_string(),
            progress: Some(100),
            video_url: None,
        })
    }
}

#[tokio::test]
async fn test_full_run_populates_session() {
    let runner = GenerationRunner::new(Arc::new(StubService {
        reject_video_with: None,
    }));
    let mut session =
        GenerationSession::new("مرحبا بالعالم", Dialect::Egyptian, Voice::Male2).unwrap();

    let outcome = runner.run(&mut session).await.unwrap();
    assert_eq!(outcome, RunOutcome::Completed);
    assert_eq!(session.project_id.as_deref(), Some("proj-1"));
    assert_eq!(
        session.audio_url.as_deref(),
        Some("http://svc/api/audio/preview_1.wav")
    );
    assert_eq!(
        session.video_url.as_deref(),
        Some("http://svc/api/videos/proj-1.mp4")
    );
    assert_eq!(
        session.display_artifact(),
        Some("http://svc/api/videos/proj-1.mp4")
    );
    assert!(!session.generating);
}

#[tokio::test]
async fn test_job_queued_response_surfaces_job_id_not_an_error() {
    /// Service that queues the render and answers with a job id only, the
    /// shape emitted by job-based backends.
    struct JobQueueService;

    #[async_trait]
    impl VideoServiceClient for JobQueueService {
        async fn create_project(
            &self,
            _text: &str,
            _dialect: Dialect,
            _voice: Voice,
        ) -> Result<Project, ClientError> {
            Ok(Project {
                id: "proj-9".to_string(),
                text: None,
                dialect: None,
                voice: None,
                status: Some("created".to_string()),
            })
        }

        async fn preview_tts(
            &self,
            _text: &str,
            _voice: Voice,
        ) -> Result<AudioPreview, ClientError> {
            Ok(AudioPreview {
                audio_url: "http://svc/api/audio/preview_9.wav".to_string(),
                duration: None,
            })
        }

        async fn generate_video(&self, _project_id: &str) -> Result<VideoArtifact, ClientError> {
            Ok(VideoArtifact {
                video_url: None,
                job_id: Some("job-77".to_string()),
            })
        }

        async fn list_projects(&self) -> Result<Vec<Project>, ClientError> {
            Ok(vec![])
        }

        async fn video_status(&self, job_id: &str) -> Result<VideoJobStatus, ClientError> {
            assert_eq!(job_id, "job-77");
            Ok(VideoJobStatus {
                status: "processing".to_string(),
                progress: Some(40),
                video_url: None,
            })
        }
    }

    let client = Arc::new(JobQueueService);
    let runner = GenerationRunner::new(client.clone());
    let mut session = GenerationSession::new("نص", Dialect::Msa, Voice::Male1).unwrap();

    // A queued job is a successful run, not a connectivity failure.
    let outcome = runner.run(&mut session).await.unwrap();
    assert_eq!(outcome, RunOutcome::Completed);
    assert_eq!(session.job_id.as_deref(), Some("job-77"));

    // The report hands the user the job id for the status command.
    let report = format_generation_report_text(&session, None);
    assert!(report.contains("job-77"));
    assert!(!report.contains("Could not reach"));

    // The id the run recorded is valid for polling.
    let status = client.video_status(session.job_id.as_deref().unwrap()).await.unwrap();
    assert_eq!(status.status, "processing");
}

#[tokio::test]
async fn test_video_rejection_keeps_audio_and_surfaces_message() {
    let runner = GenerationRunner::new(Arc::new(StubService {
        reject_video_with: Some("فشل في توليد الفيديو"),
    }));
    let mut session = GenerationSession::new("نص تجريبي", Dialect::Msa, Voice::Female1).unwrap();

    let err = runner.run(&mut session).await.unwrap_err();
    // The service message reaches the user verbatim.
    assert!(map_error(&err).contains("فشل في توليد الفيديو"));
    // Audio from the successful preview step survives the failure.
    assert!(session.audio_url.is_some());
    assert!(session.video_url.is_none());
    assert_eq!(
        session.display_artifact(),
        session.audio_url.as_deref()
    );
    assert!(!session.generating);
}

#[tokio::test]
async fn test_transport_failure_message_is_generic() {
    struct Unreachable;

    #[async_trait]
    impl VideoServiceClient for Unreachable {
        async fn create_project(
            &self,
            _text: &str,
            _dialect: Dialect,
            _voice: Voice,
        ) -> Result<Project, ClientError> {
            Err(ClientError::Transport(
                "connection error during create_project: connection refused".to_string(),
            ))
        }

        async fn preview_tts(
            &self,
            _text: &str,
            _voice: Voice,
        ) -> Result<AudioPreview, ClientError> {
            unreachable!("pipeline must halt at the first step")
        }

        async fn generate_video(&self, _project_id: &str) -> Result<VideoArtifact, ClientError> {
            unreachable!("pipeline must halt at the first step")
        }

        async fn list_projects(&self) -> Result<Vec<Project>, ClientError> {
            unreachable!()
        }

        async fn video_status(&self, _job_id: &str) -> Result<VideoJobStatus, ClientError> {
            unreachable!()
        }
    }

    let runner = GenerationRunner::new(Arc::new(Unreachable));
    let mut session = GenerationSession::new("hello", Dialect::Msa, Voice::Male1).unwrap();

    let err = runner.run(&mut session).await.unwrap_err();
    let user_message = map_error(&err);
    assert!(!user_message.contains("connection refused"));
    assert!(user_message.contains("Could not reach the generation service"));
    assert!(session.project_id.is_none());
    assert!(session.audio_url.is_none());
}
