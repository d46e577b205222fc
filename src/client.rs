//! Generation service client.
//!
//! Typed reqwest client for the remote text-to-video service. Every endpoint
//! answers JSON carrying a boolean `success` plus either an `error` message or
//! a named result field; the service signals application failures through that
//! flag (often alongside a non-2xx status), so responses are parsed from the
//! body rather than gated on the HTTP status code.

use crate::catalog::{Dialect, Voice};
use crate::config::ServiceConfig;
use crate::error::{ClientError, GenerationStep};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Project record returned by the service. Only `id` carries local meaning;
/// the rest is echoed request data kept for listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub dialect: Option<String>,
    #[serde(default)]
    pub voice: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Result of a successful TTS preview call.
#[derive(Debug, Clone)]
pub struct AudioPreview {
    /// Absolute URL of the preview audio.
    pub audio_url: String,
    /// Estimated duration in seconds, when the service reports one.
    pub duration: Option<f64>,
}

/// Result of a successful video generation call. The service answers in one
/// of two shapes: a direct `video_url`, or a `job_id` for asynchronous
/// rendering polled via the status endpoint. At least one is always set.
#[derive(Debug, Clone)]
pub struct VideoArtifact {
    pub video_url: Option<String>,
    pub job_id: Option<String>,
}

/// Video job status returned by the status endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoJobStatus {
    pub status: String,
    #[serde(default)]
    pub progress: Option<u8>,
    #[serde(default)]
    pub video_url: Option<String>,
}

/// Generation service client trait.
///
/// The orchestrator depends on this seam so tests can script responses
/// without a network.
#[async_trait]
pub trait VideoServiceClient: Send + Sync {
    /// Create a project from the full input set. First step of a run.
    async fn create_project(
        &self,
        text: &str,
        dialect: Dialect,
        voice: Voice,
    ) -> Result<Project, ClientError>;

    /// Synthesize a preview of the text in the given voice.
    async fn preview_tts(&self, text: &str, voice: Voice) -> Result<AudioPreview, ClientError>;

    /// Generate the final video for a previously created project.
    async fn generate_video(&self, project_id: &str) -> Result<VideoArtifact, ClientError>;

    /// List projects recorded on the service.
    async fn list_projects(&self) -> Result<Vec<Project>, ClientError>;

    /// Poll the status of an asynchronous video job.
    async fn video_status(&self, job_id: &str) -> Result<VideoJobStatus, ClientError>;
}

// Wire request bodies.
#[derive(Serialize)]
struct CreateProjectRequest<'a> {
    text: &'a str,
    dialect: Dialect,
    voice: Voice,
}

#[derive(Serialize)]
struct TtsPreviewRequest<'a> {
    text: &'a str,
    voice: Voice,
}

#[derive(Serialize)]
struct VideoGenerateRequest<'a> {
    project_id: &'a str,
}

// Wire response bodies. Each carries the success flag; the error message is
// only present on failure.
#[derive(Deserialize)]
struct CreateProjectResponse {
    success: bool,
    #[serde(default)]
    project: Option<Project>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Deserialize)]
struct TtsPreviewResponse {
    success: bool,
    #[serde(default)]
    audio_url: Option<String>,
    #[serde(default)]
    duration: Option<f64>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Deserialize)]
struct VideoGenerateResponse {
    success: bool,
    #[serde(default)]
    video_url: Option<String>,
    #[serde(default)]
    job_id: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Deserialize)]
struct ProjectListResponse {
    success: bool,
    #[serde(default)]
    projects: Vec<Project>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Deserialize)]
struct VideoStatusResponse {
    success: bool,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    progress: Option<u8>,
    #[serde(default)]
    video_url: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

fn map_http_error(step: GenerationStep, error: reqwest::Error) -> ClientError {
    if error.is_timeout() {
        ClientError::Transport(format!("request timeout during {}: {}", step.slug(), error))
    } else if error.is_connect() {
        ClientError::Transport(format!("connection error during {}: {}", step.slug(), error))
    } else {
        ClientError::Transport(format!("{}: {}", step.slug(), error))
    }
}

fn rejected(step: GenerationStep, error: Option<String>) -> ClientError {
    ClientError::ServiceRejected {
        step,
        message: error.unwrap_or_else(|| "unknown error".to_string()),
    }
}

/// Accept either video generation shape: a finished `video_url` or a `job_id`
/// for asynchronous rendering. A success body carrying neither is malformed.
fn video_artifact_from(body: VideoGenerateResponse) -> Result<VideoArtifact, ClientError> {
    if body.video_url.is_none() && body.job_id.is_none() {
        return Err(ClientError::Transport(
            "video_generate: response carried neither video_url nor job_id".to_string(),
        ));
    }
    Ok(VideoArtifact {
        video_url: body.video_url,
        job_id: body.job_id,
    })
}

/// Join a possibly host-relative media path onto the service base URL.
///
/// The service returns preview audio paths like `/api/audio/preview_x.wav`;
/// absolute URLs pass through unchanged.
pub fn resolve_media_url(base_url: &str, media: &str) -> String {
    if media.starts_with("http://") || media.starts_with("https://") {
        return media.to_string();
    }
    let base = base_url.trim_end_matches('/');
    if media.starts_with('/') {
        format!("{}{}", base, media)
    } else {
        format!("{}/{}", base, media)
    }
}

/// HTTP implementation of [`VideoServiceClient`] backed by reqwest.
pub struct HttpVideoServiceClient {
    client: Client,
    base_url: String,
}

impl HttpVideoServiceClient {
    pub fn new(config: &ServiceConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| ClientError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl VideoServiceClient for HttpVideoServiceClient {
    async fn create_project(
        &self,
        text: &str,
        dialect: Dialect,
        voice: Voice,
    ) -> Result<Project, ClientError> {
        let step = GenerationStep::CreateProject;
        let response = self
            .client
            .post(self.endpoint("/api/projects"))
            .json(&CreateProjectRequest {
                text,
                dialect,
                voice,
            })
            .send()
            .await
            .map_err(|e| map_http_error(step, e))?;

        let body: CreateProjectResponse =
            response.json().await.map_err(|e| map_http_error(step, e))?;
        if !body.success {
            return Err(rejected(step, body.error));
        }
        body.project
            .ok_or_else(|| ClientError::Transport("create_project: missing project in response".to_string()))
    }

    async fn preview_tts(&self, text: &str, voice: Voice) -> Result<AudioPreview, ClientError> {
        let step = GenerationStep::SynthesizePreview;
        let response = self
            .client
            .post(self.endpoint("/api/tts/preview"))
            .json(&TtsPreviewRequest { text, voice })
            .send()
            .await
            .map_err(|e| map_http_error(step, e))?;

        let body: TtsPreviewResponse =
            response.json().await.map_err(|e| map_http_error(step, e))?;
        if !body.success {
            return Err(rejected(step, body.error));
        }
        let audio_url = body
            .audio_url
            .ok_or_else(|| ClientError::Transport("tts_preview: missing audio_url in response".to_string()))?;
        Ok(AudioPreview {
            audio_url: resolve_media_url(&self.base_url, &audio_url),
            duration: body.duration,
        })
    }

    async fn generate_video(&self, project_id: &str) -> Result<VideoArtifact, ClientError> {
        let step = GenerationStep::GenerateVideo;
        let response = self
            .client
            .post(self.endpoint("/api/video/generate"))
            .json(&VideoGenerateRequest { project_id })
            .send()
            .await
            .map_err(|e| map_http_error(step, e))?;

        let body: VideoGenerateResponse =
            response.json().await.map_err(|e| map_http_error(step, e))?;
        if !body.success {
            return Err(rejected(step, body.error));
        }
        video_artifact_from(body)
    }

    async fn list_projects(&self) -> Result<Vec<Project>, ClientError> {
        let step = GenerationStep::ListProjects;
        let response = self
            .client
            .get(self.endpoint("/api/projects"))
            .send()
            .await
            .map_err(|e| map_http_error(step, e))?;

        let body: ProjectListResponse =
            response.json().await.map_err(|e| map_http_error(step, e))?;
        if !body.success {
            return Err(rejected(step, body.error));
        }
        Ok(body.projects)
    }

    async fn video_status(&self, job_id: &str) -> Result<VideoJobStatus, ClientError> {
        let step = GenerationStep::PollStatus;
        let response = self
            .client
            .get(self.endpoint(&format!("/api/video/status/{}", job_id)))
            .send()
            .await
            .map_err(|e| map_http_error(step, e))?;

        let body: VideoStatusResponse =
            response.json().await.map_err(|e| map_http_error(step, e))?;
        if !body.success {
            return Err(rejected(step, body.error));
        }
        Ok(VideoJobStatus {
            status: body
                .status
                .ok_or_else(|| ClientError::Transport("video_status: missing status in response".to_string()))?,
            progress: body.progress,
            video_url: body.video_url.map(|u| resolve_media_url(&self.base_url, &u)),
        })
    }
}
