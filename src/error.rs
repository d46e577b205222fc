//! Error types for the text-to-video generation client.

use thiserror::Error;

/// Remote calls the client performs. The first three form a generation run,
/// in order; the rest are standalone queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStep {
    CreateProject,
    SynthesizePreview,
    GenerateVideo,
    ListProjects,
    PollStatus,
}

impl GenerationStep {
    /// Stable slug used in logs and JSON output.
    pub fn slug(&self) -> &'static str {
        match self {
            GenerationStep::CreateProject => "create_project",
            GenerationStep::SynthesizePreview => "tts_preview",
            GenerationStep::GenerateVideo => "video_generate",
            GenerationStep::ListProjects => "list_projects",
            GenerationStep::PollStatus => "video_status",
        }
    }

    /// Human-readable step name for error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            GenerationStep::CreateProject => "creating project",
            GenerationStep::SynthesizePreview => "synthesizing preview audio",
            GenerationStep::GenerateVideo => "generating video",
            GenerationStep::ListProjects => "listing projects",
            GenerationStep::PollStatus => "polling job status",
        }
    }
}

impl std::fmt::Display for GenerationStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

/// Client-side errors for the generation pipeline and CLI.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The service answered with a well-formed `{success: false, error}` body.
    /// The message is the service's own and is shown verbatim.
    #[error("Service rejected {}: {message}", step.describe())]
    ServiceRejected {
        step: GenerationStep,
        message: String,
    },

    /// Network failure or an unparseable response. The raw detail goes to the
    /// logs; the CLI surfaces a generic connectivity message instead.
    #[error("Connection to generation service failed: {0}")]
    Transport(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown dialect: {0}")]
    UnknownDialect(String),

    #[error("Unknown voice: {0}")]
    UnknownVoice(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for ClientError {
    fn from(err: config::ConfigError) -> Self {
        ClientError::ConfigError(err.to_string())
    }
}
