//! CLI route: single route table and run context. Dispatches to the
//! generation runner, the service client, and presentation.

use crate::catalog::{Dialect, Voice};
use crate::cli::parse::{Commands, ConfigCommands};
use crate::cli::{command_name, map_error};
use crate::client::{HttpVideoServiceClient, VideoServiceClient};
use crate::config::{ClipsmithConfig, ConfigLoader};
use crate::error::ClientError;
use crate::generation::GenerationRunner;
use crate::session::GenerationSession;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

/// Runtime context for CLI execution: effective configuration and workspace
/// root. Built from the global flags using ConfigLoader only.
pub struct RunContext {
    config: ClipsmithConfig,
    workspace_root: PathBuf,
}

impl RunContext {
    /// Create run context from workspace root, optional config path, and an
    /// optional service URL override. The override wins over every file.
    pub fn new(
        workspace_root: PathBuf,
        config_path: Option<PathBuf>,
        service_url: Option<String>,
    ) -> Result<Self, ClientError> {
        let mut config = if let Some(ref path) = config_path {
            ConfigLoader::load_from_file(path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };
        if let Some(url) = service_url {
            config.service.base_url = url;
        }
        config.validate().map_err(ClientError::ConfigError)?;
        Ok(Self {
            config,
            workspace_root,
        })
    }

    pub fn config(&self) -> &ClipsmithConfig {
        &self.config
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, ClientError> {
        info!(command = command_name(command), "Executing command");
        match command {
            Commands::Generate {
                text,
                dialect,
                voice,
                format,
                non_interactive,
            } => self.handle_generate(
                text.as_deref(),
                dialect.as_deref(),
                voice.as_deref(),
                format,
                *non_interactive,
            ),
            Commands::Dialects { format } => Ok(match format.as_str() {
                "json" => super::format_dialects_json(),
                _ => super::format_dialects_text(),
            }),
            Commands::Voices { format } => Ok(match format.as_str() {
                "json" => super::format_voices_json(),
                _ => super::format_voices_text(),
            }),
            Commands::Projects { format } => self.handle_projects(format),
            Commands::Status { job_id, format } => self.handle_status(job_id, format),
            Commands::Config { command } => self.handle_config_command(command),
        }
    }

    fn handle_generate(
        &self,
        text: Option<&str>,
        dialect: Option<&str>,
        voice: Option<&str>,
        format: &str,
        non_interactive: bool,
    ) -> Result<String, ClientError> {
        let dialect = self.resolve_dialect(dialect, non_interactive)?;
        let voice = self.resolve_voice(voice, non_interactive)?;
        let text = self.resolve_text(text, non_interactive)?;

        let mut session = GenerationSession::new(&text, dialect, voice)?;
        let client = HttpVideoServiceClient::new(&self.config.service)?;
        let runner = GenerationRunner::new(Arc::new(client) as Arc<dyn VideoServiceClient>);

        let runtime = tokio::runtime::Runtime::new()
            .map_err(|e| ClientError::Transport(format!("Failed to start runtime: {}", e)))?;
        let result = runtime.block_on(runner.run(&mut session));

        match result {
            Ok(_) => Ok(render_generation_report(&session, None, format)),
            // A preview that came back before the failure is still worth
            // showing; the error rides along as a warning.
            Err(e) if session.audio_url.is_some() => {
                Ok(render_generation_report(&session, Some(&map_error(&e)), format))
            }
            Err(e) => Err(e),
        }
    }

    fn handle_projects(&self, format: &str) -> Result<String, ClientError> {
        let client = HttpVideoServiceClient::new(&self.config.service)?;
        let runtime = tokio::runtime::Runtime::new()
            .map_err(|e| ClientError::Transport(format!("Failed to start runtime: {}", e)))?;
        let projects = runtime.block_on(client.list_projects())?;
        Ok(match format {
            "json" => super::format_projects_json(&projects),
            _ => super::format_projects_text(&projects),
        })
    }

    fn handle_status(&self, job_id: &str, format: &str) -> Result<String, ClientError> {
        if job_id.trim().is_empty() {
            return Err(ClientError::InvalidInput("Job id cannot be empty".to_string()));
        }
        let client = HttpVideoServiceClient::new(&self.config.service)?;
        let runtime = tokio::runtime::Runtime::new()
            .map_err(|e| ClientError::Transport(format!("Failed to start runtime: {}", e)))?;
        let status = runtime.block_on(client.video_status(job_id))?;
        Ok(match format {
            "json" => super::format_status_json(job_id, &status),
            _ => super::format_status_text(job_id, &status),
        })
    }

    fn resolve_dialect(
        &self,
        dialect: Option<&str>,
        non_interactive: bool,
    ) -> Result<Dialect, ClientError> {
        if let Some(code) = dialect {
            return Dialect::from_str(code);
        }
        if non_interactive {
            return Err(ClientError::InvalidInput(
                "Dialect is required in non-interactive mode. Use --dialect <code>".to_string(),
            ));
        }
        use dialoguer::Select;
        let dialects = Dialect::all();
        let items: Vec<String> = dialects
            .iter()
            .map(|d| format!("{} ({})", d.label(), d.code()))
            .collect();
        let selection = Select::new()
            .with_prompt("Dialect")
            .items(&items)
            .default(0)
            .interact()
            .map_err(|e| ClientError::InvalidInput(format!("Failed to get user input: {}", e)))?;
        Ok(dialects[selection])
    }

    fn resolve_voice(
        &self,
        voice: Option<&str>,
        non_interactive: bool,
    ) -> Result<Voice, ClientError> {
        if let Some(id) = voice {
            return Voice::from_str(id);
        }
        if non_interactive {
            return Err(ClientError::InvalidInput(
                "Voice is required in non-interactive mode. Use --voice <id>".to_string(),
            ));
        }
        use dialoguer::Select;
        let voices = Voice::all();
        let items: Vec<String> = voices
            .iter()
            .map(|v| format!("{} ({})", v.name(), v.id()))
            .collect();
        let selection = Select::new()
            .with_prompt("Voice")
            .items(&items)
            .default(0)
            .interact()
            .map_err(|e| ClientError::InvalidInput(format!("Failed to get user input: {}", e)))?;
        Ok(voices[selection])
    }

    fn resolve_text(
        &self,
        text: Option<&str>,
        non_interactive: bool,
    ) -> Result<String, ClientError> {
        if let Some(t) = text {
            return Ok(t.to_string());
        }
        if non_interactive {
            return Err(ClientError::InvalidInput(
                "Text is required in non-interactive mode. Pass it as an argument".to_string(),
            ));
        }
        use dialoguer::Input;
        let input: String = Input::new()
            .with_prompt("Text to narrate")
            .interact_text()
            .map_err(|e| ClientError::InvalidInput(format!("Failed to get user input: {}", e)))?;
        Ok(input)
    }

    fn handle_config_command(&self, command: &ConfigCommands) -> Result<String, ClientError> {
        match command {
            ConfigCommands::Init { force, workspace } => self.handle_config_init(*force, *workspace),
            ConfigCommands::Show { format } => match format.as_str() {
                "json" => serde_json::to_string_pretty(&self.config)
                    .map_err(|e| ClientError::ConfigError(e.to_string())),
                _ => toml::to_string_pretty(&self.config)
                    .map_err(|e| ClientError::ConfigError(e.to_string())),
            },
        }
    }

    fn handle_config_init(&self, force: bool, workspace: bool) -> Result<String, ClientError> {
        let path = if workspace {
            self.workspace_root.join("config").join("config.toml")
        } else {
            ConfigLoader::global_config_path().ok_or_else(|| {
                ClientError::ConfigError(
                    "Could not determine the global config directory".to_string(),
                )
            })?
        };

        if path.exists() && !force {
            return Err(ClientError::ConfigError(format!(
                "Config file already exists: {}. Use --force to overwrite",
                path.display()
            )));
        }

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ClientError::ConfigError(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(&ClipsmithConfig::default())
            .map_err(|e| ClientError::ConfigError(e.to_string()))?;
        std::fs::write(&path, content)
            .map_err(|e| ClientError::ConfigError(format!("Failed to write config: {}", e)))?;

        Ok(format!("Config file written: {}", path.display()))
    }
}

fn render_generation_report(
    session: &GenerationSession,
    failure: Option<&str>,
    format: &str,
) -> String {
    match format {
        "json" => super::format_generation_report_json(session, failure),
        _ => super::format_generation_report_text(session, failure),
    }
}
