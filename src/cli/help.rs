//! CLI help: stable command names for logging.

use crate::cli::parse::{Commands, ConfigCommands};

/// Stable name for a command, used as the log span field.
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Generate { .. } => "generate",
        Commands::Dialects { .. } => "dialects",
        Commands::Voices { .. } => "voices",
        Commands::Projects { .. } => "projects",
        Commands::Status { .. } => "status",
        Commands::Config { command } => match command {
            ConfigCommands::Init { .. } => "config.init",
            ConfigCommands::Show { .. } => "config.show",
        },
    }
}
