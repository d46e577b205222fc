//! CLI domain: parse, route, help, output, and presentation only.
//! No orchestration logic; the route table dispatches to the generation runner.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{Cli, Commands, ConfigCommands};
pub use presentation::{
    format_dialects_json, format_dialects_text, format_generation_report_json,
    format_generation_report_text, format_projects_json, format_projects_text,
    format_status_json, format_status_text, format_voices_json, format_voices_text,
};
pub use route::RunContext;
