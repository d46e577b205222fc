//! CLI argument parsing tests

use clap::Parser;
use clipsmith::cli::{Cli, Commands, ConfigCommands};

#[test]
fn test_generate_with_all_flags() {
    let cli = Cli::try_parse_from([
        "clipsmith",
        "generate",
        "مرحبا بالعالم",
        "--dialect",
        "egyptian",
        "--voice",
        "female1",
        "--format",
        "json",
        "--non-interactive",
    ])
    .unwrap();

    match cli.command {
        Commands::Generate {
            text,
            dialect,
            voice,
            format,
            non_interactive,
        } => {
            assert_eq!(text.as_deref(), Some("مرحبا بالعالم"));
            assert_eq!(dialect.as_deref(), Some("egyptian"));
            assert_eq!(voice.as_deref(), Some("female1"));
            assert_eq!(format, "json");
            assert!(non_interactive);
        }
        _ => panic!("expected generate command"),
    }
}

#[test]
fn test_generate_text_is_optional() {
    let cli = Cli::try_parse_from(["clipsmith", "generate"]).unwrap();
    match cli.command {
        Commands::Generate {
            text,
            non_interactive,
            ..
        } => {
            assert!(text.is_none());
            assert!(!non_interactive);
        }
        _ => panic!("expected generate command"),
    }
}

#[test]
fn test_global_flags_before_subcommand() {
    let cli = Cli::try_parse_from([
        "clipsmith",
        "--service-url",
        "http://staging.example.com",
        "--verbose",
        "voices",
    ])
    .unwrap();
    assert_eq!(
        cli.service_url.as_deref(),
        Some("http://staging.example.com")
    );
    assert!(cli.verbose);
    assert!(matches!(cli.command, Commands::Voices { .. }));
}

#[test]
fn test_status_requires_job_id() {
    assert!(Cli::try_parse_from(["clipsmith", "status"]).is_err());

    let cli = Cli::try_parse_from(["clipsmith", "status", "job-42"]).unwrap();
    match cli.command {
        Commands::Status { job_id, format } => {
            assert_eq!(job_id, "job-42");
            assert_eq!(format, "text");
        }
        _ => panic!("expected status command"),
    }
}

#[test]
fn test_config_subcommands() {
    let cli = Cli::try_parse_from(["clipsmith", "config", "init", "--force"]).unwrap();
    match cli.command {
        Commands::Config {
            command: ConfigCommands::Init { force, workspace },
        } => {
            assert!(force);
            assert!(!workspace);
        }
        _ => panic!("expected config init"),
    }

    let cli = Cli::try_parse_from(["clipsmith", "config", "show", "--format", "json"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Config {
            command: ConfigCommands::Show { .. }
        }
    ));
}

#[test]
fn test_unknown_subcommand_rejected() {
    assert!(Cli::try_parse_from(["clipsmith", "render"]).is_err());
}
