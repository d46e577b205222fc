//! CLI presentation: text/json rendering of sessions, catalogs, and listings.

use crate::catalog::{Dialect, Voice, VoiceGender};
use crate::client::{Project, VideoJobStatus};
use crate::session::GenerationSession;
use comfy_table::{presets::UTF8_FULL, Table};
use owo_colors::OwoColorize;
use serde_json::json;

/// Render the outcome of a generation run.
///
/// The most recent available artifact wins: video when all steps succeeded,
/// audio when only the preview came back. A failure message for the video
/// step is shown alongside the retained audio.
pub fn format_generation_report_text(
    session: &GenerationSession,
    failure: Option<&str>,
) -> String {
    let mut output = String::new();
    if let Some(project_id) = &session.project_id {
        output.push_str(&format!("Project: {}\n", project_id));
    }
    match (&session.video_url, &session.audio_url) {
        (Some(video), Some(audio)) => {
            output.push_str(&format!("{} {}\n", "Video:".green().bold(), video));
            output.push_str(&format!("Audio preview: {}\n", audio));
        }
        (None, Some(audio)) => {
            output.push_str(&format!("{} {}\n", "Audio preview:".green().bold(), audio));
            if let Some(job_id) = &session.job_id {
                output.push_str(&format!("{} {}\n", "Video job queued:".green().bold(), job_id));
                output.push_str(&format!(
                    "Check progress with: clipsmith status {}\n",
                    job_id
                ));
            } else {
                output.push_str("Video: (not generated)\n");
            }
        }
        _ => {
            output.push_str("No artifacts were generated.\n");
        }
    }
    if let Some(message) = failure {
        output.push_str(&format!("{} {}\n", "Warning:".yellow().bold(), message));
    }
    output
}

pub fn format_generation_report_json(
    session: &GenerationSession,
    failure: Option<&str>,
) -> String {
    let out = json!({
        "project_id": session.project_id,
        "audio_url": session.audio_url,
        "video_url": session.video_url,
        "job_id": session.job_id,
        "artifact": session.display_artifact(),
        "error": failure,
    });
    serde_json::to_string_pretty(&out).unwrap_or_else(|_| "{}".to_string())
}

pub fn format_dialects_text() -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Code", "Label", "Description"]);
    for dialect in Dialect::all() {
        table.add_row(vec![dialect.code(), dialect.label(), dialect.description()]);
    }
    format!("Supported dialects:\n{}\n", table)
}

pub fn format_dialects_json() -> String {
    let dialects: Vec<_> = Dialect::all()
        .iter()
        .map(|d| {
            json!({
                "code": d.code(),
                "label": d.label(),
                "description": d.description(),
            })
        })
        .collect();
    let out = json!({ "dialects": dialects, "total": dialects.len() });
    serde_json::to_string_pretty(&out).unwrap_or_else(|_| "{}".to_string())
}

pub fn format_voices_text() -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Id", "Name", "Gender", "Dialect", "Description"]);
    for voice in Voice::all() {
        let gender = match voice.gender() {
            VoiceGender::Male => "male",
            VoiceGender::Female => "female",
        };
        table.add_row(vec![
            voice.id(),
            voice.name(),
            gender,
            voice.native_dialect().code(),
            voice.description(),
        ]);
    }
    format!("Available voices:\n{}\n", table)
}

pub fn format_voices_json() -> String {
    let voices: Vec<_> = Voice::all()
        .iter()
        .map(|v| {
            json!({
                "id": v.id(),
                "name": v.name(),
                "gender": v.gender(),
                "dialect": v.native_dialect().code(),
                "description": v.description(),
            })
        })
        .collect();
    let out = json!({ "voices": voices, "total": voices.len() });
    serde_json::to_string_pretty(&out).unwrap_or_else(|_| "{}".to_string())
}

pub fn format_projects_text(projects: &[Project]) -> String {
    if projects.is_empty() {
        return "No projects found on the service.".to_string();
    }
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Id", "Status", "Dialect", "Voice", "Text"]);
    for project in projects {
        let text = project.text.as_deref().unwrap_or("");
        let preview: String = if text.chars().count() > 40 {
            let mut t: String = text.chars().take(40).collect();
            t.push('…');
            t
        } else {
            text.to_string()
        };
        table.add_row(vec![
            project.id.as_str(),
            project.status.as_deref().unwrap_or("-"),
            project.dialect.as_deref().unwrap_or("-"),
            project.voice.as_deref().unwrap_or("-"),
            preview.as_str(),
        ]);
    }
    format!("Projects:\n{}\n\nTotal: {} project(s)\n", table, projects.len())
}

pub fn format_projects_json(projects: &[Project]) -> String {
    let out = json!({ "projects": projects, "total": projects.len() });
    serde_json::to_string_pretty(&out).unwrap_or_else(|_| "{}".to_string())
}

pub fn format_status_text(job_id: &str, status: &VideoJobStatus) -> String {
    let mut output = format!("Job: {}\n", job_id);
    if status.status == "completed" {
        output.push_str(&format!("Status: {}\n", status.status.green().bold()));
    } else {
        output.push_str(&format!("Status: {}\n", status.status));
    }
    if let Some(progress) = status.progress {
        output.push_str(&format!("Progress: {}%\n", progress));
    }
    if let Some(video_url) = &status.video_url {
        output.push_str(&format!("Video: {}\n", video_url));
    }
    output
}

pub fn format_status_json(job_id: &str, status: &VideoJobStatus) -> String {
    let out = json!({
        "job_id": job_id,
        "status": status.status,
        "progress": status.progress,
        "video_url": status.video_url,
    });
    serde_json::to_string_pretty(&out).unwrap_or_else(|_| "{}".to_string())
}
