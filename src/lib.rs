//! Clipsmith: Text-to-Video Generation Client
//!
//! A client for a remote Arabic text-to-video generation service. A single
//! run walks three remote steps in order: create a project, synthesize a
//! preview of the narration audio, and render the final video.

pub mod catalog;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod generation;
pub mod logging;
pub mod session;
