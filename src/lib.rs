//! SiteForge - An AI-assisted website generator server
//!
//! Turns structured form input into a generation prompt, parses the model's
//! reply into discrete source artifacts, and materializes them as a project
//! directory on disk.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod generator;
pub mod limiter;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
