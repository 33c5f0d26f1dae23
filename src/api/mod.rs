//! API Module
//!
//! HTTP handlers and routing for the generator server REST API.
//!
//! # Endpoints
//! - `POST /generate` - Generate a website from form data
//! - `GET /stats` - Completion-cache statistics
//! - `DELETE /cache` - Clear the completion cache
//! - `GET /health` - Health check endpoint
//! - `GET /sites/*` - Static serving of materialized projects

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
