//! Response DTOs for the generator API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::generator::{FileSet, Project};

/// Response body for a successful generation (POST /generate)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    /// The extracted source artifacts
    pub files: FileSet,
    /// Identifier of the materialized project
    pub project_id: String,
    /// Filesystem path of the project directory
    pub project_path: String,
    /// URL the generated site is served under
    pub download_url: String,
    /// True when the completion was served from the cache
    pub cached: bool,
}

impl GenerateResponse {
    /// Creates a response from the pipeline outputs.
    pub fn new(files: FileSet, project: &Project, cached: bool) -> Self {
        Self {
            files,
            project_id: project.id.clone(),
            project_path: project.path.display().to_string(),
            download_url: format!("/sites/{}/index.html", project.id),
            cached,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of generations served from the cache
    pub hits: u64,
    /// Number of cache lookups that missed
    pub misses: u64,
    /// Number of cache entries removed after expiry
    pub expired: u64,
    /// Current number of cached completions
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
    /// Number of client identities currently rate-tracked
    pub tracked_clients: usize,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics.
    pub fn new(
        hits: u64,
        misses: u64,
        expired: u64,
        total_entries: usize,
        tracked_clients: usize,
    ) -> Self {
        let total_lookups = hits + misses;
        let hit_rate = if total_lookups > 0 {
            hits as f64 / total_lookups as f64
        } else {
            0.0
        };
        Self {
            hits,
            misses,
            expired,
            total_entries,
            hit_rate,
            tracked_clients,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Response body for cache clearing (DELETE /cache)
#[derive(Debug, Clone, Serialize)]
pub struct ClearCacheResponse {
    /// Confirmation message
    pub message: String,
    /// Number of entries removed
    pub removed: usize,
}

impl ClearCacheResponse {
    /// Creates a new ClearCacheResponse
    pub fn new(removed: usize) -> Self {
        Self {
            message: "Response cache cleared".to_string(),
            removed,
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
