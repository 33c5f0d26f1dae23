//! API Handlers
//!
//! HTTP request handlers for each generator server endpoint. The generate
//! handler drives the pipeline end to end: admission check, cache lookup,
//! upstream completion, parsing and materialization.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{ConnectInfo, State},
    http::HeaderMap,
    Json,
};
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::cache::ResponseCache;
use crate::config::Config;
use crate::error::{GeneratorError, Result};
use crate::generator::{
    build_prompt, parse_response, CompletionClient, OpenAiClient, ProjectMaterializer,
    SYSTEM_INSTRUCTION,
};
use crate::limiter::RateLimiter;
use crate::models::{
    ClearCacheResponse, GenerateRequest, GenerateResponse, HealthResponse, StatsResponse,
};

/// Application state shared across all handlers.
///
/// Cache and rate limiter are process-wide shared state behind RwLock; the
/// materializer coordinates through its own atomic identifier allocation and
/// needs no lock.
#[derive(Clone)]
pub struct AppState {
    /// Completion cache keyed by request fingerprint
    pub cache: Arc<RwLock<ResponseCache>>,
    /// Per-client sliding-window admission control
    pub limiter: Arc<RwLock<RateLimiter>>,
    /// Project directory writer
    pub materializer: Arc<ProjectMaterializer>,
    /// Upstream completion dependency
    pub client: Arc<dyn CompletionClient>,
}

impl AppState {
    /// Creates a new AppState with the given upstream client.
    ///
    /// Taking the client explicitly keeps the upstream boundary injectable
    /// for tests.
    pub fn new(client: Arc<dyn CompletionClient>, config: &Config) -> Self {
        Self {
            cache: Arc::new(RwLock::new(ResponseCache::new(config.cache_ttl * 1000))),
            limiter: Arc::new(RwLock::new(RateLimiter::new(
                config.rate_limit,
                config.rate_window * 1000,
            ))),
            materializer: Arc::new(ProjectMaterializer::new(config.sites_root.clone())),
            client,
        }
    }

    /// Creates a new AppState from configuration, wiring the OpenAI client.
    pub fn from_config(config: &Config) -> Self {
        Self::new(Arc::new(OpenAiClient::from_config(config)), config)
    }
}

/// Handler for POST /generate
///
/// Runs the full pipeline: validation, rate admission, cache lookup or
/// upstream completion, section parsing, and project materialization. A
/// cache hit skips the upstream call but still materializes a fresh project
/// directory.
pub async fn generate_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>> {
    // Validate before anything reaches the model
    if let Some(error_msg) = request.validate() {
        return Err(GeneratorError::InvalidRequest(error_msg));
    }

    let identity = client_identity(&headers, connect_info.map(|ConnectInfo(addr)| addr));
    {
        let mut limiter = state.limiter.write().await;
        if !limiter.admit(&identity) {
            warn!("Rate limit exceeded for {}", identity);
            return Err(GeneratorError::RateLimitExceeded(identity));
        }
    }

    // The cache short-circuits the upstream call for a known fingerprint
    let fingerprint = request.fingerprint();
    let cached = {
        let mut cache = state.cache.write().await;
        cache.get(&fingerprint)
    };

    let (raw, from_cache) = match cached {
        Some(text) => (text, true),
        None => {
            let prompt = build_prompt(&request);
            let text = state.client.complete(SYSTEM_INSTRUCTION, &prompt).await?;
            let mut cache = state.cache.write().await;
            cache.set(fingerprint, text.clone(), None);
            (text, false)
        }
    };

    let files = parse_response(&raw);
    let project = state.materializer.materialize(&files).await?;

    info!(
        "Generated project {} for {} (cached: {})",
        project.id, identity, from_cache
    );

    Ok(Json(GenerateResponse::new(files, &project, from_cache)))
}

/// Handler for GET /stats
///
/// Returns completion-cache statistics and the rate-tracked client count.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = {
        let cache = state.cache.read().await;
        cache.stats()
    };
    let tracked_clients = {
        let limiter = state.limiter.read().await;
        limiter.tracked_identities()
    };

    Json(StatsResponse::new(
        stats.hits,
        stats.misses,
        stats.expired,
        stats.total_entries,
        tracked_clients,
    ))
}

/// Handler for DELETE /cache
///
/// Clears the completion cache.
pub async fn clear_cache_handler(State(state): State<AppState>) -> Json<ClearCacheResponse> {
    let mut cache = state.cache.write().await;
    let removed = cache.len();
    cache.clear();

    info!("Cleared {} cached completions", removed);
    Json(ClearCacheResponse::new(removed))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

// == Client Identity ==
/// Derives the rate-limiting identity from transport metadata.
///
/// First X-Forwarded-For hop when present, else the peer socket address.
fn client_identity(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .or_else(|| peer.map(|addr| addr.ip().to_string()))
        .unwrap_or_else(|| "unknown".to_string())
}
