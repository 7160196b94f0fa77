//! Application setup and server configuration.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::kernel::ServerDeps;
use crate::server::routes::{
    appeal_summary_handler, content_analytics_handler, detailed_stats_handler, health_handler,
    list_schools_handler, normalize_school_handler, school_stats_handler,
    user_performance_handler,
};
use crate::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub server_deps: Arc<ServerDeps>,
}

/// HTTP-level settings taken from `Config`
#[derive(Debug, Clone)]
pub struct AppOptions {
    /// Empty means any origin
    pub allowed_origins: Vec<String>,
    pub rate_limit_per_second: u64,
    pub rate_limit_burst: u32,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            allowed_origins: Vec::new(),
            rate_limit_per_second: 1,
            rate_limit_burst: 30,
        }
    }
}

impl From<&Config> for AppOptions {
    fn from(config: &Config) -> Self {
        Self {
            allowed_origins: config.allowed_origins.clone(),
            rate_limit_per_second: config.rate_limit_per_second,
            rate_limit_burst: config.rate_limit_burst,
        }
    }
}

fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer> {
    let allow_origin = if allowed_origins.is_empty() {
        AllowOrigin::any()
    } else {
        let origins = allowed_origins
            .iter()
            .map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .with_context(|| format!("Invalid allowed origin: {}", origin))
            })
            .collect::<Result<Vec<_>>>()?;
        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET])
        .allow_headers([CONTENT_TYPE]))
}

/// Build the Axum application router
///
/// `/api/*` routes are rate limited per client IP; `/health` is not.
pub fn build_app(server_deps: Arc<ServerDeps>, options: &AppOptions) -> Result<Router> {
    let app_state = AppState { server_deps };

    // Client IP comes from X-Forwarded-For / X-Real-IP, falling back to the peer address
    let rate_limit_config = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(options.rate_limit_per_second)
            .burst_size(options.rate_limit_burst)
            .key_extractor(SmartIpKeyExtractor)
            .use_headers()
            .finish()
            .context("Rate limit must be positive")?,
    );

    let rate_limit_layer = GovernorLayer {
        config: rate_limit_config,
    };

    let api = Router::new()
        .route("/api/appeals/stats/summary", get(appeal_summary_handler))
        .route("/api/appeals/stats/detailed", get(detailed_stats_handler))
        .route("/api/appeals/stats/schools", get(school_stats_handler))
        .route(
            "/api/users/:user_id/performance",
            get(user_performance_handler),
        )
        .route("/api/analytics/content", get(content_analytics_handler))
        .route("/api/schools", get(list_schools_handler))
        .route("/api/schools/normalize", get(normalize_school_handler))
        .layer(rate_limit_layer);

    let app = Router::new()
        // Health check (no rate limit)
        .route("/health", get(health_handler))
        .merge(api)
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(cors_layer(&options.allowed_origins)?)
        .layer(TraceLayer::new_for_http());

    Ok(app)
}
