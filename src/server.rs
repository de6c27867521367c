use axum::{Router, extract::DefaultBodyLimit};
use std::sync::Arc;

use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use tracing::info;

use crate::AppState;
use crate::api;
use crate::config::AppConfig;
use crate::security::{rate_limit, timeout};

/// Largest accepted request body. Every form on the site is tiny.
const BODY_LIMIT: usize = 64 * 1024;

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let state = AppState::new(Arc::clone(&config));

    state.sessions.spawn_sweeper(
        config.session.idle_timeout(),
        config.session.sweep_interval(),
    );
    info!(
        name: "session.sweeper.started",
        idle_timeout_secs = config.session.idle_timeout_secs,
        sweep_interval_secs = config.session.sweep_interval_secs,
        "Idle session sweeper started"
    );

    let app = build_app(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        rate_limit = config.resilience.rate_limit_enabled,
        timeout_disabled = config.resilience.timeout_disabled,
        "Server started"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

/// Routes plus middleware, ready to serve.
pub fn build_app(state: AppState) -> Router {
    let static_dir = ServeDir::new(&state.config.server.static_dir);

    api::router()
        .nest_service("/static", static_dir)
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            timeout::timeout_middleware,
        ))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            rate_limit::rate_limit_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
