//! Live-preview HTTP server for changelog pages.
//!
//! Serves the rendered changelog over HTTP and reloads connected browsers
//! when the source file changes on disk:
//!
//! - `GET /` and `GET /index.html` return the rendered page with a small
//!   polling script injected before `</body>`
//! - `GET /api/check` reports whether the source changed since the last poll
//! - everything else is a JSON 404
//!
//! Rendered pages are cached in memory and invalidated by a `notify` file
//! watcher, so repeated requests between edits cost nothing.

mod error;
mod handlers;
mod live_reload;
mod state;
mod watcher;

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use changelog::ChangelogService;

pub use error::{PreviewError, Result};
use state::AppState;

/// Preview server configuration.
#[derive(Clone, Debug)]
pub struct PreviewConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl PreviewConfig {
    /// Address the server will listen on, e.g. `http://127.0.0.1:3000`.
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

/// Run the preview server until interrupted.
///
/// Takes ownership of a configured [`ChangelogService`]; the service's input
/// path is the file served and watched.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the file watcher fails
/// to start.
pub async fn run_server(config: PreviewConfig, service: ChangelogService) -> Result<()> {
    let state = Arc::new(AppState::new(service));

    // Keep the watcher alive for the lifetime of the server.
    let _watcher = watcher::watch_input(Arc::clone(&state))?;

    let app = create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))
        .map_err(|err| {
            PreviewError::Bind(
                format!("{}:{}", config.host, config.port),
                std::io::Error::new(std::io::ErrorKind::InvalidInput, err),
            )
        })?;

    tracing::info!(address = %addr, "starting preview server");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|err| PreviewError::Bind(addr.to_string(), err))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(PreviewError::Serve)?;

    Ok(())
}

fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::get_page))
        .route("/index.html", get(handlers::get_page))
        .route("/api/check", get(handlers::check_changed))
        .fallback(handlers::not_found)
        .with_state(state)
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::warn!("failed to install Ctrl+C handler");
        return;
    }
    tracing::info!("shutdown signal received, stopping preview server");
}
