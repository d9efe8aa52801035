//! Request handlers.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use serde_json::json;

use crate::live_reload::inject_reload_script;
use crate::state::AppState;

/// Serve the rendered changelog page.
///
/// Returns the cached page when the source has not changed since the last
/// render; otherwise reads the source file and renders it fresh. The page is
/// served with `Cache-Control: no-cache` so the browser always revalidates.
pub(crate) async fn get_page(State(state): State<Arc<AppState>>) -> Response {
    if let Some(page) = state.cached_page() {
        return page_response(page);
    }

    let markdown = match tokio::fs::read_to_string(&state.input).await {
        Ok(markdown) => markdown,
        Err(err) => {
            tracing::error!(path = %state.input.display(), error = %err, "failed to read changelog");
            return error_response(format!(
                "Could not read {}: {err}",
                state.input.display()
            ));
        }
    };

    let rendered = {
        let mut service = state.service.lock().await;
        service.render_html(&markdown)
    };

    match rendered {
        Ok(html) => {
            let page = inject_reload_script(&html);
            state.store_page(page.clone());
            tracing::debug!(bytes = page.len(), "rendered changelog page");
            page_response(page)
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to render changelog");
            error_response(err.user_message())
        }
    }
}

/// Poll endpoint for the injected reload script.
///
/// Reports whether the source changed since the previous poll; reading the
/// flag resets it.
pub(crate) async fn check_changed(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(json!({ "changed": state.take_changed() }))
}

pub(crate) async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "not found" })),
    )
        .into_response()
}

fn page_response(page: String) -> Response {
    ([(header::CACHE_CONTROL, "no-cache")], Html(page)).into_response()
}

fn error_response(message: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": message })),
    )
        .into_response()
}
