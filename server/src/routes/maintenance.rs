//! Maintenance-mode gate.
//!
//! When `MAINTENANCE_MODE` is on, page requests are redirected to the
//! maintenance placeholder. API, asset, and health routes stay reachable so
//! the placeholder itself can load and probes keep passing.

use axum::extract::{Request, State};
use axum::http::Method;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use client::app::MAINTENANCE_PATH;

use crate::state::AppState;

const PASSTHROUGH_PREFIXES: &[&str] = &["/api/", "/pkg/"];
const PASSTHROUGH_PATHS: &[&str] = &[MAINTENANCE_PATH, "/healthz", "/favicon.ico"];

/// Whether a page request for `path` should be sent to the placeholder.
pub(crate) fn should_redirect(path: &str) -> bool {
    !(PASSTHROUGH_PATHS.contains(&path) || PASSTHROUGH_PREFIXES.iter().any(|prefix| path.starts_with(prefix)))
}

pub async fn maintenance_gate(State(state): State<AppState>, req: Request, next: Next) -> Response {
    if state.config.maintenance_mode && req.method() == Method::GET && should_redirect(req.uri().path()) {
        tracing::debug!(path = req.uri().path(), "maintenance redirect");
        return Redirect::temporary(MAINTENANCE_PATH).into_response();
    }
    next.run(req).await
}

#[cfg(test)]
#[path = "maintenance_test.rs"]
mod tests;
