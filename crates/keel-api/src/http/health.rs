//! `GET /healthz` - liveness endpoint

use axum::extract::State;
use axum::Json;
use std::sync::Arc;
use tracing::instrument;

use keel_core::application::StatusReport;

use crate::state::AppState;

/// Report process liveness, version, and uptime as JSON.
#[instrument(skip_all)]
pub async fn healthz_handler(State(state): State<Arc<AppState>>) -> Json<StatusReport> {
    Json(state.status.execute())
}
