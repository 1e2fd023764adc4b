//! `GET /` - the greeting endpoint

use axum::extract::State;
use std::sync::Arc;
use tracing::instrument;

use crate::state::AppState;

/// Serve the greeting assembled by the application layer.
///
/// Infallible; axum renders the `&'static str` as `text/plain` with
/// status 200.
#[instrument(skip_all)]
pub async fn hello_handler(State(state): State<Arc<AppState>>) -> &'static str {
    state.hello.execute()
}
