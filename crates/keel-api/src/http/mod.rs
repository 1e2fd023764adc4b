//! HTTP surface
//!
//! One router, two routes, one fallback. Handlers stay thin: extract, call
//! the use case, shape the response. Anything thicker belongs in
//! `keel-core::application`.
//!
//! | Method | Path       | Handler                    |
//! |--------|------------|----------------------------|
//! | GET    | `/`        | [`hello::hello_handler`]   |
//! | GET    | `/healthz` | [`health::healthz_handler`] |
//! | *      | anything   | JSON 404 envelope          |

use axum::http::Uri;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

use crate::error::ApiError;
use crate::state::AppState;

pub mod health;
pub mod hello;

/// Build the application router over the shared state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(hello::hello_handler))
        .route("/healthz", get(health::healthz_handler))
        .fallback(fallback_handler)
        .with_state(state)
}

/// Unmatched paths get the standard error envelope instead of an empty body.
async fn fallback_handler(uri: Uri) -> ApiError {
    ApiError::NotFound {
        path: uri.path().to_string(),
    }
}
