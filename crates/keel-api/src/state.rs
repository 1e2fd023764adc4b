//! Shared application state
//!
//! The composition root: concrete adapters are chosen here and injected into
//! the use cases. Handlers receive the wired state as `Arc<AppState>`; nothing
//! below this module knows which adapters were picked.

use keel_adapters::SystemClock;
use keel_core::application::{GetHelloUseCase, GetStatusUseCase};

/// Use cases wired with their production adapters
pub struct AppState {
    pub hello: GetHelloUseCase,
    pub status: GetStatusUseCase,
}

impl AppState {
    /// Wire the use cases with production adapters.
    pub fn new() -> Self {
        Self {
            hello: GetHelloUseCase::new(),
            status: GetStatusUseCase::new(Box::new(SystemClock::new()), crate::VERSION),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
