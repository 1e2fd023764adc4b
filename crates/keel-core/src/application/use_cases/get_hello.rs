//! Get Hello - the template's entire business surface.
//!
//! Deliberately the smallest possible use case: no inputs, no ports, no
//! errors. It exists so the call chain
//! `handler → use case → response` is demonstrated with zero noise around
//! it. New use cases start as a copy of this file and grow ports as needed.

use tracing::{debug, instrument};

/// The canonical greeting.
const GREETING: &str = "Hello World!";

/// Returns a fixed greeting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetHelloUseCase;

impl GetHelloUseCase {
    /// Create the use case. Takes no dependencies.
    pub const fn new() -> Self {
        Self
    }

    /// Produce the greeting. Cannot fail and has no side effects.
    #[instrument(skip(self))]
    pub fn execute(&self) -> &'static str {
        debug!("serving greeting");
        GREETING
    }
}
