//! Infrastructure adapters for Keel.
//!
//! This crate implements the ports defined in `keel-core::application::ports`.
//! All technical detail lives out here so the inner layers stay free of it.
//!
//! The in-memory repositories are reference implementations: they satisfy
//! the port contracts, back the test suites, and show the shape a real
//! database adapter would take. Nothing here talks to an actual database.

pub mod clock;
pub mod repositories;

// Re-export commonly used adapters
pub use clock::{FixedClock, SystemClock};
pub use repositories::{InMemoryProductRepository, InMemoryUserRepository};
