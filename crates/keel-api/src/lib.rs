//! Keel API - presentation layer.
//!
//! Everything HTTP-shaped lives in this crate: argument parsing, config,
//! logging setup, the axum router, and the server loop. The binary in
//! `main.rs` is a thin startup sequence over these modules, which keeps the
//! router reachable from integration tests.
//!
//! ```text
//! request ──▶ http::router ──▶ handler ──▶ use case (keel-core)
//!                                  │
//!                                  └──▶ ApiError ──▶ JSON envelope
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod server;
pub mod state;

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
