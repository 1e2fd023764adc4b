//! Keel Core - Clean Architecture Application Core
//!
//! This crate provides the domain and application layers for the Keel
//! web backend starter, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          keel-api (HTTP)                │
//! │     (Implements Driving Adapters)       │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Use Cases           │
//! │   (GetHelloUseCase, GetStatusUseCase)   │
//! │       One Operation Per Use Case        │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: Repositories, Clock)         │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    keel-adapters (Infrastructure)       │
//! │  (InMemoryUserRepository, SystemClock)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Domain Layer (Pure Logic)         │
//! │   (User, Product, EmailAddress, Price)  │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use keel_core::application::GetHelloUseCase;
//!
//! // 1. Construct the use case (no dependencies to inject)
//! let use_case = GetHelloUseCase::new();
//!
//! // 2. Execute it from a driving adapter (HTTP handler, test, ...)
//! assert_eq!(use_case.execute(), "Hello World!");
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GetHelloUseCase, GetStatusUseCase, StatusReport,
        ports::{Clock, ProductRepository, UserRepository},
    };
    pub use crate::domain::{
        EmailAddress, Price, Product, ProductId, User, UserId,
    };
    pub use crate::error::{CoreError, CoreResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
