//! Application layer for Keel.
//!
//! This layer contains:
//! - **Use cases**: One operation each (GetHelloUseCase, GetStatusUseCase)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business rules itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod use_cases;

// Re-export main use cases
pub use use_cases::{
    GetHelloUseCase,
    GetStatusUseCase,
    StatusReport, // DTO for the operational endpoint
};

// Re-export port traits (for adapter implementation)
pub use ports::{Clock, ProductRepository, UserRepository};

pub use error::ApplicationError;
