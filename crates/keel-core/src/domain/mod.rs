// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Keel.
//!
//! This module contains pure business types with ZERO external concerns.
//! All I/O, persistence, and HTTP concerns are handled via ports (traits)
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or clock calls
//! - **No framework types**: Only std + serde derives + thiserror
//! - **Immutable by default**: All domain objects are Clone + PartialEq
//! - **Validate on construction**: Invariants hold for the entity's lifetime
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{product::Product, user::User};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{EmailAddress, Price, ProductId, UserId};
