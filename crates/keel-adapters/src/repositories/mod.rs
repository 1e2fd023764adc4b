//! Repository adapters.
//!
//! One module per storage technology. `memory` is the only one shipped;
//! a real database module would sit beside it and implement the same ports.

pub mod memory;

pub use memory::{InMemoryProductRepository, InMemoryUserRepository};
