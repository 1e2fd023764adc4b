//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `keel-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `UserRepository` / `ProductRepository`: Entity storage contracts
//!   - `Clock`: Current-time source
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (The use case structs themselves; the HTTP layer calls them directly)

pub mod output;

pub use output::{Clock, ProductRepository, UserRepository};
