//! Application use cases - one operation each.
//!
//! Use cases coordinate the domain layer and ports to accomplish a single
//! caller-visible operation. The HTTP layer holds them in shared state and
//! calls `execute()`.

pub mod get_hello;
pub mod get_status;

pub use get_hello::GetHelloUseCase;
pub use get_status::{GetStatusUseCase, StatusReport};
