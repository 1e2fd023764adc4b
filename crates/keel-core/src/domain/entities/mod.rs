pub mod product;
pub mod user;

pub use crate::domain::DomainError;
pub use product::Product;
pub use user::User;
