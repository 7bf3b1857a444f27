//! Combinators for composing validators
//!
//! - [`And`]: both must pass, first failure wins
//! - [`AllOf`]: every validator runs, all failures reported together
//! - [`WithMessage`]: replace the user-facing message
//! - [`Field`]: lift a field validator onto a record

pub mod and;
pub mod field;
pub mod message;

pub use and::{AllOf, And, all_of, and};
pub use field::Field;
pub use message::{WithMessage, with_message};
