//! # signup-validator
//!
//! A composable, type-safe validation toolkit for form input.
//!
//! ## Quick Start
//!
//! ```
//! use signup_validator::prelude::*;
//!
//! let name = not_empty().and(starts_with_uppercase());
//! assert!(name.validate("Alice").is_ok());
//! assert!(name.validate("alice").is_err());
//! ```
//!
//! ## Creating Validators
//!
//! Use the [`validator!`] macro for zero-boilerplate validators,
//! or implement [`Validate`](foundation::Validate) manually for complex cases.
//!
//! ## Built-in Validators
//!
//! - **String**: [`NotEmpty`](validators::NotEmpty),
//!   [`StartsWithUppercase`](validators::StartsWithUppercase),
//!   [`ContainsChar`](validators::ContainsChar), [`SimpleEmail`](validators::SimpleEmail),
//!   [`OneOf`](validators::OneOf)
//! - **Numeric**: [`Positive`](validators::Positive), [`Integral`](validators::Integral),
//!   [`Max`](validators::Max)
//! - **Boolean**: [`IsTrue`](validators::IsTrue)

// ValidationError is the fundamental error type for all validators;
// boxing it would add indirection to every validation call.
#![allow(clippy::result_large_err)]
// Nested combinator types (And<WithMessage<..>, AllOf<..>>) are inherent to
// the type-safe combinator design.
#![allow(clippy::type_complexity)]

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;
