//! Built-in validators
//!
//! - **String**: [`NotEmpty`], [`StartsWithUppercase`], [`ContainsChar`], [`SimpleEmail`], [`OneOf`]
//! - **Numeric**: [`Positive`], [`Integral`], [`Max`]
//! - **Logical**: [`IsTrue`]
//!
//! ```
//! use signup_validator::prelude::*;
//!
//! let email = not_empty().and(simple_email());
//! assert!(email.validate("a@b.com").is_ok());
//! ```

// String validators
pub mod content;
pub mod length;
pub mod membership;
pub mod pattern;

// Numeric validators
pub mod numeric;

// Logical validators
pub mod boolean;

pub use content::{SimpleEmail, simple_email};
pub use length::{NotEmpty, not_empty};
pub use membership::{OneOf, one_of};
pub use pattern::{
    CharClass, ContainsChar, StartsWithUppercase, contains_any_of, contains_char, contains_digit,
    contains_lowercase, contains_uppercase, starts_with_uppercase,
};

pub use numeric::{Integral, Max, Positive, integral, max, positive};

pub use boolean::{IsTrue, is_true};
