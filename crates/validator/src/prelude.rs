//! Prelude module for convenient imports.
//!
//! ```
//! use signup_validator::prelude::*;
//!
//! let password = not_empty().and(all_of(vec![contains_digit(), contains_uppercase()]));
//! assert!(password.validate("Abc1").is_ok());
//! ```

pub use crate::foundation::{Validate, ValidateExt, ValidationError, ValidationErrors};

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

pub use crate::combinators::{AllOf, And, Field, WithMessage, all_of, and, with_message};

pub use crate::compose;
