//! Macros for creating validators with minimal boilerplate.
//!
//! - [`validator!`]: struct + `Validate` impl + factory fn
//! - [`compose!`]: AND-chain multiple validators
//!
//! ```
//! use signup_validator::validator;
//! use signup_validator::foundation::{Validate, ValidationError};
//!
//! validator! {
//!     pub NonBlank for str;
//!     rule(input) { !input.trim().is_empty() }
//!     error(input) { ValidationError::new("non_blank", "must not be blank") }
//!     fn non_blank();
//! }
//!
//! assert!(non_blank().validate(" x ").is_ok());
//! assert!(non_blank().validate("   ").is_err());
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a complete validator: struct definition, `Validate` implementation,
/// constructor, and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via `#[derive(...)]`.
/// The trailing `fn` line is optional; leave it out to skip the factory.
///
/// # Variants
///
/// **Unit validator** (zero-sized, no fields):
/// ```rust,ignore
/// validator! {
///     pub NotEmpty for str;
///     rule(input) { !input.is_empty() }
///     error(input) { ValidationError::new("not_empty", "empty") }
///     fn not_empty();
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields):
/// ```rust,ignore
/// validator! {
///     #[derive(Copy, PartialEq, Eq, Hash)]
///     pub MinLength { min: usize } for str;
///     rule(self, input) { input.len() >= self.min }
///     error(self, input) { ValidationError::new("min_length", "too short") }
///     fn min_length(min: usize);
/// }
/// ```
///
/// **Generic validator**:
/// ```rust,ignore
/// validator! {
///     #[derive(Copy, PartialEq, Eq, Hash)]
///     pub Max<T: PartialOrd + Display + Copy> { max: T } for T;
///     rule(self, input) { *input <= self.max }
///     error(self, input) { ValidationError::new("max", format!("must be <= {}", self.max)) }
///     fn max(max: T);
/// }
/// ```
#[macro_export]
macro_rules! validator {
    (@impl $name:ident, $self_:ident, $input:ty, $inp:ident, $rule:block, $einp:ident, $err:block) => {
        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule { Ok(()) } else { let $einp = $inp; Err($err) }
            }
        }
    };

    (@generic_factory [$vis:vis] $name:ident, $gen:ident, [$($bounds:tt)*]; fn $factory:ident($($farg:ident: $faty:ty),*);) => {
        #[must_use]
        $vis fn $factory<$gen: $($bounds)*>($($farg: $faty),*) -> $name<$gen> {
            $name::new($($farg),*)
        }
    };

    (@generic_factory [$vis:vis] $name:ident, $gen:ident, [$($bounds:tt)*];) => {};

    // Unit validator: zero-sized, `const` factory.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        $(fn $factory:ident();)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name;

        $crate::validator!(@impl $name, self, $input, $inp, $rule, $einp, $err);

        $(
            #[must_use]
            $vis const fn $factory() -> $name { $name }
        )?
    };

    // Struct with fields: `new` takes every field in order.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        $(fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        $crate::validator!(@impl $name, $self_, $input, $inp, $rule, $einp, $err);

        $(
            #[must_use]
            $vis fn $factory($($farg: $faty),*) -> $name {
                $name::new($($farg),*)
            }
        )?
    };

    // Generic struct: one type parameter, bounds given as plain identifiers.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident: $first_bound:ident $(+ $rest_bound:ident)*>
            { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        $(fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name<$gen> {
            $(pub $field: $fty,)+
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $name<$gen> {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $crate::foundation::Validate for $name<$gen> {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule { Ok(()) } else { let $einp = $inp; Err($err) }
            }
        }

        $crate::validator!(@generic_factory [$vis] $name, $gen, [$first_bound $(+ $rest_bound)*]; $(fn $factory($($farg: $faty),*);)?);
    };
}

// ============================================================================
// COMPOSE MACRO
// ============================================================================

/// Composes multiple validators using AND logic.
///
/// ```rust,ignore
/// let email = compose![
///     not_empty().with_message("Email is required"),
///     simple_email().with_message("Invalid email format"),
/// ];
/// ```
#[macro_export]
macro_rules! compose {
    ($first:expr) => {
        $first
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $first$(.and($rest))+
    };
}

// ============================================================================
// TESTS
// ============================================================================
