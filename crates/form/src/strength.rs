//! Password strength scoring.
//!
//! Advisory only: the label is shown next to the password field and never
//! gates submission.

use std::fmt;

use serde::Serialize;
use signup_validator::prelude::*;

/// Qualitative strength of a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub enum PasswordStrength {
    /// No input, or nothing scored.
    #[default]
    #[serde(rename = "")]
    Empty,
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    /// Scores a password, or an absent one.
    pub fn evaluate(password: Option<&str>) -> Self {
        Self::from_score(password.map_or(0, score))
    }

    /// Maps a score in `0..=5` to a label; higher scores saturate at strong.
    pub const fn from_score(score: u8) -> Self {
        match score {
            0 => Self::Empty,
            1 | 2 => Self::Weak,
            3 | 4 => Self::Medium,
            _ => Self::Strong,
        }
    }

    /// Display label; empty for [`PasswordStrength::Empty`].
    pub const fn label(self) -> &'static str {
        match self {
            Self::Empty => "",
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One point each for: more than 8 characters, a lowercase letter, an
/// uppercase letter, a digit, a character outside `[A-Za-z0-9]`.
pub fn score(password: &str) -> u8 {
    let checks = [
        password.chars().count() > 8,
        contains_lowercase().is_valid(password),
        contains_uppercase().is_valid(password),
        contains_digit().is_valid(password),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    checks.into_iter().map(u8::from).sum()
}
