//! File constraint checker for the profile picture.

use signup_validator::prelude::*;

use crate::record::Attachment;

/// Media types a picture may declare. Matched exactly, case-sensitive.
pub const ACCEPTED_MEDIA_TYPES: &[&str] = &["image/jpeg", "image/png"];

/// Largest accepted picture, inclusive: 2 MiB.
pub const MAX_PICTURE_BYTES: u64 = 2 * 1024 * 1024;

pub const PICTURE_REQUIRED: &str = "Picture is required";
pub const PICTURE_WRONG_TYPE: &str = "Picture must be a PNG or JPEG";
pub const PICTURE_TOO_LARGE: &str = "Picture size must be under 2MB";

/// Pass/fail of each picture sub-rule.
///
/// When no picture is present the type and size rules are not evaluated
/// and report `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PictureCheck {
    pub present: bool,
    pub media_type_ok: bool,
    pub size_ok: bool,
}

impl PictureCheck {
    pub fn passed(&self) -> bool {
        self.present && self.media_type_ok && self.size_ok
    }
}

/// Validates a file list: the first file must exist, be a PNG or JPEG and
/// fit in [`MAX_PICTURE_BYTES`].
///
/// Presence is checked first and reported on its own.
#[derive(Debug, Clone, Copy)]
pub struct PictureConstraint {
    media_type: OneOf,
    size: Max<u64>,
}

impl PictureConstraint {
    pub fn new() -> Self {
        Self {
            media_type: one_of(ACCEPTED_MEDIA_TYPES),
            size: max(MAX_PICTURE_BYTES),
        }
    }

    /// Evaluates every sub-rule against the first attachment.
    pub fn check(&self, pictures: &[Attachment]) -> PictureCheck {
        match pictures.first() {
            Some(picture) => PictureCheck {
                present: true,
                media_type_ok: self.media_type.is_valid(picture.media_type()),
                size_ok: self.size.is_valid(&picture.size()),
            },
            None => PictureCheck {
                present: false,
                media_type_ok: false,
                size_ok: false,
            },
        }
    }
}

impl Default for PictureConstraint {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for PictureConstraint {
    type Input = [Attachment];

    fn validate(&self, pictures: &[Attachment]) -> Result<(), ValidationError> {
        let Some(picture) = pictures.first() else {
            return Err(ValidationError::new("required", PICTURE_REQUIRED));
        };
        self.media_type
            .with_message(PICTURE_WRONG_TYPE)
            .validate(picture.media_type())?;
        self.size
            .with_message(PICTURE_TOO_LARGE)
            .validate(&picture.size())
    }
}

/// Creates a [`PictureConstraint`].
pub fn picture_constraint() -> PictureConstraint {
    PictureConstraint::new()
}
