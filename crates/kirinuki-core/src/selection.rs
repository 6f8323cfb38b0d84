//! Candidate file validation.
//!
//! Both input paths (file picker and drag-and-drop) offer a
//! [`Candidate`] and go through [`validate`], so the MIME check and
//! the resulting workflow behavior are identical regardless of how
//! the file arrived.

use crate::error::ValidationError;

/// Prefix a declared MIME type must have to be accepted.
pub const IMAGE_TYPE_PREFIX: &str = "image/";

/// Metadata for a file offered by the picker or the drop zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Filename as reported by the platform.
    pub name: String,
    /// Declared MIME type, if the platform reported one.
    pub content_type: Option<String>,
}

impl Candidate {
    /// Create a candidate from platform-reported metadata.
    #[must_use]
    pub fn new(name: impl Into<String>, content_type: Option<String>) -> Self {
        Self {
            name: name.into(),
            content_type,
        }
    }
}

/// A candidate that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// Filename as reported by the platform.
    pub name: String,
    /// Declared MIME type (guaranteed to start with `image/`).
    pub content_type: String,
}

/// Validate an offered file.
///
/// The declared type is authoritative: a text file misnamed with an
/// image extension still fails, and the extension is never consulted.
///
/// # Errors
///
/// Returns [`ValidationError::NoFile`] when no candidate was offered,
/// or [`ValidationError::NotAnImage`] when the declared MIME type is
/// absent or does not begin with `image/`.
pub fn validate(candidate: Option<Candidate>) -> Result<SelectedFile, ValidationError> {
    let Some(candidate) = candidate else {
        return Err(ValidationError::NoFile);
    };

    match candidate.content_type {
        Some(content_type) if content_type.starts_with(IMAGE_TYPE_PREFIX) => Ok(SelectedFile {
            name: candidate.name,
            content_type,
        }),
        other => Err(ValidationError::NotAnImage {
            name: candidate.name,
            content_type: other.unwrap_or_default(),
        }),
    }
}
