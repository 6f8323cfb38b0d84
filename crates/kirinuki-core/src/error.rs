//! Validation errors for the upload workflow.
//!
//! Every error here is recoverable: the user re-selects a file and
//! the workflow runs again. Processing failures from the external
//! removal capability are modeled at the invocation seam in
//! `kirinuki-io`; this crate only records their generic user-facing
//! message (see [`crate::workflow`]).

use thiserror::Error;

/// The offered file is missing or not an image.
///
/// Recovered locally: the workflow records an error status and waits
/// for the user to select a different file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No file was offered (empty picker event or empty drop).
    #[error("no file was selected")]
    NoFile,

    /// The declared MIME type does not begin with `image/`.
    #[error("{name:?} is not an image (declared type {content_type:?})")]
    NotAnImage {
        /// Filename as reported by the platform.
        name: String,
        /// Declared MIME type, or an empty string if none was reported.
        content_type: String,
    },
}
