//! Original-image preview encoding.
//!
//! The original pane displays the selected file directly as a data
//! URL, so no object URL (and no revocation) is needed for it. Only
//! the processed result uses an object URL.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Encode file bytes as a `data:` URL usable as an `<img src>`.
#[must_use]
pub fn to_data_url(bytes: &[u8], content_type: &str) -> String {
    format!("data:{content_type};base64,{}", STANDARD.encode(bytes))
}
