//! Invocation of the external background-removal capability.
//!
//! The computation itself is a black box (`removeBackground(blob) ->
//! Promise<Blob>`, bridged in `js/removal.js`); this module only
//! depends on its success/failure contract. Failure detail is logged
//! by the caller and never shown raw to the user.

use tracing::debug;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::blob::{self, BlobError};

#[wasm_bindgen(module = "/src/js/removal.js")]
extern "C" {
    /// `removeBackground(source) -> Promise<Blob>` from the external library.
    #[wasm_bindgen(js_name = removeBackground)]
    fn remove_background_js(source: &web_sys::Blob) -> js_sys::Promise;
}

/// Errors that can occur while invoking the removal capability.
#[derive(Debug, thiserror::Error)]
pub enum RemovalError {
    /// The input bytes could not be wrapped in a `Blob`.
    #[error(transparent)]
    Blob(#[from] BlobError),

    /// The capability rejected the image (unsupported format,
    /// internal fault, resource exhaustion -- the contract does not
    /// distinguish).
    #[error("removal capability rejected the image: {0}")]
    Rejected(String),

    /// The capability resolved with something other than a `Blob`.
    #[error("removal capability returned a non-Blob value")]
    NotABlob,
}

/// Run background removal on the given image bytes.
///
/// Wraps the bytes in a `Blob`, hands it to the external capability,
/// and resolves with the returned `Blob` (a PNG with the subject on a
/// transparent background). The returned blob is passed on unmodified
/// -- wrapping it in an object URL for display and download is the
/// caller's concern.
///
/// # Errors
///
/// Returns [`RemovalError::Blob`] if the input `Blob` cannot be
/// created, [`RemovalError::Rejected`] if the capability's promise
/// rejects, or [`RemovalError::NotABlob`] on a malformed resolution.
#[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
pub async fn remove_background(
    bytes: &[u8],
    content_type: &str,
) -> Result<web_sys::Blob, RemovalError> {
    let input = blob::bytes_to_blob(bytes, content_type)?;
    debug!(
        input_bytes = bytes.len(),
        content_type, "invoking background removal"
    );

    let resolved = JsFuture::from(remove_background_js(&input))
        .await
        .map_err(|e| RemovalError::Rejected(describe(&e)))?;

    let output: web_sys::Blob = resolved.dyn_into().map_err(|_| RemovalError::NotABlob)?;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let output_bytes = output.size() as u64;
    debug!(output_bytes, "background removal completed");

    Ok(output)
}

/// Render a JS rejection value for diagnostics.
fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}
