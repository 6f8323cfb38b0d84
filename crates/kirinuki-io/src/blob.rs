//! Object-URL ownership for the processed result.
//!
//! An object URL is a process-local handle to an in-memory `Blob` and
//! must be explicitly revoked, or the browser keeps the blob alive.
//! [`ObjectUrl`] ties revocation to `Drop`, so the single owning slot
//! in the workflow (and every stale or superseded handle) releases
//! its URL without a manual call site.

use wasm_bindgen::JsValue;
use web_sys::BlobPropertyBag;

/// Errors that can occur when creating an object URL.
#[derive(Debug, thiserror::Error)]
pub enum BlobError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for BlobError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// An owned object URL, revoked on drop.
#[derive(Debug)]
pub struct ObjectUrl {
    url: String,
}

impl ObjectUrl {
    /// Create an object URL for an existing `Blob`.
    ///
    /// # Errors
    ///
    /// Returns [`BlobError::JsError`] if `URL.createObjectURL` fails.
    pub fn from_blob(blob: &web_sys::Blob) -> Result<Self, BlobError> {
        let url = web_sys::Url::create_object_url_with_blob(blob)?;
        Ok(Self { url })
    }

    /// Create a `Blob` from raw bytes and wrap it in an object URL.
    ///
    /// # Errors
    ///
    /// Returns [`BlobError::JsError`] if `Blob` or URL creation fails.
    pub fn from_bytes(bytes: &[u8], content_type: &str) -> Result<Self, BlobError> {
        Self::from_blob(&bytes_to_blob(bytes, content_type)?)
    }

    /// The URL string, usable as an `<img src>` or download target.
    ///
    /// Valid only while this handle is alive.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        // Best-effort: the URL may already be gone on page teardown.
        let _ = web_sys::Url::revoke_object_url(&self.url);
    }
}

/// Build a `Blob` with the given MIME type from raw bytes.
///
/// # Errors
///
/// Returns [`BlobError::JsError`] if `Blob` construction fails.
pub fn bytes_to_blob(bytes: &[u8], content_type: &str) -> Result<web_sys::Blob, BlobError> {
    let uint8_array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&uint8_array);

    let opts = BlobPropertyBag::new();
    opts.set_type(content_type);

    Ok(web_sys::Blob::new_with_u8_array_sequence_and_options(
        &parts, &opts,
    )?)
}
