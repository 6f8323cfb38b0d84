//! File download via a synthetic anchor click.
//!
//! Dioxus has no built-in file download API. This module triggers a
//! download by programmatically clicking a temporary
//! `<a download="filename">` element pointed at an existing object
//! URL. The URL itself is owned by [`crate::blob::ObjectUrl`]; the
//! caller drops the handle after the click to revoke it.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;

/// Errors that can occur when triggering a file download.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for DownloadError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Trigger a file download for an existing object URL.
///
/// Creates a temporary `<a>` element with the given `href` and
/// suggested `filename`, clicks it, and removes it again. Does not
/// revoke the URL -- that happens when the owning
/// [`ObjectUrl`](crate::blob::ObjectUrl) is dropped.
///
/// # Errors
///
/// Returns [`DownloadError::JsError`] if any browser API call fails
/// (e.g., element creation or DOM insertion).
pub fn trigger_download(url: &str, filename: &str) -> Result<(), DownloadError> {
    let window =
        web_sys::window().ok_or_else(|| DownloadError::JsError("no global window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| DownloadError::JsError("no document".into()))?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|e| DownloadError::JsError(format!("failed to cast element: {e:?}")))?;

    anchor.set_href(url);
    anchor.set_download(filename);

    // Append to body, click, and remove.
    let body = document
        .body()
        .ok_or_else(|| DownloadError::JsError("no document body".into()))?;
    body.append_child(&anchor)?;
    anchor.click();

    // Best-effort cleanup -- the download is already initiated.
    // A failure here must not be reported as "download failed".
    let _ = body.remove_child(&anchor);

    Ok(())
}
