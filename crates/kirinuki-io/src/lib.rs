//! kirinuki-io: Browser I/O and Dioxus component library.
//!
//! Owns everything that touches the browser: object-URL lifetime for
//! the processed result, anchor-click downloads, the binding to the
//! external background-removal capability, and the upload/comparison/
//! action UI components. The workflow state machine itself lives in
//! `kirinuki-core`.
//!
//! All modules here require a browser environment
//! (`wasm32-unknown-unknown` target).

pub mod blob;
pub mod components;
pub mod download;
pub mod removal;

pub use blob::ObjectUrl;
pub use components::{ActionBar, ComparisonPanes, UploadZone};
