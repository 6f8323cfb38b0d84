//! Dioxus UI components for kirinuki.
//!
//! Provides the upload drop zone with file picker, the side-by-side
//! original/processed comparison panes, and the download/reset action
//! bar.

mod actions;
mod comparison;
mod upload;

pub use actions::ActionBar;
pub use comparison::ComparisonPanes;
pub use upload::UploadZone;
