//! kirinuki-core: Pure upload-workflow state machine (sans-IO).
//!
//! Models the select -> load -> remove-background -> display workflow
//! as one explicit state value with pure transition methods:
//! selection validation, preview encoding, and generation-stamped
//! completion events.
//!
//! This crate has **no browser dependencies** -- it operates on
//! in-memory metadata and byte slices. Object-URL creation, downloads,
//! and the external removal capability live in `kirinuki-io`.

pub mod error;
pub mod preview;
pub mod selection;
pub mod workflow;

pub use error::ValidationError;
pub use selection::{Candidate, SelectedFile};
pub use workflow::{Generation, ProcessingStatus, Workflow};
