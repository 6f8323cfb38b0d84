//! The upload/process/display state machine.
//!
//! [`Workflow`] owns all transient UI state as one value with pure
//! transition methods, replacing the scattered boolean flags a naive
//! implementation accumulates. It is generic over the processed-result
//! handle type `R` so the browser-specific object-URL wrapper stays in
//! `kirinuki-io` and tests can observe handle release directly.
//!
//! # Superseding in-flight work
//!
//! Every accepted selection bumps a generation counter and returns a
//! [`Generation`] stamp. Async completions carry their stamp back;
//! a completion whose stamp no longer matches is stale (the user
//! selected another file, or reset) and is discarded without touching
//! state. A stale success drops its handle, releasing the URL it
//! carried.

use crate::error::ValidationError;
use crate::selection::{self, Candidate, SelectedFile};

/// Suggested filename for the downloaded result.
pub const DOWNLOAD_FILENAME: &str = "background-removed.png";

/// User-facing message when validation rejects the offered file.
pub const INVALID_FILE_MESSAGE: &str = "Please select a valid image file.";

/// User-facing message when the selected file's bytes cannot be read.
pub const READ_FAILED_MESSAGE: &str = "Could not read the selected file. Please try another image.";

/// User-facing message when the external removal capability fails.
///
/// Deliberately generic: the underlying detail is logged for
/// diagnostics and never shown raw.
pub const REMOVAL_FAILED_MESSAGE: &str = "Failed to process the image. Please try another image.";

/// Stamp identifying one accepted selection.
///
/// Obtained from [`Workflow::select`] and passed back with each async
/// completion so stale work can be recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

/// Current phase of the workflow.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProcessingStatus {
    /// Nothing selected; waiting for an upload.
    #[default]
    Idle,
    /// A selection was accepted; preview and removal are in flight.
    Loading,
    /// Removal completed and a processed result is (or was) available.
    Success,
    /// Validation or processing failed; the message is user-facing.
    Error(String),
}

/// All transient state for the upload workflow.
///
/// `R` is the processed-result handle; dropping it must release the
/// underlying resource (in the browser, revoke the object URL). The
/// single `processed` slot is the only place a handle is held, so at
/// most one is live at a time: every path that stores a new handle
/// drops the previous one first.
#[derive(Debug)]
pub struct Workflow<R> {
    status: ProcessingStatus,
    selected: Option<SelectedFile>,
    original_preview: Option<String>,
    processed: Option<R>,
    generation: u64,
}

impl<R> Default for Workflow<R> {
    fn default() -> Self {
        Self {
            status: ProcessingStatus::Idle,
            selected: None,
            original_preview: None,
            processed: None,
            generation: 0,
        }
    }
}

impl<R> Workflow<R> {
    /// Create an idle workflow.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase, for rendering.
    #[must_use]
    pub const fn status(&self) -> &ProcessingStatus {
        &self.status
    }

    /// Metadata of the accepted selection, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    /// Data URL for the original pane, once the file has been read.
    #[must_use]
    pub fn original_preview(&self) -> Option<&str> {
        self.original_preview.as_deref()
    }

    /// The processed-result handle, if removal has succeeded.
    #[must_use]
    pub const fn processed(&self) -> Option<&R> {
        self.processed.as_ref()
    }

    /// Whether preview/removal work is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.status, ProcessingStatus::Loading)
    }

    /// Accept or reject an offered file.
    ///
    /// On acceptance the previous processed handle is dropped (its URL
    /// revoked), the original preview is cleared, status becomes
    /// [`ProcessingStatus::Loading`], and the returned [`Generation`]
    /// stamps the preview/removal work spawned for this selection.
    ///
    /// On rejection only the status changes, to
    /// [`ProcessingStatus::Error`] with [`INVALID_FILE_MESSAGE`].
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] when the candidate is absent or
    /// its declared type is not `image/*`. Callers must not invoke the
    /// removal capability in that case.
    pub fn select(&mut self, candidate: Option<Candidate>) -> Result<Generation, ValidationError> {
        match selection::validate(candidate) {
            Ok(file) => {
                // Release the previous result before anything new is created.
                self.processed = None;
                self.original_preview = None;
                self.selected = Some(file);
                self.status = ProcessingStatus::Loading;
                self.generation += 1;
                Ok(Generation(self.generation))
            }
            Err(err) => {
                self.status = ProcessingStatus::Error(INVALID_FILE_MESSAGE.to_owned());
                Err(err)
            }
        }
    }

    /// Record the original-pane preview for the stamped selection.
    ///
    /// Stale stamps are ignored. Independent of the removal outcome:
    /// the preview is recorded even if removal has already failed.
    pub fn preview_loaded(&mut self, generation: Generation, data_url: String) {
        if self.is_stale(generation) {
            return;
        }
        self.original_preview = Some(data_url);
    }

    /// Record that the stamped selection's bytes could not be read.
    ///
    /// Stale stamps are ignored.
    pub fn preview_failed(&mut self, generation: Generation) {
        if self.is_stale(generation) {
            return;
        }
        self.status = ProcessingStatus::Error(READ_FAILED_MESSAGE.to_owned());
    }

    /// Store the processed-result handle for the stamped selection.
    ///
    /// A stale handle is dropped immediately (revoking its URL) and
    /// state is untouched.
    pub fn removal_succeeded(&mut self, generation: Generation, handle: R) {
        if self.is_stale(generation) {
            drop(handle);
            return;
        }
        self.processed = Some(handle);
        self.status = ProcessingStatus::Success;
    }

    /// Record that removal failed for the stamped selection.
    ///
    /// The status message is generic; callers log the failure detail
    /// separately. Stale stamps are ignored.
    pub fn removal_failed(&mut self, generation: Generation) {
        if self.is_stale(generation) {
            return;
        }
        self.status = ProcessingStatus::Error(REMOVAL_FAILED_MESSAGE.to_owned());
    }

    /// Take the processed handle for downloading.
    ///
    /// Returns `None` when no result exists (the download action is
    /// disabled then). The caller triggers the save and drops the
    /// handle, which revokes the URL; the original preview and
    /// `Success` status remain so the comparison stays on screen.
    pub fn take_processed(&mut self) -> Option<R> {
        self.processed.take()
    }

    /// Return every field to the idle state.
    ///
    /// Drops the processed handle (revoking its URL) and bumps the
    /// generation so any in-flight completion becomes stale.
    /// Idempotent: resetting an idle workflow is a no-op apart from
    /// the generation bump.
    pub fn reset(&mut self) {
        self.processed = None;
        self.original_preview = None;
        self.selected = None;
        self.status = ProcessingStatus::Idle;
        self.generation += 1;
    }

    /// Generation counter, for keying UI elements that must be
    /// recreated per selection (e.g. the file input, so re-selecting
    /// the same file fires a change event after reset).
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    const fn is_stale(&self, generation: Generation) -> bool {
        generation.0 != self.generation
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::cell::Cell;
    use std::io::Cursor;
    use std::rc::Rc;

    use super::*;
    use crate::preview::to_data_url;

    /// Processed-result handle that records when it is dropped,
    /// standing in for an object URL whose drop revokes it.
    #[derive(Debug)]
    struct TrackedHandle {
        released: Rc<Cell<bool>>,
    }

    impl TrackedHandle {
        fn new() -> (Self, Rc<Cell<bool>>) {
            let released = Rc::new(Cell::new(false));
            (
                Self {
                    released: Rc::clone(&released),
                },
                released,
            )
        }
    }

    impl Drop for TrackedHandle {
        fn drop(&mut self) {
            self.released.set(true);
        }
    }

    fn png_candidate() -> Option<Candidate> {
        Some(Candidate::new("photo.png", Some("image/png".to_owned())))
    }

    /// Encode a tiny RGBA PNG of the given size.
    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(width, height, image::Rgba([0, 0, 0, 0]));
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn invalid_type_yields_error_status_and_no_result() {
        // A text file misnamed with an image extension still fails:
        // the declared type is what gets validated.
        let mut wf = Workflow::<TrackedHandle>::new();
        let candidate = Candidate::new("notes.png", Some("text/plain".to_owned()));

        let outcome = wf.select(Some(candidate));

        assert!(outcome.is_err());
        assert_eq!(
            wf.status(),
            &ProcessingStatus::Error(INVALID_FILE_MESSAGE.to_owned())
        );
        assert!(wf.processed().is_none());
        assert!(wf.selected().is_none());
    }

    #[test]
    fn missing_candidate_yields_error_status() {
        let mut wf = Workflow::<TrackedHandle>::new();
        assert!(wf.select(None).is_err());
        assert_eq!(
            wf.status(),
            &ProcessingStatus::Error(INVALID_FILE_MESSAGE.to_owned())
        );
    }

    #[test]
    fn valid_selection_transitions_to_loading_synchronously() {
        let mut wf = Workflow::<TrackedHandle>::new();
        wf.select(png_candidate()).unwrap();
        assert!(wf.is_loading());
        assert_eq!(wf.selected().unwrap().content_type, "image/png");
    }

    #[test]
    fn successful_removal_reaches_success_with_preview() {
        // A 2x2 PNG goes in; the tracked handle stands in for the
        // object URL of the blob the capability returns.
        let mut wf = Workflow::<TrackedHandle>::new();
        let generation = wf.select(png_candidate()).unwrap();

        wf.preview_loaded(generation, to_data_url(&png_bytes(2, 2), "image/png"));
        let (handle, released) = TrackedHandle::new();
        wf.removal_succeeded(generation, handle);

        assert_eq!(wf.status(), &ProcessingStatus::Success);
        assert!(wf.original_preview().unwrap().starts_with("data:image/png;base64,"));
        assert!(wf.processed().is_some());
        assert!(!released.get());
        assert!(DOWNLOAD_FILENAME.ends_with(".png"));
    }

    #[test]
    fn removal_failure_keeps_original_preview() {
        // The external capability rejecting the image must not take
        // the already-loaded original preview down with it.
        let mut wf = Workflow::<TrackedHandle>::new();
        let generation = wf.select(png_candidate()).unwrap();

        wf.preview_loaded(generation, to_data_url(&png_bytes(2, 2), "image/png"));
        wf.removal_failed(generation);

        assert_eq!(
            wf.status(),
            &ProcessingStatus::Error(REMOVAL_FAILED_MESSAGE.to_owned())
        );
        assert!(wf.original_preview().is_some());
        assert!(wf.processed().is_none());
    }

    #[test]
    fn read_failure_transitions_to_error() {
        let mut wf = Workflow::<TrackedHandle>::new();
        let generation = wf.select(png_candidate()).unwrap();
        wf.preview_failed(generation);
        assert_eq!(
            wf.status(),
            &ProcessingStatus::Error(READ_FAILED_MESSAGE.to_owned())
        );
    }

    #[test]
    fn loading_always_settles_exactly_once() {
        // Each settling event leaves Loading; a second event for the
        // same generation would still find a non-Loading status.
        let mut wf = Workflow::<TrackedHandle>::new();
        let generation = wf.select(png_candidate()).unwrap();
        wf.removal_failed(generation);
        assert!(!wf.is_loading());

        let generation = wf.select(png_candidate()).unwrap();
        let (handle, _released) = TrackedHandle::new();
        wf.removal_succeeded(generation, handle);
        assert!(!wf.is_loading());
    }

    #[test]
    fn new_selection_releases_previous_result_first() {
        let mut wf = Workflow::<TrackedHandle>::new();
        let generation = wf.select(png_candidate()).unwrap();
        let (handle, released) = TrackedHandle::new();
        wf.removal_succeeded(generation, handle);
        assert!(!released.get());

        // Selecting again must release the old handle before any new
        // one exists.
        wf.select(png_candidate()).unwrap();
        assert!(released.get());
        assert!(wf.processed().is_none());
    }

    #[test]
    fn at_most_one_handle_live_across_consecutive_selections() {
        let mut wf = Workflow::<TrackedHandle>::new();
        let mut flags = Vec::new();

        for _ in 0..5 {
            let generation = wf.select(png_candidate()).unwrap();
            let (handle, released) = TrackedHandle::new();
            wf.removal_succeeded(generation, handle);
            flags.push(released);

            let live = flags.iter().filter(|f| !f.get()).count();
            assert_eq!(live, 1);
        }
    }

    #[test]
    fn stale_success_is_discarded_and_its_handle_released() {
        // Re-selection while the first removal is in flight: the
        // first result is superseded, not queued.
        let mut wf = Workflow::<TrackedHandle>::new();
        let first = wf.select(png_candidate()).unwrap();
        let second = wf.select(png_candidate()).unwrap();

        let (stale_handle, stale_released) = TrackedHandle::new();
        wf.removal_succeeded(first, stale_handle);
        assert!(stale_released.get());
        assert!(wf.is_loading());

        let (handle, _released) = TrackedHandle::new();
        wf.removal_succeeded(second, handle);
        assert_eq!(wf.status(), &ProcessingStatus::Success);
    }

    #[test]
    fn stale_failure_and_preview_are_ignored() {
        let mut wf = Workflow::<TrackedHandle>::new();
        let first = wf.select(png_candidate()).unwrap();
        let second = wf.select(png_candidate()).unwrap();

        wf.removal_failed(first);
        assert!(wf.is_loading());

        wf.preview_loaded(first, "data:image/png;base64,stale".to_owned());
        assert!(wf.original_preview().is_none());

        wf.preview_loaded(second, "data:image/png;base64,fresh".to_owned());
        assert_eq!(
            wf.original_preview(),
            Some("data:image/png;base64,fresh")
        );
    }

    #[test]
    fn completions_after_reset_are_stale() {
        let mut wf = Workflow::<TrackedHandle>::new();
        let generation = wf.select(png_candidate()).unwrap();
        wf.reset();

        let (handle, released) = TrackedHandle::new();
        wf.removal_succeeded(generation, handle);

        assert!(released.get());
        assert_eq!(wf.status(), &ProcessingStatus::Idle);
    }

    #[test]
    fn download_takes_the_handle_once() {
        let mut wf = Workflow::<TrackedHandle>::new();
        let generation = wf.select(png_candidate()).unwrap();
        let (handle, released) = TrackedHandle::new();
        wf.removal_succeeded(generation, handle);

        let taken = wf.take_processed();
        assert!(taken.is_some());
        assert!(wf.take_processed().is_none());
        assert_eq!(wf.status(), &ProcessingStatus::Success);

        // The caller dropping the handle is what revokes the URL.
        drop(taken);
        assert!(released.get());
    }

    #[test]
    fn download_is_a_no_op_without_a_result() {
        let mut wf = Workflow::<TrackedHandle>::new();
        assert!(wf.take_processed().is_none());
        assert_eq!(wf.status(), &ProcessingStatus::Idle);
    }

    #[test]
    fn reset_releases_result_and_returns_to_idle() {
        let mut wf = Workflow::<TrackedHandle>::new();
        let generation = wf.select(png_candidate()).unwrap();
        wf.preview_loaded(generation, "data:image/png;base64,x".to_owned());
        let (handle, released) = TrackedHandle::new();
        wf.removal_succeeded(generation, handle);

        wf.reset();

        assert!(released.get());
        assert_eq!(wf.status(), &ProcessingStatus::Idle);
        assert!(wf.selected().is_none());
        assert!(wf.original_preview().is_none());
        assert!(wf.processed().is_none());
    }

    #[test]
    fn reset_is_idempotent() {
        let mut wf = Workflow::<TrackedHandle>::new();
        wf.select(png_candidate()).unwrap();
        wf.reset();
        wf.reset();
        assert_eq!(wf.status(), &ProcessingStatus::Idle);
        assert!(wf.selected().is_none());
        assert!(wf.original_preview().is_none());
        assert!(wf.processed().is_none());
    }

    #[test]
    fn error_state_accepts_a_new_valid_selection() {
        let mut wf = Workflow::<TrackedHandle>::new();
        let candidate = Candidate::new("notes.txt", Some("text/plain".to_owned()));
        assert!(wf.select(Some(candidate)).is_err());

        wf.select(png_candidate()).unwrap();
        assert!(wf.is_loading());
    }

    #[test]
    fn drop_path_matches_picker_path() {
        // Picker and drop both feed the same transition, so identical
        // candidates end in identical observable state.
        let run = |name: &str| {
            let mut wf = Workflow::<TrackedHandle>::new();
            let candidate = Candidate::new(name, Some("image/png".to_owned()));
            let generation = wf.select(Some(candidate)).unwrap();
            wf.preview_loaded(generation, to_data_url(&png_bytes(2, 2), "image/png"));
            let (handle, _released) = TrackedHandle::new();
            wf.removal_succeeded(generation, handle);
            (
                wf.status().clone(),
                wf.selected().cloned(),
                wf.original_preview().map(ToOwned::to_owned),
            )
        };

        assert_eq!(run("dropped.png"), run("dropped.png"));
    }
}
