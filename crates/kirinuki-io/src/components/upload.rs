//! File upload component with drag-and-drop and file picker.

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;

/// Props for the [`UploadZone`] component.
#[derive(Props, Clone, PartialEq)]
pub struct UploadZoneProps {
    /// Called with the first offered file, or `None` for an empty
    /// picker event or empty drop. Validation happens in the caller
    /// so both paths get identical treatment.
    on_select: EventHandler<Option<FileData>>,
    /// Name of the accepted selection, shown above the picker.
    selected_name: Option<String>,
    /// Workflow generation. Keys the file input so a reset recreates
    /// it, clearing the residual value -- without this, re-selecting
    /// the same file after a reset fires no change event.
    selection_key: u64,
}

/// A drag-and-drop zone with a file picker button.
///
/// Fires `on_select` with the first file from a picker change or a
/// drop. Files always come from the event's file list accessor
/// (`evt.files()`), never from the raw drag payload, so the two entry
/// points cannot diverge.
#[component]
pub fn UploadZone(props: UploadZoneProps) -> Element {
    let mut dragging = use_signal(|| false);
    let on_select = props.on_select;

    let handle_files = move |evt: FormEvent| {
        on_select.call(evt.files().into_iter().next());
    };

    let handle_drop = move |evt: DragEvent| {
        evt.prevent_default();
        dragging.set(false);
        on_select.call(evt.files().into_iter().next());
    };

    let zone_class = if dragging() {
        "upload-zone dragging"
    } else {
        "upload-zone"
    };

    rsx! {
        div {
            class: "{zone_class}",
            ondragover: move |evt| {
                evt.prevent_default();
                dragging.set(true);
            },
            ondragleave: move |_| {
                dragging.set(false);
            },
            ondrop: handle_drop,

            if let Some(ref name) = props.selected_name {
                p { class: "upload-loaded", "Loaded: {name}" }
            }

            p { class: "upload-prompt", "Drop an image here or" }

            label { class: "picker-button",
                input {
                    key: "{props.selection_key}",
                    r#type: "file",
                    accept: "image/*",
                    class: "hidden-input",
                    onchange: handle_files,
                }
                "Choose image"
            }

            p { class: "upload-hint", "Supports JPG, PNG, and other image formats" }
        }
    }
}
