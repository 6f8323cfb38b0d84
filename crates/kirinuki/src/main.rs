use dioxus::html::FileData;
use dioxus::prelude::*;
use kirinuki_core::workflow::DOWNLOAD_FILENAME;
use kirinuki_core::{Candidate, ProcessingStatus, Workflow, preview};
use kirinuki_io::{ActionBar, ComparisonPanes, ObjectUrl, UploadZone, download, removal};
use tracing::{debug, warn};

fn main() {
    dioxus::launch(app);
}

/// Root application component.
///
/// Owns the single [`Workflow`] signal and wires the upload zone,
/// comparison panes, and action bar to its transitions. Each accepted
/// selection spawns one async task that reads the file, publishes the
/// original preview, and awaits the removal capability; the
/// generation stamp returned by `select` lets the task's completions
/// be discarded when a newer selection or a reset supersedes them.
fn app() -> Element {
    let mut workflow = use_signal(Workflow::<ObjectUrl>::new);

    // --- File selection handler (picker and drop zone) ---
    let on_select = move |file: Option<FileData>| {
        let candidate = file
            .as_ref()
            .map(|f| Candidate::new(f.name(), f.content_type()));

        let generation = match workflow.write().select(candidate) {
            Ok(generation) => generation,
            Err(err) => {
                debug!("selection rejected: {err}");
                return;
            }
        };
        let (Some(file), Some(selected)) = (file, workflow.peek().selected().cloned()) else {
            return;
        };

        spawn(async move {
            let bytes = match file.read_bytes().await {
                Ok(bytes) => bytes.to_vec(),
                Err(err) => {
                    warn!("failed to read {:?}: {err}", selected.name);
                    workflow.write().preview_failed(generation);
                    return;
                }
            };

            // Publish the original preview before awaiting removal so
            // it renders whatever the removal outcome.
            let data_url = preview::to_data_url(&bytes, &selected.content_type);
            workflow.write().preview_loaded(generation, data_url);

            match removal::remove_background(&bytes, &selected.content_type).await {
                Ok(blob) => match ObjectUrl::from_blob(&blob) {
                    Ok(handle) => workflow.write().removal_succeeded(generation, handle),
                    Err(err) => {
                        warn!("object URL creation failed: {err}");
                        workflow.write().removal_failed(generation);
                    }
                },
                Err(err) => {
                    warn!("background removal failed: {err}");
                    workflow.write().removal_failed(generation);
                }
            }
        });
    };

    // --- Download handler ---
    let on_download = move |()| {
        let handle = workflow.write().take_processed();
        if let Some(handle) = handle {
            if let Err(err) = download::trigger_download(handle.as_str(), DOWNLOAD_FILENAME) {
                warn!("download failed: {err}");
            }
            // Dropping the handle revokes the URL now the save is queued.
        }
    };

    // --- Reset handler ---
    let on_reset = move |()| workflow.write().reset();

    // --- Projection for rendering ---
    let (status, selected_name, original, processed_url, generation) = {
        let wf = workflow.read();
        (
            wf.status().clone(),
            wf.selected().map(|f| f.name.clone()),
            wf.original_preview().map(ToOwned::to_owned),
            wf.processed().map(|h| h.as_str().to_owned()),
            wf.generation(),
        )
    };
    let processing = matches!(status, ProcessingStatus::Loading);
    let can_download = processed_url.is_some();
    let show_actions = original.is_some();
    let error_message = match status {
        ProcessingStatus::Error(message) => Some(message),
        _ => None,
    };

    // --- Layout ---
    rsx! {
        style { dangerous_inner_html: include_str!("../assets/main.css") }

        div { class: "app",
            header { class: "app-header",
                h1 { class: "app-title", "kirinuki" }
                p { class: "app-subtitle",
                    "Remove image backgrounds, entirely in your browser"
                }
            }

            main { class: "app-main",
                section { class: "card",
                    h2 { class: "card-title", "Background removal" }
                    UploadZone {
                        on_select: on_select,
                        selected_name: selected_name,
                        selection_key: generation,
                    }
                    if let Some(ref message) = error_message {
                        div { class: "error-banner",
                            p { "{message}" }
                        }
                    }
                }

                section { class: "card",
                    ComparisonPanes {
                        original: original,
                        processed: processed_url,
                        processing: processing,
                    }
                    if show_actions {
                        ActionBar {
                            can_download: can_download,
                            processing: processing,
                            on_download: on_download,
                            on_reset: on_reset,
                        }
                    }
                }
            }
        }
    }
}
