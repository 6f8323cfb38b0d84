//! Side-by-side comparison of the original and processed images.

use dioxus::prelude::*;

/// Props for the [`ComparisonPanes`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ComparisonPanesProps {
    /// Data URL for the original pane, once the file has been read.
    original: Option<String>,
    /// Object URL for the processed pane, once removal succeeded.
    /// The URL is owned elsewhere; this is just the string to render.
    processed: Option<String>,
    /// Whether removal is still in flight (shows the spinner).
    processing: bool,
}

/// Renders the original and background-removed images side by side.
///
/// The two panes are independent: the original renders as soon as its
/// data URL exists, whatever the removal outcome. The processed pane
/// shows a spinner while work is in flight and a placeholder
/// otherwise.
#[component]
pub fn ComparisonPanes(props: ComparisonPanesProps) -> Element {
    let Some(ref original) = props.original else {
        return rsx! {
            div { class: "comparison-empty",
                p { class: "comparison-empty-title", "Processed image" }
                p { class: "comparison-empty-hint",
                    "Upload an image to remove its background"
                }
            }
        };
    };

    rsx! {
        div { class: "comparison",
            div { class: "pane",
                p { class: "pane-title", "Original" }
                div { class: "pane-frame",
                    img { class: "pane-image", src: "{original}", alt: "Original" }
                }
            }

            div { class: "pane",
                p { class: "pane-title", "Background removed" }
                div { class: "pane-frame checkerboard",
                    if let Some(ref processed) = props.processed {
                        img {
                            class: "pane-image",
                            src: "{processed}",
                            alt: "Background removed",
                        }
                    } else if props.processing {
                        div { class: "pane-waiting",
                            span { class: "spinner" }
                            "Processing..."
                        }
                    } else {
                        p { class: "pane-placeholder", "Processed image will appear here" }
                    }
                }
            }
        }
    }
}
