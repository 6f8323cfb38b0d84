//! Download and reset action buttons.

use dioxus::prelude::*;

/// Props for the [`ActionBar`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ActionBarProps {
    /// Enables the download button. `false` renders it disabled.
    can_download: bool,
    /// Whether removal is still in flight (changes the download label).
    processing: bool,
    /// Called when the download button is clicked while enabled.
    on_download: EventHandler<()>,
    /// Called when the reset button is clicked.
    on_reset: EventHandler<()>,
}

/// Download and reset buttons for the comparison view.
///
/// The download button is a no-op (disabled) until a processed result
/// exists; reset is always available.
#[component]
pub fn ActionBar(props: ActionBarProps) -> Element {
    let on_download = props.on_download;
    let on_reset = props.on_reset;
    let download_label = if props.processing {
        "Processing..."
    } else {
        "Download image"
    };
    let download_class = if props.can_download {
        "btn"
    } else {
        "btn disabled"
    };

    rsx! {
        div { class: "action-bar",
            button {
                class: "{download_class}",
                disabled: !props.can_download,
                onclick: move |_| on_download.call(()),
                "{download_label}"
            }
            button {
                class: "btn secondary",
                onclick: move |_| on_reset.call(()),
                "Process another image"
            }
        }
    }
}
