//! Modal Frame Component
//!
//! Backdrop plus centred panel shared by every modal on the site. The frame
//! only renders while `show` is true; closing is always the caller's job via
//! `on_close`, which fires on backdrop click, the close button and Escape.

use dioxus::prelude::*;

/// Properties for the ModalFrame component
#[derive(Clone, PartialEq, Props)]
pub struct ModalFrameProps {
    /// Whether to show the modal
    pub show: bool,
    /// Callback when the modal asks to be closed
    pub on_close: EventHandler<()>,
    /// Accessible title for the dialog
    pub title: String,
    /// Extra class on the panel (size variants)
    #[props(default)]
    pub class: Option<String>,
    pub children: Element,
}

/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ModalFrame {
///         show: show_docs(),
///         on_close: move |_| show_docs.set(false),
///         title: "Documentation".to_string(),
///         p { "..." }
///     }
/// }
/// ```
#[component]
pub fn ModalFrame(props: ModalFrameProps) -> Element {
    if !props.show {
        return rsx! {};
    }

    let panel_class = match props.class.as_deref() {
        Some(extra) => format!("modal-panel {}", extra),
        None => "modal-panel".to_string(),
    };
    let on_close = props.on_close;

    rsx! {
        div {
            class: "modal-root",
            tabindex: "-1",
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    on_close.call(());
                }
            },
            onmounted: move |evt| async move {
                // Focus the root so Escape reaches it
                let _ = evt.data().set_focus(true).await;
            },

            div {
                class: "modal-backdrop",
                onclick: move |_| on_close.call(()),
            }

            div {
                class: "{panel_class}",
                role: "dialog",
                "aria-modal": "true",
                "aria-label": "{props.title}",
                onclick: move |e| e.stop_propagation(),

                button {
                    class: "modal-close",
                    r#type: "button",
                    "aria-label": "Close",
                    onclick: move |_| on_close.call(()),
                    // Lucide x icon
                    svg {
                        xmlns: "http://www.w3.org/2000/svg",
                        width: "24",
                        height: "24",
                        view_box: "0 0 24 24",
                        fill: "none",
                        stroke: "currentColor",
                        stroke_width: "2",
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        path { d: "M18 6 6 18" }
                        path { d: "m6 6 12 12" }
                    }
                }

                {props.children}
            }
        }
    }
}
