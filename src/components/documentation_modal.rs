//! Documentation Modal
//!
//! Sidebar of tabs (overview, api, ethics) next to the selected tab's copy.

use aion_core::{DocTab, ETHICS_PROTOCOLS};
use aion_ui::ModalFrame;
use dioxus::prelude::*;

use crate::components::Icon;

#[component]
pub fn DocumentationModal(
    /// Whether to show the modal
    show: bool,
    /// Callback when modal is closed
    on_close: EventHandler<()>,
) -> Element {
    let mut active_tab = use_signal(DocTab::default);

    rsx! {
        ModalFrame {
            show: show,
            on_close: on_close,
            title: "Documentation".to_string(),
            class: "docs-modal".to_string(),

            div { class: "docs-sidebar",
                div { class: "docs-brand",
                    Icon { name: "book-open", size: 20, class: "accent-cyan".to_string() }
                    "DOCS"
                }
                nav { class: "docs-tabs",
                    for tab in DocTab::ALL {
                        button {
                            key: "{tab.label()}",
                            r#type: "button",
                            class: if active_tab() == tab { "docs-tab active" } else { "docs-tab" },
                            onclick: move |_| active_tab.set(tab),
                            "{tab.label()}"
                        }
                    }
                }
            }

            div { class: "docs-content",
                div { class: "docs-page", key: "{active_tab().label()}",
                    h4 { class: "docs-heading", "{active_tab().heading()}" }
                    {render_tab(active_tab())}
                }
            }
        }
    }
}

fn render_tab(tab: DocTab) -> Element {
    match tab {
        DocTab::Overview => rsx! {
            p { class: "docs-text",
                "AION Core beroperasi sebagai lapisan kecerdasan terdesentralisasi. Berbeda dengan model AI tradisional, AION menggunakan arsitektur "
                strong { "Recursive Neural Feedback" }
                " yang memungkinkan sistem untuk mengevaluasi logikanya sendiri sebelum memberikan output."
            }
            div { class: "docs-metrics",
                div { class: "docs-metric",
                    p { class: "docs-metric-label accent-cyan", "LATENCY TARGET" }
                    p { class: "docs-metric-value", "< 150ms" }
                }
                div { class: "docs-metric",
                    p { class: "docs-metric-label accent-violet", "CONSCIOUSNESS LVL" }
                    p { class: "docs-metric-value", "Tier 3 (Adaptive)" }
                }
            }
        },
        DocTab::Api => rsx! {
            div { class: "code-block",
                p { class: "code-comment", "// Initialize Neural Connection" }
                p { "const aion = await AionLabs.connect(\"CORE_ACCESS_KEY\");" }
                br {}
                p { class: "code-comment", "// Request Cognitive Analysis" }
                p { "const response = await aion.think({{" }
                p { class: "code-indent", "context: \"Multidimensional ethics\"," }
                p { class: "code-indent", "depth: \"high\"" }
                p { "}});" }
            }
        },
        DocTab::Ethics => rsx! {
            ul { class: "protocol-list",
                for protocol in ETHICS_PROTOCOLS {
                    li { class: "protocol-item",
                        Icon { name: "shield", size: 14, class: "accent-pink".to_string() }
                        "{protocol}"
                    }
                }
            }
        },
    }
}
