//! Research Modal - detail view for one research pillar.

use aion_core::ResearchPillar;
use aion_ui::{ModalFrame, ProgressBar};
use dioxus::prelude::*;

use crate::components::Icon;

/// Open while `pillar` is set.
#[component]
pub fn ResearchModal(pillar: Option<ResearchPillar>, on_close: EventHandler<()>) -> Element {
    let Some(pillar) = pillar else {
        return rsx! {};
    };

    rsx! {
        ModalFrame {
            show: true,
            on_close: on_close,
            title: pillar.title().to_string(),
            class: "research-modal".to_string(),

            div { class: "research-detail",
                div { class: "research-header",
                    div { class: "feature-icon",
                        Icon { name: pillar.icon(), size: 26 }
                    }
                    h3 { class: "research-title", "{pillar.title()}" }
                }
                p { class: "docs-text", "{pillar.summary()}" }

                h4 { class: "research-subheading", "Focus" }
                ul { class: "feature-items",
                    for item in pillar.items() {
                        li {
                            span { class: "feature-bullet" }
                            "{item}"
                        }
                    }
                }

                h4 { class: "research-subheading", "Milestones" }
                div { class: "milestones",
                    for milestone in pillar.milestones() {
                        div { class: "milestone", key: "{milestone.title}",
                            span { class: "milestone-title", "{milestone.title}" }
                            ProgressBar {
                                fraction: f64::from(milestone.progress_pct) / 100.0,
                                duration: 1.2,
                                label: format!("{}%", milestone.progress_pct),
                            }
                        }
                    }
                }
            }
        }
    }
}
