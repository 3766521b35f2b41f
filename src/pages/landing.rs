//! Landing page - hero, live counters and the research overview.

use aion_core::{ResearchPillar, TECH_ITEMS};
use aion_ui::{CoreState, StatusBadge};
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{BulletinCarousel, FeatureCard, Icon, Section, StatCounter, TerminalPanel};
use crate::context::{use_modals, use_pending_anchor};

/// Landing page component.
#[component]
pub fn Landing() -> Element {
    let navigator = use_navigator();
    let mut modals = use_modals();
    let anchor = use_pending_anchor();

    rsx! {
        main {
            class: "landing",
            // Sections exist once this fires; finish a jump from another route
            onmounted: move |_| anchor.resolve(),

            // Hero
            section { class: "hero",
                div { class: "hero-inner reveal",
                    StatusBadge {
                        state: CoreState::Active,
                        label: "Neural Core Active".to_string(),
                    }
                    h1 { class: "hero-title",
                        "Beyond"
                        br {}
                        span { class: "hero-title-fade", "Limits." }
                    }
                    p { class: "hero-tagline",
                        "Laboratorium riset independen yang merancang masa depan "
                        strong { "Artificial Consciousness" }
                        " melalui pendekatan etis dan modular."
                    }

                    div { class: "hero-actions",
                        button {
                            class: "btn-primary",
                            r#type: "button",
                            onclick: move |_| {
                                navigator.push(Route::Donations {});
                            },
                            "Support Research"
                            Icon { name: "arrow-right", size: 20 }
                        }
                        button {
                            class: "btn-secondary",
                            r#type: "button",
                            onclick: move |_| modals.open_docs(),
                            "Documentation"
                            Icon { name: "search", size: 18 }
                        }
                    }
                }
            }

            // Stats
            Section { class: "section-flush".to_string(),
                div { class: "stats-grid",
                    StatCounter { label: "Neural Nodes", target: 1400.0, suffix: "M" }
                    StatCounter { label: "Global Sync", target: 99.9, suffix: "%" }
                    StatCounter { label: "Processing", target: 4.8, suffix: "PF" }
                    StatCounter { label: "Latency", target: 0.2, suffix: "ms" }
                }
            }

            // Main research focus
            Section { id: "research".to_string(),
                div { class: "section-head",
                    div {
                        h2 { class: "section-title",
                            "Strategic"
                            br {}
                            "Research."
                        }
                        div { class: "section-rule" }
                    }
                    p { class: "section-note",
                        "// Pengembangan teknologi kognitif tingkat lanjut melalui tiga pilar fundamental."
                    }
                }
                div { class: "feature-grid",
                    for pillar in ResearchPillar::ALL {
                        FeatureCard { key: "{pillar.title()}", pillar: pillar }
                    }
                }
            }

            // Logic interface
            Section { id: "logic".to_string(), class: "section-band".to_string(),
                div { class: "logic-grid",
                    div {
                        h3 { class: "logic-title",
                            "Technical"
                            br {}
                            "Orchestration."
                        }
                        div { class: "tech-list",
                            for item in TECH_ITEMS {
                                div { class: "tech-item", key: "{item.title}",
                                    div { class: "tech-icon",
                                        Icon { name: item.icon, size: 20 }
                                    }
                                    div {
                                        h5 { class: "tech-title", "{item.title}" }
                                        p { class: "tech-desc", "{item.description}" }
                                    }
                                }
                            }
                        }
                    }
                    TerminalPanel {}
                }
            }

            // Lab bulletins
            Section { class: "section-compact".to_string(),
                BulletinCarousel {}
            }
        }
    }
}
