//! Feature Card - one research pillar on the landing page.

use aion_core::ResearchPillar;
use dioxus::prelude::*;

use crate::components::Icon;
use crate::context::use_modals;

/// Props for the feature card component.
#[derive(Props, Clone, PartialEq)]
pub struct FeatureCardProps {
    pub pillar: ResearchPillar,
}

/// Research pillar card. Clicking it opens the research detail modal.
#[component]
pub fn FeatureCard(props: FeatureCardProps) -> Element {
    let mut modals = use_modals();
    let pillar = props.pillar;
    let delay = pillar.reveal_delay();

    rsx! {
        button {
            class: "feature-card reveal",
            r#type: "button",
            style: "animation-delay: {delay}s;",
            onclick: move |_| modals.open_research(pillar),

            div { class: "feature-icon",
                Icon { name: pillar.icon(), size: 30 }
            }
            h3 { class: "feature-title", "{pillar.title()}" }
            ul { class: "feature-items",
                for item in pillar.items() {
                    li {
                        span { class: "feature-bullet" }
                        "{item}"
                    }
                }
            }
            span { class: "feature-more", "details" }
        }
    }
}
