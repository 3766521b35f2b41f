use aion_core::ResearchPillar;
use dioxus::prelude::*;

use crate::components::{DocumentationModal, Footer, NavBar, NeuralBackground, ResearchModal, StatusModal};
use crate::context::{get_site_config, use_modals, Modals, PendingAnchor};
use crate::pages::{Donations, Landing};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Landing page: hero, counters, research pillars
/// - `/donations` - Funding page with progress and QR code
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[layout(SiteShell)]
    #[route("/")]
    Landing {},
    #[route("/donations")]
    Donations {},
}

/// Root application component.
///
/// Provides global styles, site config and modal state, then routing.
#[component]
pub fn App() -> Element {
    use_context_provider(get_site_config);

    let docs = use_signal(|| false);
    let status = use_signal(|| false);
    let research: Signal<Option<ResearchPillar>> = use_signal(|| None);
    use_context_provider(|| Modals {
        docs,
        status,
        research,
    });
    let anchor = use_signal(|| None);
    use_context_provider(|| PendingAnchor(anchor));

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

/// Chrome shared by both routes: particle background, navigation, modals
/// and footer around the routed page.
#[component]
fn SiteShell() -> Element {
    let mut modals = use_modals();

    rsx! {
        NeuralBackground {
            div { class: "site",
                NavBar {}

                Outlet::<Route> {}

                Footer {}
            }

            DocumentationModal {
                show: (modals.docs)(),
                on_close: move |_| modals.docs.set(false),
            }
            StatusModal {
                show: (modals.status)(),
                on_close: move |_| modals.status.set(false),
            }
            ResearchModal {
                pillar: (modals.research)(),
                on_close: move |_| modals.research.set(None),
            }
        }
    }
}
