//! Site-wide context for AION Labs.
//!
//! Provides the site config and modal visibility to all components via
//! use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let mut modals = use_modals();
//! modals.docs.set(true);
//! ```

use aion_core::{ResearchPillar, SiteConfig};
use dioxus::prelude::*;

use crate::app::Route;

/// Get the site config set from command line args.
pub fn get_site_config() -> SiteConfig {
    crate::get_site_config()
}

/// Visibility of every modal on the site.
///
/// Each modal is gated independently; the research modal is open while it
/// holds a pillar.
#[derive(Clone, Copy, PartialEq)]
pub struct Modals {
    pub docs: Signal<bool>,
    pub status: Signal<bool>,
    pub research: Signal<Option<ResearchPillar>>,
}

impl Modals {
    pub fn open_docs(&mut self) {
        self.docs.set(true);
    }

    pub fn open_status(&mut self) {
        self.status.set(true);
    }

    pub fn open_research(&mut self, pillar: ResearchPillar) {
        self.research.set(Some(pillar));
    }
}

/// Hook to access the site config from context.
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>()
}

/// Hook to access modal visibility from context.
pub fn use_modals() -> Modals {
    use_context::<Modals>()
}

/// How an anchor link reaches its section from the current route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorJump {
    /// The section is on screen already
    ScrollNow,
    /// Switch to the landing page; it scrolls once mounted
    NavigateThenScroll,
}

/// Anchors only exist on the landing page.
pub fn anchor_jump(current: &Route) -> AnchorJump {
    match current {
        Route::Landing {} => AnchorJump::ScrollNow,
        _ => AnchorJump::NavigateThenScroll,
    }
}

/// Section the landing page should scroll to after a route change.
#[derive(Clone, Copy, PartialEq)]
pub struct PendingAnchor(pub Signal<Option<&'static str>>);

impl PendingAnchor {
    /// Bring the section `id` into view, navigating first if needed.
    pub fn jump(mut self, id: &'static str, how: AnchorJump, navigator: Navigator) {
        match how {
            AnchorJump::ScrollNow => scroll_to(id),
            AnchorJump::NavigateThenScroll => {
                self.0.set(Some(id));
                navigator.push(Route::Landing {});
            }
        }
    }

    /// Scroll to the deferred anchor, if one is waiting. Clears it.
    pub fn resolve(mut self) {
        let pending = self.0.write().take();
        if let Some(id) = pending {
            tracing::debug!(anchor = id, "Scrolling to deferred anchor");
            scroll_to(id);
        }
    }
}

/// Hook to access the deferred anchor from context.
pub fn use_pending_anchor() -> PendingAnchor {
    use_context::<PendingAnchor>()
}

/// Scroll the element with `id` into view (same-page anchors).
pub fn scroll_to(id: &'static str) {
    let _ = dioxus::document::eval(&format!(
        "document.getElementById('{}')?.scrollIntoView({{ behavior: 'smooth' }});",
        id
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_scrolls_in_place() {
        assert_eq!(anchor_jump(&Route::Landing {}), AnchorJump::ScrollNow);
    }

    #[test]
    fn other_routes_defer_until_landing_mounts() {
        assert_eq!(
            anchor_jump(&Route::Donations {}),
            AnchorJump::NavigateThenScroll
        );
    }
}
