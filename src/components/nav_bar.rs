//! Navigation Bar Component
//!
//! Fixed top bar: brand link on the left, section links and modal toggles
//! in the middle (hidden on narrow windows), funding button on the right.

use dioxus::prelude::*;

use crate::app::Route;
use crate::context::{anchor_jump, use_modals, use_pending_anchor};

#[component]
pub fn NavBar() -> Element {
    let navigator = use_navigator();
    let mut modals = use_modals();
    let anchor = use_pending_anchor();
    let how = anchor_jump(&use_route::<Route>());

    let on_focus = move |_| anchor.jump("research", how, navigator);

    rsx! {
        nav { class: "nav-bar",
            div { class: "nav-inner",
                Link { class: "nav-brand", to: Route::Landing {},
                    span { class: "brand-diamond" }
                    "AION"
                }

                div { class: "nav-right",
                    div { class: "nav-links",
                        button { class: "nav-link", r#type: "button", onclick: on_focus, "Focus" }
                        button {
                            class: "nav-link",
                            r#type: "button",
                            onclick: move |_| modals.open_docs(),
                            "Docs"
                        }
                        button {
                            class: "nav-link",
                            r#type: "button",
                            onclick: move |_| modals.open_status(),
                            "Status"
                        }
                    }
                    Link { class: "nav-funding", to: Route::Donations {}, "Funding" }
                }
            }
        }
    }
}
