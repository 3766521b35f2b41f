//! Site footer.

use chrono::Datelike;
use dioxus::prelude::*;

use crate::app::Route;
use crate::context::{anchor_jump, use_pending_anchor};

#[component]
pub fn Footer() -> Element {
    let navigator = use_navigator();
    let year = chrono::Local::now().year();

    let anchor = use_pending_anchor();
    let how = anchor_jump(&use_route::<Route>());

    let jump = move |id: &'static str| anchor.jump(id, how, navigator);

    rsx! {
        footer { class: "site-footer",
            div { class: "footer-inner",
                div { class: "footer-brand",
                    span { class: "brand-diamond large" }
                    "AION LABS"
                }
                p { class: "footer-blurb",
                    "Laboratorium riset independen masa depan. Membangun fondasi kesadaran buatan yang terukur dan aman."
                }
                div { class: "footer-links",
                    button { class: "footer-link", r#type: "button", onclick: move |_| jump("research"), "Research" }
                    button { class: "footer-link", r#type: "button", onclick: move |_| jump("logic"), "Logic" }
                    Link { class: "footer-link funding", to: Route::Donations {}, "Funding" }
                }
                div { class: "footer-legal",
                    "© {year} AION CORE UNIT. OPERATING IN INDONESIA."
                }
            }
        }
    }
}
