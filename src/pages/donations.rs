//! Donations page - funding goal, allocation and QR code.

use aion_core::FUNDING_LINES;
use aion_ui::ProgressBar;
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{DonationQr, Icon};
use crate::context::use_site_config;

/// Donations page component.
#[component]
pub fn Donations() -> Element {
    let config = use_site_config();
    let donation = config.donation;
    let goal = donation.goal();

    // Start empty so the bar grows in after mount
    let mut shown = use_signal(|| 0.0);
    let fraction = goal.fraction();

    let summary = goal.summary(&donation.currency);
    let percent = goal.percent_label();
    let status = if goal.is_met() { "Goal reached" } else { "Raised so far" };

    rsx! {
        main { class: "donations",
            div { class: "donations-inner reveal",
                Link { class: "back-link", to: Route::Landing {},
                    Icon { name: "arrow-left", size: 14 }
                    "Laboratory Core"
                }

                div { class: "donations-grid",
                    div {
                        h1 { class: "donations-title",
                            "Fuel the"
                            br {}
                            span { class: "gradient-text", "Future." }
                        }
                        p { class: "donations-text",
                            "Dukungan Anda memungkinkan riset independen kami tetap transparan dan bebas dari bias korporasi."
                        }
                        div { class: "funding-lines",
                            for line in FUNDING_LINES {
                                div { class: "funding-line", key: "{line}",
                                    Icon { name: "chevron-right", size: 14 }
                                    "{line}"
                                }
                            }
                        }

                        div {
                            class: "donation-progress",
                            onmounted: move |_| shown.set(fraction),
                            div { class: "donation-figures",
                                span { class: "donation-status", "{status}" }
                                span { class: "donation-summary", "{summary}" }
                            }
                            ProgressBar { fraction: shown(), duration: 1.5, label: percent }
                        }
                    }

                    div { class: "qr-card-wrap",
                        div { class: "qr-card-glow" }
                        div { class: "qr-card",
                            DonationQr { data: donation.qr_payload.clone(), size: 250 }
                            p { class: "qr-caption", "Scan to Donate" }
                        }
                    }
                }
            }
        }
    }
}
