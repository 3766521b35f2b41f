//! Status Modal - simulated live dashboard of the neural core.
//!
//! Figures refresh every `status_interval_ms` while the modal is open. The
//! refresh task belongs to the inner dashboard, so closing the modal stops it.

use std::time::Duration;

use aion_core::{group_thousands, StatusFeed};
use aion_ui::{CoreState, ModalFrame, ProgressBar, StatusBadge};
use dioxus::prelude::*;

use crate::components::Icon;
use crate::context::use_site_config;

#[component]
pub fn StatusModal(show: bool, on_close: EventHandler<()>) -> Element {
    rsx! {
        ModalFrame {
            show: show,
            on_close: on_close,
            title: "System Status".to_string(),
            class: "status-modal".to_string(),
            StatusDashboard {}
        }
    }
}

#[component]
fn StatusDashboard() -> Element {
    let config = use_site_config();
    let interval = Duration::from_millis(config.status_interval_ms);

    let mut feed = use_signal(move || match config.seed {
        Some(seed) => StatusFeed::seeded(seed),
        None => StatusFeed::from_os_rng(),
    });
    let mut refreshing = use_signal(|| false);

    use_future(move || async move {
        loop {
            tokio::time::sleep(interval).await;
            refreshing.set(true);
            feed.write().tick();
            tokio::time::sleep(Duration::from_millis(300)).await;
            refreshing.set(false);
        }
    });

    let feed = feed.read();
    let snapshot = feed.snapshot();
    let online = snapshot.online_regions();
    let state = if online < snapshot.regions.len() {
        CoreState::Offline
    } else if refreshing() {
        CoreState::Syncing
    } else {
        CoreState::Active
    };
    let badge = format!("{} · {}/{} regions", state.label(), online, snapshot.regions.len());
    let nodes = format!("{}M", group_thousands(f64::from(snapshot.active_nodes)));
    let load = format!("{:.1}%", snapshot.neural_load_pct);
    let latency = format!("{:.2}ms", snapshot.sync_latency_ms);
    let throughput = format!("{:.2}PF", snapshot.throughput_pf);

    rsx! {
        div { class: "status-dashboard",
            div { class: "status-header",
                Icon { name: "gauge", size: 20, class: "accent-cyan".to_string() }
                h4 { class: "docs-heading", "Live Core Telemetry" }
            }
            StatusBadge { state: state, label: badge }

            div { class: "status-grid",
                div { class: "docs-metric",
                    p { class: "docs-metric-label accent-cyan", "NEURAL LOAD" }
                    p { class: "docs-metric-value", "{load}" }
                }
                div { class: "docs-metric",
                    p { class: "docs-metric-label accent-violet", "ACTIVE NODES" }
                    p { class: "docs-metric-value", "{nodes}" }
                }
                div { class: "docs-metric",
                    p { class: "docs-metric-label accent-cyan", "SYNC LATENCY" }
                    p { class: "docs-metric-value", "{latency}" }
                }
                div { class: "docs-metric",
                    p { class: "docs-metric-label accent-violet", "THROUGHPUT" }
                    p { class: "docs-metric-value", "{throughput}" }
                }
            }

            div { class: "region-list",
                for region in snapshot.regions.iter() {
                    div { class: "region-row", key: "{region.node}",
                        span {
                            class: if region.online { "status-dot live" } else { "status-dot" },
                        }
                        span { class: "region-node", "{region.node}" }
                        span { class: "region-city", "{region.city}" }
                        ProgressBar {
                            fraction: f64::from(region.load_pct) / 100.0,
                            duration: 0.6,
                            label: format!("{}%", region.load_pct),
                        }
                    }
                }
            }

            div { class: "code-block status-log",
                if feed.ticks() == 0 {
                    p { class: "code-comment", "// awaiting first telemetry frame..." }
                }
                for line in feed.log() {
                    p { "{line}" }
                }
            }
        }
    }
}
