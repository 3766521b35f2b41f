//! Stat Counter - figure that counts up to its target on mount.

use std::time::Duration;

use aion_core::CounterRamp;
use dioxus::prelude::*;

use crate::context::use_site_config;

/// Props for the stat counter component.
#[derive(Props, Clone, PartialEq)]
pub struct StatCounterProps {
    pub label: &'static str,
    pub target: f64,
    /// Unit appended to the figure ("M", "%", ...)
    #[props(default = "")]
    pub suffix: &'static str,
}

/// Counts from zero to `target` in `counter_steps` increments, one every
/// `counter_interval_ms`, then stops.
#[component]
pub fn StatCounter(props: StatCounterProps) -> Element {
    let config = use_site_config();
    let steps = config.counter_steps;
    let interval = Duration::from_millis(config.counter_interval_ms);
    let target = props.target;

    let mut ramp = use_signal(move || CounterRamp::new(target, steps));

    use_future(move || async move {
        while !ramp.peek().is_done() {
            tokio::time::sleep(interval).await;
            ramp.write().tick();
        }
    });

    let figure = ramp.read().display(props.suffix);

    rsx! {
        div { class: "stat-box",
            span { class: "stat-value", "{figure}" }
            span { class: "stat-label", "{props.label}" }
        }
    }
}
