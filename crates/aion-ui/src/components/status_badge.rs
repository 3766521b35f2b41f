//! Core Status Badge Component
//!
//! Pill with a pulsing dot announcing the state of the (simulated) neural
//! core:
//! - "neural core active" - nominal
//! - "neural core syncing" - a refresh is in flight
//! - "neural core offline" - shown when a region drops off the board

use dioxus::prelude::*;

/// State of the neural core as shown to visitors
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CoreState {
    #[default]
    Active,
    Syncing,
    Offline,
}

impl CoreState {
    /// Returns the display label for this state
    pub fn label(&self) -> &'static str {
        match self {
            CoreState::Active => "neural core active",
            CoreState::Syncing => "neural core syncing",
            CoreState::Offline => "neural core offline",
        }
    }

    /// Whether the dot should pulse
    pub fn is_live(&self) -> bool {
        matches!(self, CoreState::Active | CoreState::Syncing)
    }
}

/// Properties for the StatusBadge component
#[derive(Clone, PartialEq, Props)]
pub struct StatusBadgeProps {
    pub state: CoreState,
    /// Replaces the default label
    #[props(default)]
    pub label: Option<String>,
}

/// # Example
///
/// ```rust,ignore
/// rsx! {
///     StatusBadge { state: CoreState::Active }
/// }
/// ```
#[component]
pub fn StatusBadge(props: StatusBadgeProps) -> Element {
    let label = props
        .label
        .clone()
        .unwrap_or_else(|| props.state.label().to_string());
    let live = props.state.is_live();

    rsx! {
        div { class: "status-badge",
            span {
                class: if live { "status-dot live" } else { "status-dot" },
                role: "img",
                "aria-label": if live { "Live" } else { "Offline" },
            }
            span { class: "status-label", "{label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_state_labels() {
        assert_eq!(CoreState::Active.label(), "neural core active");
        assert_eq!(CoreState::Syncing.label(), "neural core syncing");
        assert_eq!(CoreState::Offline.label(), "neural core offline");
    }

    #[test]
    fn core_state_liveness() {
        assert!(CoreState::Active.is_live());
        assert!(CoreState::Syncing.is_live());
        assert!(!CoreState::Offline.is_live());
    }

    #[test]
    fn core_state_default_is_active() {
        assert_eq!(CoreState::default(), CoreState::Active);
    }
}
