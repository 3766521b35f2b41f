//! Progress Bar Component
//!
//! Thin track with a cyan fill. The fill width animates through a CSS
//! transition, so bumping `fraction` from 0 after mount gives the
//! grow-into-view effect.

use dioxus::prelude::*;

/// Properties for the ProgressBar component
#[derive(Clone, PartialEq, Props)]
pub struct ProgressBarProps {
    /// Filled share in `[0, 1]`; out-of-range values are clamped
    pub fraction: f64,
    /// Transition duration in seconds
    #[props(default = 2.0)]
    pub duration: f64,
    /// Optional caption rendered to the right of the track
    #[props(default)]
    pub label: Option<String>,
    #[props(default)]
    pub class: Option<String>,
}

/// CSS width for a fill fraction, e.g. `0.5` → `"50.00%"`.
pub fn fill_width(fraction: f64) -> String {
    let fraction = if fraction.is_finite() { fraction.clamp(0.0, 1.0) } else { 0.0 };
    format!("{:.2}%", fraction * 100.0)
}

#[component]
pub fn ProgressBar(props: ProgressBarProps) -> Element {
    let width = fill_width(props.fraction);
    let class = match props.class.as_deref() {
        Some(extra) => format!("progress {}", extra),
        None => "progress".to_string(),
    };

    rsx! {
        div { class: "{class}",
            div {
                class: "progress-track",
                role: "progressbar",
                "aria-valuemin": "0",
                "aria-valuemax": "100",
                "aria-valuenow": "{width}",
                div {
                    class: "progress-fill",
                    style: "width: {width}; transition: width {props.duration}s ease-out;",
                }
            }
            if let Some(label) = props.label.as_ref() {
                span { class: "progress-label", "{label}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_is_a_percentage() {
        assert_eq!(fill_width(0.5), "50.00%");
        assert_eq!(fill_width(0.7), "70.00%");
    }

    #[test]
    fn width_is_clamped() {
        assert_eq!(fill_width(-1.0), "0.00%");
        assert_eq!(fill_width(3.0), "100.00%");
        assert_eq!(fill_width(f64::NAN), "0.00%");
    }
}
