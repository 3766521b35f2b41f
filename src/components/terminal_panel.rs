//! Terminal Panel - fake console in the technical orchestration section.

use aion_ui::ProgressBar;
use dioxus::prelude::*;

/// How far the boot bar fills once the panel is on screen.
const BOOT_PROGRESS: f64 = 0.7;

#[component]
pub fn TerminalPanel() -> Element {
    // Starts empty so the width transition plays after mount
    let mut progress = use_signal(|| 0.0);

    rsx! {
        div {
            class: "terminal-panel",
            onmounted: move |_| progress.set(BOOT_PROGRESS),

            div { class: "terminal-lights",
                span { class: "light red" }
                span { class: "light green" }
            }
            p { class: "terminal-title", "AION_TERMINAL_v4.0.2" }
            div { class: "terminal-lines",
                p { class: "terminal-strong", "{{ 'status': 'operating', 'node': 'JKT-01' }}" }
                p { "Initializing Cognitive Mapping..." }
                p { class: "terminal-accent", "[SYNC] 1,400M parameters loaded." }
                p { class: "terminal-comment", "// AION is ready for cross-dimensional processing." }
                ProgressBar { fraction: progress(), duration: 2.0, class: "terminal-progress".to_string() }
            }
        }
    }
}
