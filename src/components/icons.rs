//! Lucide icons used across the site, inlined as SVG.

use dioxus::prelude::*;

/// Render a Lucide icon by name. Unknown names render an empty circle.
#[component]
pub fn Icon(
    name: &'static str,
    #[props(default = 18)] size: u32,
    #[props(default)] class: Option<String>,
) -> Element {
    rsx! {
        svg {
            class: class.unwrap_or_default(),
            xmlns: "http://www.w3.org/2000/svg",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            {icon_body(name)}
        }
    }
}

fn icon_body(name: &str) -> Element {
    match name {
        "activity" => rsx! {
            path { d: "M22 12h-4l-3 9L9 3l-3 9H2" }
        },
        "arrow-left" => rsx! {
            path { d: "m12 19-7-7 7-7" }
            path { d: "M19 12H5" }
        },
        "arrow-right" => rsx! {
            path { d: "M5 12h14" }
            path { d: "m12 5 7 7-7 7" }
        },
        "binary" => rsx! {
            rect { x: "14", y: "14", width: "4", height: "6", rx: "2" }
            rect { x: "6", y: "4", width: "4", height: "6", rx: "2" }
            path { d: "M6 20h4" }
            path { d: "M14 10h4" }
            path { d: "M6 14h2v6" }
            path { d: "M14 4h2v6" }
        },
        "book-open" => rsx! {
            path { d: "M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z" }
            path { d: "M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z" }
        },
        "brain" => rsx! {
            path { d: "M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18Z" }
            path { d: "M12 5a3 3 0 1 1 5.997.125 4 4 0 0 1 2.526 5.77 4 4 0 0 1-.556 6.588A4 4 0 1 1 12 18Z" }
            path { d: "M15 13a4.5 4.5 0 0 1-3-4 4.5 4.5 0 0 1-3 4" }
            path { d: "M12 5v13" }
        },
        "chevron-left" => rsx! {
            path { d: "m15 18-6-6 6-6" }
        },
        "chevron-right" => rsx! {
            path { d: "m9 18 6-6-6-6" }
        },
        "cpu" => rsx! {
            rect { x: "4", y: "4", width: "16", height: "16", rx: "2" }
            rect { x: "9", y: "9", width: "6", height: "6" }
            path { d: "M15 2v2M15 20v2M2 15h2M2 9h2M20 15h2M20 9h2M9 2v2M9 20v2" }
        },
        "gauge" => rsx! {
            path { d: "m12 14 4-4" }
            path { d: "M3.34 19a10 10 0 1 1 17.32 0" }
        },
        "layers" => rsx! {
            path { d: "M12.83 2.18a2 2 0 0 0-1.66 0L2.6 6.08a1 1 0 0 0 0 1.83l8.58 3.91a2 2 0 0 0 1.66 0l8.58-3.9a1 1 0 0 0 0-1.83Z" }
            path { d: "m22 17.65-9.17 4.16a2 2 0 0 1-1.66 0L2 17.65" }
            path { d: "m22 12.65-9.17 4.16a2 2 0 0 1-1.66 0L2 12.65" }
        },
        "search" => rsx! {
            circle { cx: "11", cy: "11", r: "8" }
            path { d: "m21 21-4.3-4.3" }
        },
        "shield" => rsx! {
            path { d: "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z" }
        },
        _ => rsx! {
            circle { cx: "12", cy: "12", r: "9" }
        },
    }
}
