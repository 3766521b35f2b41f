//! Page section wrapper with the site's standard padding and width.

use dioxus::prelude::*;

#[component]
pub fn Section(
    #[props(default)] id: Option<String>,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let class = match class {
        Some(extra) => format!("section {}", extra),
        None => "section".to_string(),
    };

    rsx! {
        section { id: id, class: "{class}", {children} }
    }
}
