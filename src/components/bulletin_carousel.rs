//! Bulletin Carousel - rotating lab news on the landing page.

use std::time::Duration;

use aion_core::{Carousel, BULLETINS};
use dioxus::prelude::*;

use crate::components::Icon;
use crate::context::use_site_config;

#[component]
pub fn BulletinCarousel() -> Element {
    let config = use_site_config();
    let interval = Duration::from_millis(config.carousel_interval_ms);
    let mut carousel = use_signal(|| Carousel::new(BULLETINS.len()));

    // Auto-advance; manual navigation just moves the index
    use_future(move || async move {
        loop {
            tokio::time::sleep(interval).await;
            carousel.write().next();
        }
    });

    let index = carousel.read().index();
    let Some(bulletin) = BULLETINS.get(index) else {
        return rsx! {};
    };

    rsx! {
        div { class: "bulletin-carousel",
            button {
                class: "carousel-arrow",
                r#type: "button",
                "aria-label": "Previous bulletin",
                onclick: move |_| {
                    carousel.write().prev();
                },
                Icon { name: "chevron-left", size: 18 }
            }

            div { class: "bulletin", key: "{index}",
                span { class: "bulletin-tag", "{bulletin.tag}" }
                h4 { class: "bulletin-headline", "{bulletin.headline}" }
                p { class: "bulletin-body", "{bulletin.body}" }
            }

            button {
                class: "carousel-arrow",
                r#type: "button",
                "aria-label": "Next bulletin",
                onclick: move |_| {
                    carousel.write().next();
                },
                Icon { name: "chevron-right", size: 18 }
            }

            div { class: "carousel-dots",
                for i in 0..BULLETINS.len() {
                    button {
                        key: "{i}",
                        r#type: "button",
                        class: if i == index { "carousel-dot active" } else { "carousel-dot" },
                        "aria-label": "Show bulletin {i + 1}",
                        onclick: move |_| {
                            carousel.write().select(i);
                        },
                    }
                }
            }
        }
    }
}
