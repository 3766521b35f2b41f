//! Neural Background - animated particle field behind every page.
//!
//! The simulation lives in `aion_core`; this component is the host side:
//! it measures the surface, runs the frame loop, forwards resize and
//! pointer events while the driver listens for them, and renders the
//! recorded scene as SVG.

use std::time::Duration;

use aion_core::{DriverState, FieldDriver, FrameClock, HostEvent, Scene, Viewport};
use dioxus::prelude::*;

use crate::context::use_site_config;

/// Full-viewport particle background wrapping the page content.
///
/// Pointer moves anywhere over `children` push nearby particles away.
#[component]
pub fn NeuralBackground(children: Element) -> Element {
    let config = use_site_config();
    let frame_interval = Duration::from_millis(config.frame_interval_ms);

    let mut driver = use_signal(move || match config.seed {
        Some(seed) => FieldDriver::seeded(config.particles.clone(), seed),
        None => FieldDriver::from_os_rng(config.particles.clone()),
    });
    let mut host = use_signal(FrameClock::new);
    let mut scene = use_signal(Scene::default);

    // Frame loop: runs whatever frame the driver last requested
    use_future(move || async move {
        loop {
            tokio::time::sleep(frame_interval).await;

            let Some(request) = host.write().take_due() else {
                match driver.peek().state() {
                    DriverState::Disabled | DriverState::Stopped => break,
                    _ => continue,
                }
            };
            driver
                .write()
                .on_frame(&mut *host.write(), request, &mut *scene.write());
        }
        tracing::debug!("Particle frame loop finished");
    });

    // Teardown: release listeners and the pending frame
    use_drop(move || {
        if let (Ok(mut driver), Ok(mut host)) = (driver.try_write(), host.try_write()) {
            driver.unmount(&mut *host);
        } else {
            tracing::debug!("Particle state already released, skipping unmount");
        }
    });

    let on_mounted = move |evt: MountedEvent| async move {
        let viewport = evt
            .data()
            .get_client_rect()
            .await
            .ok()
            .map(|rect| Viewport::new(rect.width(), rect.height()));
        host.write().set_viewport(viewport);
        driver.write().mount(&mut *host.write());
    };

    let on_resize = move |evt: ResizeEvent| {
        let viewport = evt
            .get_content_box_size()
            .ok()
            .map(|size| Viewport::new(size.width, size.height));
        host.write().set_viewport(viewport);
        if host.peek().is_listening(HostEvent::Resize) {
            driver.write().on_resize(&mut *host.write());
        }
    };

    let on_pointer = move |evt: MouseEvent| {
        if host.peek().is_listening(HostEvent::PointerMove) {
            let point = evt.client_coordinates();
            driver.write().on_pointer_move(point.x, point.y);
        }
    };

    let frame = scene.read();
    let view_box = format!("0 0 {} {}", frame.viewport.width, frame.viewport.height);

    rsx! {
        div { class: "neural-root", onmousemove: on_pointer,
            div {
                class: "neural-bg",
                "aria-hidden": "true",
                onmounted: on_mounted,
                onresize: on_resize,

                if !frame.is_empty() {
                    svg {
                        class: "neural-canvas",
                        xmlns: "http://www.w3.org/2000/svg",
                        view_box: "{view_box}",
                        for dot in frame.dots.iter() {
                            circle {
                                cx: dot.x,
                                cy: dot.y,
                                r: dot.radius,
                                fill: dot.color.css(),
                            }
                        }
                        for segment in frame.segments.iter() {
                            line {
                                x1: segment.x1,
                                y1: segment.y1,
                                x2: segment.x2,
                                y2: segment.y2,
                                stroke: segment.color.css(),
                                stroke_width: segment.width,
                            }
                        }
                    }
                }
                div { class: "neural-vignette" }
            }

            {children}
        }
    }
}
