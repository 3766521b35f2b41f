//! Property-based tests for the particle background
//!
//! Uses proptest to check the batch-size, bounds and link-opacity invariants
//! over arbitrary viewports, seeds and pointer paths.

use aion_core::{
    FieldDriver, FrameClock, FrameHost, ParticleConfig, ParticleField, PointerState, Scene,
    Viewport, MAX_PARTICLES,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ============================================================================
// Strategy Generators
// ============================================================================

fn viewport_strategy() -> impl Strategy<Value = Viewport> {
    (1.0f64..2560.0, 1.0f64..1600.0).prop_map(|(w, h)| Viewport::new(w, h))
}

/// Pointer positions, including some well outside the surface
fn pointer_path_strategy() -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((-200.0f64..2800.0, -200.0f64..1800.0), 0..40)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Every resize reallocates exactly the width-dependent count
    #[test]
    fn resize_allocates_width_dependent_count(
        seed in any::<u64>(),
        viewports in prop::collection::vec(viewport_strategy(), 1..8),
    ) {
        let config = ParticleConfig::default();
        let mut host = FrameClock::with_viewport(Viewport::new(1280.0, 720.0));
        let mut driver = FieldDriver::seeded(config.clone(), seed);
        driver.mount(&mut host);

        for viewport in viewports {
            host.set_viewport(Some(viewport));
            prop_assert!(driver.on_resize(&mut host));

            let expected = if viewport.width < 768.0 { 50 } else { 120 };
            let field = driver.field().unwrap();
            prop_assert_eq!(field.particles().len(), expected);
            prop_assert!(field.particles().len() <= MAX_PARTICLES);
        }
    }

    /// Particles never leave the surface, whatever the pointer does
    #[test]
    fn particles_stay_in_bounds(
        seed in any::<u64>(),
        viewport in viewport_strategy(),
        path in pointer_path_strategy(),
        frames in 1usize..200,
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut field = ParticleField::new(ParticleConfig::default(), viewport, &mut rng);
        let mut pointer = PointerState::default();

        for p in field.particles() {
            prop_assert!(viewport.contains(p.x, p.y));
        }

        for frame in 0..frames {
            if let Some(&(x, y)) = path.get(frame % path.len().max(1)) {
                pointer.move_to(x, y);
            }
            field.step(&pointer);
            for p in field.particles() {
                prop_assert!(
                    viewport.contains(p.x, p.y),
                    "({}, {}) escaped {:?} on frame {}", p.x, p.y, viewport, frame
                );
            }
        }
    }

    /// Lines only connect pairs under the threshold, with linear opacity
    #[test]
    fn links_respect_threshold(seed in any::<u64>(), viewport in viewport_strategy()) {
        let config = ParticleConfig::default();
        let mut rng = StdRng::seed_from_u64(seed);
        let field = ParticleField::new(config.clone(), viewport, &mut rng);
        let particles = field.particles();

        let links = field.links();
        let mut expected = 0;
        for a in 0..particles.len() {
            for b in (a + 1)..particles.len() {
                if particles[a].distance_to(&particles[b]) < config.link_distance {
                    expected += 1;
                }
            }
        }
        prop_assert_eq!(links.len(), expected);

        for link in links {
            let d = particles[link.a].distance_to(&particles[link.b]);
            prop_assert!(d < config.link_distance);
            let opacity = (1.0 - d / config.link_distance) * config.link_max_opacity;
            prop_assert!((link.opacity - opacity).abs() < 1e-12);
            prop_assert!(link.opacity > 0.0 && link.opacity <= config.link_max_opacity);
        }
    }

    /// Rendering draws one dot per particle and one line per link
    #[test]
    fn render_matches_links(seed in any::<u64>(), viewport in viewport_strategy()) {
        let mut host = FrameClock::with_viewport(viewport);
        let mut driver = FieldDriver::seeded(ParticleConfig::default(), seed);
        let mut scene = Scene::default();
        driver.mount(&mut host);

        let request = host.take_due().unwrap();
        prop_assert!(driver.on_frame(&mut host, request, &mut scene));

        let field = driver.field().unwrap();
        prop_assert_eq!(scene.dots.len(), field.particles().len());
        prop_assert_eq!(scene.segments.len(), field.links().len());
        prop_assert_eq!(Some(scene.viewport), host.viewport());
    }
}
