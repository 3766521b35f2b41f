//! Particle, viewport and simulation constants.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::pointer::PointerState;
use super::surface::Rgba;

/// Hard cap on the batch size. The neighbor scan is O(n²) per frame.
pub const MAX_PARTICLES: usize = 120;

/// Size of the drawing surface in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether anything can be drawn onto a surface of this size.
    pub fn is_drawable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Whether a point lies inside the surface, edges included.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }
}

/// Tunables for the particle background.
///
/// Defaults reproduce the landing page look: cyan dots, violet links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Widths below this use `compact_count`
    pub compact_breakpoint: f64,
    /// Batch size on narrow viewports
    pub compact_count: usize,
    /// Batch size at or above the breakpoint
    pub full_count: usize,
    /// Velocity components are drawn from `[-max_speed, max_speed)` px/frame
    pub max_speed: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    /// Pointer influence distance
    pub repulsion_radius: f64,
    /// Fraction of the pointer displacement applied per frame
    pub repulsion_strength: f64,
    /// Neighbor threshold for connecting lines
    pub link_distance: f64,
    /// Line opacity for two coincident particles
    pub link_max_opacity: f64,
    pub link_width: f64,
    pub particle_color: Rgba,
    /// Base link colour; alpha is replaced per line
    pub link_color: Rgba,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            compact_breakpoint: 768.0,
            compact_count: 50,
            full_count: MAX_PARTICLES,
            max_speed: 0.2,
            min_radius: 0.5,
            max_radius: 1.7,
            repulsion_radius: 150.0,
            repulsion_strength: 0.02,
            link_distance: 180.0,
            link_max_opacity: 0.2,
            link_width: 0.8,
            particle_color: Rgba::new(34, 211, 238, 0.5),
            link_color: Rgba::new(139, 92, 246, 1.0),
        }
    }
}

impl ParticleConfig {
    /// Batch size for a viewport of the given width.
    pub fn particle_count(&self, width: f64) -> usize {
        let count = if width < self.compact_breakpoint {
            self.compact_count
        } else {
            self.full_count
        };
        count.min(MAX_PARTICLES)
    }

    /// Problems that would make the simulation misbehave, if any.
    pub fn validate(&self) -> Result<(), String> {
        if self.compact_count > self.full_count {
            return Err("compact_count must not exceed full_count".to_string());
        }
        if self.full_count > MAX_PARTICLES {
            return Err(format!("full_count must be at most {}", MAX_PARTICLES));
        }
        if !(self.max_speed >= 0.0) {
            return Err("max_speed must be non-negative".to_string());
        }
        if !(self.min_radius > 0.0 && self.min_radius <= self.max_radius) {
            return Err("radius range must satisfy 0 < min_radius <= max_radius".to_string());
        }
        if !(self.repulsion_radius >= 0.0 && self.link_distance >= 0.0) {
            return Err("distances must be non-negative".to_string());
        }
        if !(0.0..=1.0).contains(&self.repulsion_strength) {
            return Err("repulsion_strength must be within [0, 1]".to_string());
        }
        if !(0.0..=1.0).contains(&self.link_max_opacity) {
            return Err("link_max_opacity must be within [0, 1]".to_string());
        }
        Ok(())
    }
}

/// A single drifting point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
}

impl Particle {
    /// Random particle somewhere on the surface.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport, config: &ParticleConfig) -> Self {
        Self {
            x: rng.random::<f64>() * viewport.width,
            y: rng.random::<f64>() * viewport.height,
            vx: (rng.random::<f64>() - 0.5) * 2.0 * config.max_speed,
            vy: (rng.random::<f64>() - 0.5) * 2.0 * config.max_speed,
            radius: config.min_radius + rng.random::<f64>() * (config.max_radius - config.min_radius),
        }
    }

    /// Advance one frame: pointer repulsion, drift, then wall reflection.
    pub fn step(&mut self, pointer: &PointerState, viewport: Viewport, config: &ParticleConfig) {
        if pointer.active {
            let dx = pointer.x - self.x;
            let dy = pointer.y - self.y;
            if (dx * dx + dy * dy).sqrt() < config.repulsion_radius {
                self.x -= dx * config.repulsion_strength;
                self.y -= dy * config.repulsion_strength;
            }
        }

        self.x += self.vx;
        self.y += self.vy;

        // Reflect off the walls and clamp back onto the surface
        if self.x < 0.0 {
            self.x = 0.0;
            self.vx = self.vx.abs();
        } else if self.x > viewport.width {
            self.x = viewport.width;
            self.vx = -self.vx.abs();
        }
        if self.y < 0.0 {
            self.y = 0.0;
            self.vy = self.vy.abs();
        } else if self.y > viewport.height {
            self.y = viewport.height;
            self.vy = -self.vy.abs();
        }
    }

    /// Euclidean distance to another particle.
    pub fn distance_to(&self, other: &Particle) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn still(x: f64, y: f64) -> Particle {
        Particle { x, y, vx: 0.0, vy: 0.0, radius: 1.0 }
    }

    #[test]
    fn count_depends_on_breakpoint() {
        let config = ParticleConfig::default();
        assert_eq!(config.particle_count(767.9), 50);
        assert_eq!(config.particle_count(768.0), 120);
        assert_eq!(config.particle_count(1920.0), 120);
    }

    #[test]
    fn count_is_capped() {
        let config = ParticleConfig {
            full_count: 500,
            ..ParticleConfig::default()
        };
        assert_eq!(config.particle_count(2000.0), MAX_PARTICLES);
    }

    #[test]
    fn spawn_respects_ranges() {
        let config = ParticleConfig::default();
        let viewport = Viewport::new(400.0, 300.0);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            let p = Particle::spawn(&mut rng, viewport, &config);
            assert!(viewport.contains(p.x, p.y));
            assert!(p.vx.abs() <= config.max_speed);
            assert!(p.vy.abs() <= config.max_speed);
            assert!(p.radius >= config.min_radius && p.radius <= config.max_radius);
        }
    }

    #[test]
    fn reflects_off_right_wall() {
        let config = ParticleConfig::default();
        let viewport = Viewport::new(100.0, 100.0);
        let mut p = Particle { vx: 0.2, ..still(99.9, 50.0) };
        p.step(&PointerState::default(), viewport, &config);
        assert_eq!(p.x, 100.0);
        assert_eq!(p.vx, -0.2);
    }

    #[test]
    fn reflects_off_top_wall() {
        let config = ParticleConfig::default();
        let viewport = Viewport::new(100.0, 100.0);
        let mut p = Particle { vy: -0.2, ..still(50.0, 0.1) };
        p.step(&PointerState::default(), viewport, &config);
        assert_eq!(p.y, 0.0);
        assert_eq!(p.vy, 0.2);
    }

    #[test]
    fn pointer_pushes_nearby_particle_away() {
        let config = ParticleConfig::default();
        let viewport = Viewport::new(500.0, 500.0);
        let mut pointer = PointerState::default();
        pointer.move_to(200.0, 200.0);

        let mut p = still(250.0, 200.0);
        p.step(&pointer, viewport, &config);
        // dx = -50, so x moves by +1.0
        assert!((p.x - 251.0).abs() < 1e-9);
        assert_eq!(p.y, 200.0);
    }

    #[test]
    fn pointer_ignores_distant_particle() {
        let config = ParticleConfig::default();
        let viewport = Viewport::new(500.0, 500.0);
        let mut pointer = PointerState::default();
        pointer.move_to(0.0, 0.0);

        let mut p = still(400.0, 400.0);
        p.step(&pointer, viewport, &config);
        assert_eq!((p.x, p.y), (400.0, 400.0));
    }

    #[test]
    fn inactive_pointer_has_no_effect() {
        let config = ParticleConfig::default();
        let viewport = Viewport::new(500.0, 500.0);
        let pointer = PointerState { x: 250.0, y: 250.0, active: false };

        let mut p = still(260.0, 250.0);
        p.step(&pointer, viewport, &config);
        assert_eq!(p.x, 260.0);
    }

    #[test]
    fn default_config_is_valid() {
        assert!(ParticleConfig::default().validate().is_ok());
    }

    #[test]
    fn inverted_radius_range_is_invalid() {
        let config = ParticleConfig {
            min_radius: 2.0,
            max_radius: 1.0,
            ..ParticleConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
