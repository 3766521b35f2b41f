//! The particle batch, its per-frame update and its rendering.

use rand::Rng;

use super::particle::{Particle, ParticleConfig, Viewport};
use super::pointer::PointerState;
use super::surface::Surface;

/// A connecting line between two particles closer than the neighbor
/// threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    /// Index of the first particle (always `< b`)
    pub a: usize,
    pub b: usize,
    /// `(1 - distance / link_distance) * link_max_opacity`
    pub opacity: f64,
}

/// Fixed-size set of drifting particles on a surface.
#[derive(Debug, Clone)]
pub struct ParticleField {
    config: ParticleConfig,
    viewport: Viewport,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Create a field and allocate its first batch.
    pub fn new<R: Rng + ?Sized>(config: ParticleConfig, viewport: Viewport, rng: &mut R) -> Self {
        let mut field = Self {
            config,
            viewport,
            particles: Vec::new(),
        };
        field.populate(viewport, rng);
        field
    }

    /// Discard the current batch and allocate a fresh one sized for
    /// `viewport`.
    pub fn populate<R: Rng + ?Sized>(&mut self, viewport: Viewport, rng: &mut R) {
        let count = self.config.particle_count(viewport.width);
        self.viewport = viewport;
        self.particles = (0..count)
            .map(|_| Particle::spawn(rng, viewport, &self.config))
            .collect();

        tracing::debug!(
            count,
            width = viewport.width,
            height = viewport.height,
            "Particle batch allocated"
        );
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    /// Advance every particle by one frame.
    pub fn step(&mut self, pointer: &PointerState) {
        for particle in &mut self.particles {
            particle.step(pointer, self.viewport, &self.config);
        }
    }

    /// Opacity of a line between two particles `distance` apart, or `None`
    /// when they are too far apart to be linked.
    pub fn link_opacity(&self, distance: f64) -> Option<f64> {
        let threshold = self.config.link_distance;
        (distance < threshold).then(|| (1.0 - distance / threshold) * self.config.link_max_opacity)
    }

    /// Every unordered pair closer than the neighbor threshold.
    pub fn links(&self) -> Vec<Link> {
        let mut links = Vec::new();
        for a in 0..self.particles.len() {
            for b in (a + 1)..self.particles.len() {
                let distance = self.particles[a].distance_to(&self.particles[b]);
                if let Some(opacity) = self.link_opacity(distance) {
                    links.push(Link { a, b, opacity });
                }
            }
        }
        links
    }

    /// Draw the current frame: dots first, then neighbor lines.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear(self.viewport);

        for p in &self.particles {
            surface.fill_circle(p.x, p.y, p.radius, self.config.particle_color);
        }

        for link in self.links() {
            let from = &self.particles[link.a];
            let to = &self.particles[link.b];
            surface.stroke_line(
                (from.x, from.y),
                (to.x, to.y),
                self.config.link_color.with_alpha(link.opacity),
                self.config.link_width,
            );
        }
    }

    #[cfg(test)]
    pub(crate) fn particles_mut(&mut self) -> &mut Vec<Particle> {
        &mut self.particles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particles::surface::Scene;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn field_with(points: &[(f64, f64)]) -> ParticleField {
        let mut rng = StdRng::seed_from_u64(1);
        let mut field = ParticleField::new(
            ParticleConfig::default(),
            Viewport::new(1000.0, 1000.0),
            &mut rng,
        );
        *field.particles_mut() = points
            .iter()
            .map(|&(x, y)| Particle { x, y, vx: 0.0, vy: 0.0, radius: 1.0 })
            .collect();
        field
    }

    #[test]
    fn populate_replaces_batch() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut field =
            ParticleField::new(ParticleConfig::default(), Viewport::new(1280.0, 720.0), &mut rng);
        assert_eq!(field.particles().len(), 120);

        field.populate(Viewport::new(600.0, 900.0), &mut rng);
        assert_eq!(field.particles().len(), 50);
        assert_eq!(field.viewport(), Viewport::new(600.0, 900.0));
    }

    #[test]
    fn coincident_particles_get_max_opacity() {
        let field = field_with(&[(10.0, 10.0), (10.0, 10.0)]);
        let links = field.links();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].opacity, 0.2);
    }

    #[test]
    fn particles_at_threshold_are_not_linked() {
        let field = field_with(&[(0.0, 0.0), (180.0, 0.0)]);
        assert!(field.links().is_empty());
    }

    #[test]
    fn opacity_falls_off_linearly() {
        let field = field_with(&[(0.0, 0.0), (90.0, 0.0)]);
        let links = field.links();
        assert_eq!(links.len(), 1);
        assert!((links[0].opacity - 0.1).abs() < 1e-12);
    }

    #[test]
    fn links_are_unordered_pairs() {
        let field = field_with(&[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0)]);
        let pairs: Vec<_> = field.links().iter().map(|l| (l.a, l.b)).collect();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn render_draws_dots_and_links() {
        let field = field_with(&[(0.0, 0.0), (30.0, 40.0), (900.0, 900.0)]);
        let mut scene = Scene::default();
        field.render(&mut scene);

        assert_eq!(scene.dots.len(), 3);
        assert_eq!(scene.segments.len(), 1);
        let line = scene.segments[0];
        assert_eq!((line.x1, line.y1, line.x2, line.y2), (0.0, 0.0, 30.0, 40.0));
        assert_eq!(line.width, 0.8);
        assert_eq!((line.color.r, line.color.g, line.color.b), (139, 92, 246));
    }
}
