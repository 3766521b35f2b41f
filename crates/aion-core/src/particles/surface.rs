//! Drawing abstraction for the particle background.

use serde::{Deserialize, Serialize};

use super::particle::Viewport;

/// An sRGB colour with straight alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Same colour with a different alpha, clamped to `[0, 1]`.
    pub fn with_alpha(self, a: f64) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// CSS `rgba()` notation.
    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, self.a)
    }
}

/// Something particles can be drawn onto.
pub trait Surface {
    /// Wipe the whole surface.
    fn clear(&mut self, viewport: Viewport);

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba);

    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Rgba, width: f64);
}

/// A filled circle recorded by [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: Rgba,
}

/// A stroked line recorded by [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub color: Rgba,
    pub width: f64,
}

/// Recording surface holding the last rendered frame.
///
/// The UI renders this as an SVG layer: one `circle` per dot, one `line`
/// per segment.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    pub viewport: Viewport,
    pub dots: Vec<Dot>,
    pub segments: Vec<Segment>,
}

impl Scene {
    pub fn is_empty(&self) -> bool {
        self.dots.is_empty() && self.segments.is_empty()
    }
}

impl Surface for Scene {
    fn clear(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.dots.clear();
        self.segments.clear();
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba) {
        self.dots.push(Dot { x, y, radius, color });
    }

    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Rgba, width: f64) {
        self.segments.push(Segment {
            x1: from.0,
            y1: from.1,
            x2: to.0,
            y2: to.1,
            color,
            width,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_notation() {
        assert_eq!(Rgba::new(34, 211, 238, 0.5).css(), "rgba(34, 211, 238, 0.500)");
    }

    #[test]
    fn alpha_is_clamped() {
        let c = Rgba::new(1, 2, 3, 0.5);
        assert_eq!(c.with_alpha(1.5).a, 1.0);
        assert_eq!(c.with_alpha(-0.1).a, 0.0);
    }

    #[test]
    fn clear_resets_recording() {
        let mut scene = Scene::default();
        scene.fill_circle(1.0, 1.0, 1.0, Rgba::new(0, 0, 0, 1.0));
        scene.stroke_line((0.0, 0.0), (1.0, 1.0), Rgba::new(0, 0, 0, 1.0), 1.0);
        assert!(!scene.is_empty());

        scene.clear(Viewport::new(10.0, 10.0));
        assert!(scene.is_empty());
        assert_eq!(scene.viewport, Viewport::new(10.0, 10.0));
    }
}
