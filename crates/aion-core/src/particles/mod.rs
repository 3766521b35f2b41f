//! Animated particle background.
//!
//! A fixed-size batch of drifting points, repelled by the pointer and joined
//! by translucent lines when close to each other. The batch lives in a
//! contiguous `Vec<Particle>`; neighbor lines come from a plain index-pair
//! scan, which is fine because the count never exceeds [`MAX_PARTICLES`].
//!
//! ## Layers
//!
//! - [`ParticleField`] - the simulation and its rendering onto a [`Surface`]
//! - [`FieldDriver`] - mount, frame, resize, pointer and teardown handling
//!   against a [`FrameHost`]
//! - [`Scene`] - a recording surface the UI turns into SVG

mod driver;
mod field;
mod particle;
mod pointer;
mod surface;

pub use driver::{DriverState, FieldDriver, FrameClock, FrameHost, FrameRequest, HostEvent};
pub use field::{Link, ParticleField};
pub use particle::{Particle, ParticleConfig, Viewport, MAX_PARTICLES};
pub use pointer::PointerState;
pub use surface::{Dot, Rgba, Scene, Segment, Surface};
