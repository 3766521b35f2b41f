//! AION Labs Site Core Library
//!
//! Everything behind the AION Labs marketing site that is not markup:
//! the animated particle background, the stat counter ramp, donation
//! progress math, the simulated live status feed, and the static content
//! catalogue the pages render.
//!
//! ## Overview
//!
//! The UI crate drives a [`FieldDriver`] from its frame loop. The driver
//! owns a [`ParticleField`] and the latest [`PointerState`], and talks to the
//! platform through the [`FrameHost`] trait (frame requests and listener
//! registration) so that mount and teardown can be observed in tests.
//!
//! ## Quick Start
//!
//! ```
//! use aion_core::{FieldDriver, FrameClock, ParticleConfig, Scene, Viewport};
//!
//! let mut host = FrameClock::with_viewport(Viewport::new(1280.0, 800.0));
//! let mut driver = FieldDriver::seeded(ParticleConfig::default(), 7);
//! let mut scene = Scene::default();
//!
//! driver.mount(&mut host);
//! if let Some(request) = host.take_due() {
//!     driver.on_frame(&mut host, request, &mut scene);
//! }
//! assert_eq!(scene.dots.len(), 120);
//! ```

pub mod carousel;
pub mod config;
pub mod content;
pub mod counter;
pub mod donation;
pub mod error;
pub mod format;
pub mod logging;
pub mod particles;
pub mod status;

// Re-exports
pub use carousel::Carousel;
pub use config::{DonationConfig, SiteConfig};
pub use content::{
    Bulletin, DocTab, Milestone, ResearchPillar, TechItem, BULLETINS, ETHICS_PROTOCOLS,
    FUNDING_LINES, TECH_ITEMS,
};
pub use counter::CounterRamp;
pub use donation::DonationGoal;
pub use error::{SiteError, SiteResult};
pub use format::{format_amount, group_thousands};
pub use particles::{
    Dot, DriverState, FieldDriver, FrameClock, FrameHost, FrameRequest, HostEvent, Link, Particle,
    ParticleConfig, ParticleField, PointerState, Rgba, Scene, Segment, Surface, Viewport,
    MAX_PARTICLES,
};
pub use status::{RegionHealth, StatusFeed, StatusSnapshot};
