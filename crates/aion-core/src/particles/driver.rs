//! Mount, frame and teardown handling for the particle background.
//!
//! The driver never touches the platform directly. Frame scheduling and
//! listener registration go through [`FrameHost`], so the UI can back it
//! with its own frame loop and tests can back it with a spy.

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::field::ParticleField;
use super::particle::{ParticleConfig, Viewport};
use super::pointer::PointerState;
use super::surface::Surface;

/// Handle for one requested animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameRequest(pub u64);

/// Host events the driver subscribes to while running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HostEvent {
    Resize,
    PointerMove,
}

/// Platform side of the particle background.
pub trait FrameHost {
    /// Current drawing surface size, or `None` when there is no surface.
    fn viewport(&self) -> Option<Viewport>;

    /// Ask for the frame callback to run once more.
    fn request_frame(&mut self) -> FrameRequest;

    /// Drop a request made by [`FrameHost::request_frame`].
    fn cancel_frame(&mut self, request: FrameRequest);

    fn listen(&mut self, event: HostEvent);

    fn unlisten(&mut self, event: HostEvent);
}

/// Minimal [`FrameHost`] for a polling frame loop.
///
/// Holds at most one pending request. The frame loop calls
/// [`FrameClock::take_due`] on every tick and hands the request to the
/// driver; once nothing is pending the loop has nothing left to run.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    viewport: Option<Viewport>,
    next_id: u64,
    pending: Option<FrameRequest>,
    listening: BTreeSet<HostEvent>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_viewport(viewport: Viewport) -> Self {
        Self {
            viewport: Some(viewport),
            ..Self::default()
        }
    }

    /// Record the measured surface size (`None` if it could not be measured).
    pub fn set_viewport(&mut self, viewport: Option<Viewport>) {
        self.viewport = viewport;
    }

    /// Take the pending request, if any.
    pub fn take_due(&mut self) -> Option<FrameRequest> {
        self.pending.take()
    }

    pub fn pending(&self) -> Option<FrameRequest> {
        self.pending
    }

    pub fn is_listening(&self, event: HostEvent) -> bool {
        self.listening.contains(&event)
    }
}

impl FrameHost for FrameClock {
    fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    fn request_frame(&mut self) -> FrameRequest {
        self.next_id += 1;
        let request = FrameRequest(self.next_id);
        self.pending = Some(request);
        request
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        if self.pending == Some(request) {
            self.pending = None;
        }
    }

    fn listen(&mut self, event: HostEvent) {
        self.listening.insert(event);
    }

    fn unlisten(&mut self, event: HostEvent) {
        self.listening.remove(&event);
    }
}

/// Lifecycle of a [`FieldDriver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    /// Not mounted yet
    Idle,
    /// Animating; `pending` is the only frame that may run next
    Running { pending: FrameRequest },
    /// Mounted without a drawing surface; renders nothing
    Disabled,
    /// Torn down; every callback is ignored
    Stopped,
}

/// Owns the particle field and the pointer record, and reacts to host
/// callbacks.
#[derive(Debug)]
pub struct FieldDriver<R = StdRng> {
    config: ParticleConfig,
    rng: R,
    field: Option<ParticleField>,
    pointer: PointerState,
    state: DriverState,
}

impl FieldDriver<StdRng> {
    /// Driver with a reproducible particle layout.
    pub fn seeded(config: ParticleConfig, seed: u64) -> Self {
        Self::new(config, StdRng::seed_from_u64(seed))
    }

    /// Driver seeded from the operating system.
    pub fn from_os_rng(config: ParticleConfig) -> Self {
        Self::new(config, StdRng::from_os_rng())
    }
}

impl<R: Rng> FieldDriver<R> {
    pub fn new(config: ParticleConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            field: None,
            pointer: PointerState::default(),
            state: DriverState::Idle,
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, DriverState::Running { .. })
    }

    pub fn field(&self) -> Option<&ParticleField> {
        self.field.as_ref()
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    /// Allocate the first batch, subscribe to resize and pointer events and
    /// request the first frame.
    ///
    /// Without a drawable surface the driver goes to
    /// [`DriverState::Disabled`] and never touches the host again.
    pub fn mount<H: FrameHost + ?Sized>(&mut self, host: &mut H) {
        if self.state != DriverState::Idle {
            tracing::warn!(state = ?self.state, "Particle field mounted twice, ignoring");
            return;
        }

        let Some(viewport) = host.viewport().filter(Viewport::is_drawable) else {
            tracing::debug!("No drawing surface at mount, particle field disabled");
            self.state = DriverState::Disabled;
            return;
        };

        self.field = Some(ParticleField::new(self.config.clone(), viewport, &mut self.rng));
        host.listen(HostEvent::Resize);
        host.listen(HostEvent::PointerMove);
        let pending = host.request_frame();
        self.state = DriverState::Running { pending };

        tracing::info!(
            width = viewport.width,
            height = viewport.height,
            "Particle field mounted"
        );
    }

    /// Run one animation frame if `request` is the pending one.
    ///
    /// Steps the simulation, renders onto `surface` and requests the next
    /// frame. Returns whether a frame was drawn.
    pub fn on_frame<H, S>(&mut self, host: &mut H, request: FrameRequest, surface: &mut S) -> bool
    where
        H: FrameHost + ?Sized,
        S: Surface + ?Sized,
    {
        let DriverState::Running { pending } = self.state else {
            return false;
        };
        if pending != request {
            return false;
        }
        let Some(field) = self.field.as_mut() else {
            return false;
        };

        field.step(&self.pointer);
        field.render(surface);
        self.state = DriverState::Running {
            pending: host.request_frame(),
        };
        true
    }

    /// Reallocate the batch for the host's new surface size.
    ///
    /// Returns whether a new batch was allocated. An unmeasurable size keeps
    /// the current batch.
    pub fn on_resize<H: FrameHost + ?Sized>(&mut self, host: &mut H) -> bool {
        if !self.is_running() {
            return false;
        }
        let Some(viewport) = host.viewport().filter(Viewport::is_drawable) else {
            tracing::debug!("Resize without a measurable surface, keeping current batch");
            return false;
        };
        match self.field.as_mut() {
            Some(field) => {
                field.populate(viewport, &mut self.rng);
                true
            }
            None => false,
        }
    }

    /// Record a pointer move. Ignored unless running.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) -> bool {
        if !self.is_running() {
            return false;
        }
        self.pointer.move_to(x, y);
        true
    }

    /// Release both listeners and the pending frame.
    pub fn unmount<H: FrameHost + ?Sized>(&mut self, host: &mut H) {
        if let DriverState::Running { pending } = self.state {
            host.unlisten(HostEvent::Resize);
            host.unlisten(HostEvent::PointerMove);
            host.cancel_frame(pending);
            tracing::info!("Particle field torn down");
        }
        self.state = DriverState::Stopped;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particles::surface::Scene;

    fn driver() -> FieldDriver {
        FieldDriver::seeded(ParticleConfig::default(), 42)
    }

    #[test]
    fn mount_subscribes_and_requests_frame() {
        let mut host = FrameClock::with_viewport(Viewport::new(1024.0, 768.0));
        let mut driver = driver();
        driver.mount(&mut host);

        assert!(driver.is_running());
        assert!(host.is_listening(HostEvent::Resize));
        assert!(host.is_listening(HostEvent::PointerMove));
        assert!(host.pending().is_some());
        assert_eq!(driver.field().map(|f| f.particles().len()), Some(120));
    }

    #[test]
    fn mount_without_surface_is_silent() {
        let mut host = FrameClock::new();
        let mut driver = driver();
        driver.mount(&mut host);

        assert_eq!(driver.state(), DriverState::Disabled);
        assert!(host.pending().is_none());
        assert!(!host.is_listening(HostEvent::Resize));
        assert!(driver.field().is_none());
    }

    #[test]
    fn zero_sized_surface_counts_as_missing() {
        let mut host = FrameClock::with_viewport(Viewport::new(0.0, 600.0));
        let mut driver = driver();
        driver.mount(&mut host);
        assert_eq!(driver.state(), DriverState::Disabled);
    }

    #[test]
    fn frame_renders_and_reschedules() {
        let mut host = FrameClock::with_viewport(Viewport::new(1024.0, 768.0));
        let mut driver = driver();
        let mut scene = Scene::default();
        driver.mount(&mut host);

        let first = host.take_due().unwrap();
        assert!(driver.on_frame(&mut host, first, &mut scene));
        assert_eq!(scene.dots.len(), 120);

        let second = host.take_due().unwrap();
        assert_ne!(first, second);
        assert!(driver.on_frame(&mut host, second, &mut scene));
    }

    #[test]
    fn stale_frame_is_ignored() {
        let mut host = FrameClock::with_viewport(Viewport::new(1024.0, 768.0));
        let mut driver = driver();
        let mut scene = Scene::default();
        driver.mount(&mut host);

        let first = host.take_due().unwrap();
        assert!(driver.on_frame(&mut host, first, &mut scene));
        assert!(!driver.on_frame(&mut host, first, &mut scene));
    }

    #[test]
    fn resize_reallocates_for_new_width() {
        let mut host = FrameClock::with_viewport(Viewport::new(1024.0, 768.0));
        let mut driver = driver();
        driver.mount(&mut host);

        host.set_viewport(Some(Viewport::new(420.0, 800.0)));
        assert!(driver.on_resize(&mut host));
        let field = driver.field().unwrap();
        assert_eq!(field.particles().len(), 50);
        assert_eq!(field.viewport(), Viewport::new(420.0, 800.0));
    }

    #[test]
    fn unmeasurable_resize_keeps_batch() {
        let mut host = FrameClock::with_viewport(Viewport::new(1024.0, 768.0));
        let mut driver = driver();
        driver.mount(&mut host);
        let before = driver.field().unwrap().particles().to_vec();

        host.set_viewport(None);
        assert!(!driver.on_resize(&mut host));
        host.set_viewport(Some(Viewport::new(0.0, 0.0)));
        assert!(!driver.on_resize(&mut host));

        assert!(driver.is_running());
        assert!(host.pending().is_some());
        let field = driver.field().unwrap();
        assert_eq!(field.particles(), before.as_slice());
        assert_eq!(field.viewport(), Viewport::new(1024.0, 768.0));
    }

    #[test]
    fn pointer_is_a_one_way_latch() {
        let mut host = FrameClock::with_viewport(Viewport::new(1024.0, 768.0));
        let mut driver = driver();
        assert!(!driver.on_pointer_move(1.0, 1.0));

        driver.mount(&mut host);
        assert!(driver.on_pointer_move(5.0, 6.0));
        assert!(driver.pointer().active);
        assert_eq!((driver.pointer().x, driver.pointer().y), (5.0, 6.0));
    }

    #[test]
    fn unmount_releases_everything() {
        let mut host = FrameClock::with_viewport(Viewport::new(1024.0, 768.0));
        let mut driver = driver();
        driver.mount(&mut host);
        driver.unmount(&mut host);

        assert_eq!(driver.state(), DriverState::Stopped);
        assert!(host.pending().is_none());
        assert!(!host.is_listening(HostEvent::Resize));
        assert!(!host.is_listening(HostEvent::PointerMove));
    }

    #[test]
    fn mount_after_unmount_is_ignored() {
        let mut host = FrameClock::with_viewport(Viewport::new(1024.0, 768.0));
        let mut driver = driver();
        driver.mount(&mut host);
        driver.unmount(&mut host);
        driver.mount(&mut host);

        assert_eq!(driver.state(), DriverState::Stopped);
        assert!(host.pending().is_none());
    }
}
