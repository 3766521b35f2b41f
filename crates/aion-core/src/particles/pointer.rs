//! Latest pointer position as seen by the particle background.

/// Last known pointer position.
///
/// Written by the pointer-move handler and read by every frame step, both on
/// the UI thread. `active` latches on the first move and never clears.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    pub x: f64,
    pub y: f64,
    pub active: bool,
}

impl PointerState {
    /// Record a pointer move. Last write wins.
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
        self.active = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_inactive() {
        assert!(!PointerState::default().active);
    }

    #[test]
    fn move_latches_active() {
        let mut pointer = PointerState::default();
        pointer.move_to(10.0, 20.0);
        pointer.move_to(30.0, 40.0);
        assert!(pointer.active);
        assert_eq!((pointer.x, pointer.y), (30.0, 40.0));
    }
}
