//! Reusable UI components.

mod modal_frame;
mod progress_bar;
mod status_badge;

pub use modal_frame::*;
pub use progress_bar::*;
pub use status_badge::*;
