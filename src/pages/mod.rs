//! Page components for the AION Labs site.

mod donations;
mod landing;

pub use donations::Donations;
pub use landing::Landing;
