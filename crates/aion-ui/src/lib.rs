//! AION Labs UI Components
//!
//! Reusable Dioxus building blocks for the AION Labs site. They carry no
//! site copy; pages in the app crate fill them in.
//!
//! ## Look
//!
//! - **Slate (#020617)**: page background
//! - **Cyan (#22d3ee)**: live indicators, progress fills, links
//! - **Violet (#8b5cf6)**: secondary accents
//!
//! Class names match the global stylesheet shipped by the app crate.

pub mod components;

pub use components::*;
