//! Color constants for the AION Labs palette.
//!
//! Deep slate backgrounds with cyan and violet accents. The stylesheet
//! mirrors these as CSS custom properties.

#![allow(dead_code)]

// === SLATE (Backgrounds) ===
pub const SLATE_950: &str = "#020617";
pub const SLATE_900: &str = "#0f172a";
pub const SLATE_800: &str = "#1e293b";

// === CYAN (Primary accent, particles) ===
pub const CYAN: &str = "#22d3ee";
pub const CYAN_DEEP: &str = "#06b6d4";
pub const CYAN_GLOW: &str = "rgba(34, 211, 238, 0.3)";

// === VIOLET / PINK (Secondary accents) ===
pub const VIOLET: &str = "#8b5cf6";
pub const PINK: &str = "#ec4899";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#ffffff";
pub const TEXT_SECONDARY: &str = "#94a3b8";
pub const TEXT_MUTED: &str = "#64748b";

// === SEMANTIC ===
pub const ONLINE: &str = "#22c55e";
pub const OFFLINE: &str = "#ef4444";
