//! User Interface layer
//!
//! This module contains all UI-related code:
//! - Theme definitions and the process-wide dark-mode flag
//! - Reusable widgets
//! - Panel rendering and the main render entry point

pub mod render;
pub mod theme;
pub mod widgets;

pub use render::render;
pub use theme::Theme;
