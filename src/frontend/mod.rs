//! Presentation helpers
//!
//! The presentation layer is a read-only observer of
//! [`PlaybackState`](crate::playback::PlaybackState). This module derives what
//! it needs to draw from that state.
//!
//! # Submodules
//!
//! - [`bars`] - bar roles to theme colors, the found pulse, bar heights
//! - [`terminal`] - plain-text bar chart used by the headless runner

pub mod bars;
pub mod terminal;

pub use bars::{
    bar_color, bar_effect, bar_height_percent, bar_styles, BarEffect, BarStyle, Palette, Rgb,
};
pub use terminal::{render_bars, status_line, TerminalStyle};
