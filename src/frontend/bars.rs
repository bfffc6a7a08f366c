//! Bar appearance derived from playback state
//!
//! Colors follow the visualizer legend: blue for normal bars, yellow while
//! compared, red while swapped and green once found. Each theme has its own
//! shade of every color.

use crate::config::Theme;
use crate::playback::{BarRole, PlaybackState};
use crate::types::Value;

/// An sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// `#RRGGBB` notation
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Colors for each bar role under one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub normal: Rgb,
    pub comparing: Rgb,
    pub swapping: Rgb,
    pub found: Rgb,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        normal: Rgb(0x60, 0xA5, 0xFA),
        comparing: Rgb(0xFB, 0xBF, 0x24),
        swapping: Rgb(0xF8, 0x71, 0x71),
        found: Rgb(0x34, 0xD3, 0x99),
    };

    pub const DARK: Palette = Palette {
        normal: Rgb(0x3B, 0x82, 0xF6),
        comparing: Rgb(0xF5, 0x9E, 0x0B),
        swapping: Rgb(0xEF, 0x44, 0x44),
        found: Rgb(0x10, 0xB9, 0x81),
    };

    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::LIGHT,
            Theme::Dark => Self::DARK,
        }
    }

    pub fn color(&self, role: BarRole) -> Rgb {
        match role {
            BarRole::Found => self.found,
            BarRole::Swapping => self.swapping,
            BarRole::Comparing => self.comparing,
            BarRole::Normal => self.normal,
        }
    }

    /// Legend entries in display order
    pub fn legend(&self) -> [(&'static str, Rgb); 4] {
        [
            ("Normal", self.normal),
            ("Comparing", self.comparing),
            ("Swapping", self.swapping),
            ("Found", self.found),
        ]
    }
}

/// Extra animation applied to a bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarEffect {
    None,
    /// Pulsing highlight on the found bar
    Pulse,
}

/// Everything needed to draw one bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarStyle {
    pub role: BarRole,
    pub color: Rgb,
    pub effect: BarEffect,
    /// Height as a percentage of the tallest possible bar
    pub height_percent: f64,
}

/// Color of the bar at `index`
pub fn bar_color<T>(index: usize, state: &PlaybackState<T>, theme: Theme) -> Rgb {
    Palette::for_theme(theme).color(state.bar_role(index))
}

/// Effect of the bar at `index`
pub fn bar_effect<T>(index: usize, state: &PlaybackState<T>) -> BarEffect {
    if state.is_found(index) {
        BarEffect::Pulse
    } else {
        BarEffect::None
    }
}

/// Bar height for `value` relative to `max_value`, clamped to 0–100
pub fn bar_height_percent(value: Value, max_value: Value) -> f64 {
    if max_value <= 0 {
        return 0.0;
    }
    (value as f64 / max_value as f64 * 100.0).clamp(0.0, 100.0)
}

/// Styles of every displayed bar
pub fn bar_styles(state: &PlaybackState, theme: Theme, max_value: Value) -> Vec<BarStyle> {
    let palette = Palette::for_theme(theme);
    state
        .array
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let role = state.bar_role(index);
            BarStyle {
                role,
                color: palette.color(role),
                effect: bar_effect(index, state),
                height_percent: bar_height_percent(value, max_value),
            }
        })
        .collect()
}
