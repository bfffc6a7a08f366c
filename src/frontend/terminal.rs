//! Text rendering of playback state for the headless runner

use std::fmt::Write;

use super::bars::{bar_styles, Rgb};
use crate::config::Theme;
use crate::playback::{BarRole, PlaybackState};
use crate::types::Value;

/// Options for [`render_bars`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerminalStyle {
    /// Number of text rows used for the tallest bar
    pub rows: usize,
    /// Emit 24-bit ANSI colors from the theme palette
    pub color: bool,
    pub theme: Theme,
}

impl Default for TerminalStyle {
    fn default() -> Self {
        Self {
            rows: 12,
            color: false,
            theme: Theme::Dark,
        }
    }
}

fn glyph(role: BarRole) -> char {
    match role {
        BarRole::Normal => '█',
        BarRole::Comparing => '▒',
        BarRole::Swapping => '░',
        BarRole::Found => '▓',
    }
}

fn paint(out: &mut String, c: char, color: Rgb) {
    let _ = write!(out, "\x1b[38;2;{};{};{}m{}\x1b[0m", color.0, color.1, color.2, c);
}

/// Draw the state as vertical bars, one column per element
///
/// Without colors the roles are told apart by glyph: `█` normal, `▒`
/// comparing, `░` swapping, `▓` found.
pub fn render_bars(state: &PlaybackState, max_value: Value, style: TerminalStyle) -> String {
    let styles = bar_styles(state, style.theme, max_value);
    let rows = style.rows.max(1);
    let mut out = String::new();

    for row in (1..=rows).rev() {
        let threshold = row as f64 / rows as f64 * 100.0;
        for bar in &styles {
            // A non-empty bar always shows at least its bottom cell
            let filled = bar.height_percent >= threshold
                || (row == 1 && bar.height_percent > 0.0);
            if !filled {
                out.push(' ');
            } else if style.color {
                paint(&mut out, glyph(bar.role), bar.color);
            } else {
                out.push(glyph(bar.role));
            }
        }
        out.push('\n');
    }

    out
}

/// One-line summary of the indicators
pub fn status_line(state: &PlaybackState) -> String {
    let activity = state
        .active
        .map(|kind| kind.display_name())
        .unwrap_or("Idle");
    let found = state
        .found
        .map(|i| i.to_string())
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{} | comparing {:?} | swapping {:?} | found {}",
        activity, state.comparing, state.swapping, found
    )
}
