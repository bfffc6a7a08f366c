//! Individual settings and their validation
//!
//! # Main Types
//!
//! - [`ValueRange`] - Inclusive range generated values are drawn from
//! - [`Theme`] - Light or dark palette for the presentation layer
//!
//! # Validation
//!
//! Every `validate_*` helper returns the accepted value or a
//! [`VisError`] describing why it was rejected. They are used by
//! [`VisualizerConfig::validate`](super::VisualizerConfig::validate) and by the
//! setters of [`Visualizer`](crate::app::Visualizer), so an invalid value never
//! reaches an engine.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{MAX_ARRAY_SIZE, MAX_VALUE, MIN_ARRAY_SIZE, MIN_VALUE};
use crate::error::{Result, VisError};
use crate::playback::{MAX_SPEED, MIN_SPEED};
use crate::types::Value;

/// Inclusive range of generated values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: Value,
    pub max: Value,
}

impl Default for ValueRange {
    fn default() -> Self {
        Self {
            min: MIN_VALUE,
            max: MAX_VALUE,
        }
    }
}

impl ValueRange {
    /// Create a range, rejecting `min > max`
    pub fn new(min: Value, max: Value) -> Result<Self> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min > self.max {
            return Err(VisError::Config(format!(
                "value range is inverted: {} > {}",
                self.min, self.max
            )));
        }
        Ok(())
    }

    pub fn contains(&self, value: Value) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Display theme, purely cosmetic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "Light Mode"),
            Theme::Dark => write!(f, "Dark Mode"),
        }
    }
}

fn check_range(name: &'static str, value: i64, min: i64, max: i64) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(VisError::OutOfRange {
            name,
            value,
            min,
            max,
        })
    }
}

/// Accept an array size within `MIN_ARRAY_SIZE..=MAX_ARRAY_SIZE`
pub fn validate_array_size(size: usize) -> Result<usize> {
    let value = i64::try_from(size).unwrap_or(i64::MAX);
    check_range(
        "array size",
        value,
        MIN_ARRAY_SIZE as i64,
        MAX_ARRAY_SIZE as i64,
    )?;
    Ok(size)
}

/// Accept an animation speed within `MIN_SPEED..=MAX_SPEED`
pub fn validate_speed(speed: u32) -> Result<u32> {
    check_range(
        "animation speed",
        i64::from(speed),
        i64::from(MIN_SPEED),
        i64::from(MAX_SPEED),
    )?;
    Ok(speed)
}

/// Parse the search box text into a target value
///
/// Surrounding whitespace is ignored; empty or non-integer text is rejected.
pub fn parse_search_target(text: &str) -> Result<Value> {
    let text = text.trim();
    if text.is_empty() {
        return Err(VisError::InvalidTarget("no value entered".to_string()));
    }
    text.parse::<Value>()
        .map_err(|e| VisError::InvalidTarget(format!("{:?} is not an integer ({})", text, e)))
}
