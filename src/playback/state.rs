//! Playback state types

use serde::{Deserialize, Serialize};

use crate::types::Value;

/// Kind of playback currently in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackKind {
    /// Replaying a sort trace
    Sort,
    /// Replaying a search trace
    Search,
}

impl PlaybackKind {
    /// Display name for the kind
    pub fn display_name(&self) -> &'static str {
        match self {
            PlaybackKind::Sort => "Sorting",
            PlaybackKind::Search => "Searching",
        }
    }
}

/// Display role of a single bar, highest priority first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BarRole {
    Found,
    Swapping,
    Comparing,
    Normal,
}

/// Everything the presentation layer needs to draw one moment of playback
///
/// Only the playback driver writes this record; observers get clones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackState<T = Value> {
    /// Sequence as currently displayed
    pub array: Vec<T>,
    /// Positions being compared
    pub comparing: Vec<usize>,
    /// Positions that just changed (sort playback)
    pub swapping: Vec<usize>,
    /// Position where the search target was found
    pub found: Option<usize>,
    /// In-flight playback, `None` when idle
    pub active: Option<PlaybackKind>,
}

impl<T> Default for PlaybackState<T> {
    fn default() -> Self {
        Self::idle(Vec::new())
    }
}

impl<T> PlaybackState<T> {
    /// Idle baseline showing `array`
    pub fn idle(array: Vec<T>) -> Self {
        Self {
            array,
            comparing: Vec::new(),
            swapping: Vec::new(),
            found: None,
            active: None,
        }
    }

    /// Clear comparing/swapping sets and the found marker, keep the array
    pub fn reset_indicators(&mut self) {
        self.comparing.clear();
        self.swapping.clear();
        self.found = None;
    }

    /// Check if no indicator is set and nothing is playing
    pub fn is_idle(&self) -> bool {
        self.active.is_none()
            && self.comparing.is_empty()
            && self.swapping.is_empty()
            && self.found.is_none()
    }

    /// Check if a playback is in flight
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn is_comparing(&self, index: usize) -> bool {
        self.comparing.contains(&index)
    }

    pub fn is_swapping(&self, index: usize) -> bool {
        self.swapping.contains(&index)
    }

    pub fn is_found(&self, index: usize) -> bool {
        self.found == Some(index)
    }

    /// Role of the bar at `index`: found beats swapping beats comparing
    pub fn bar_role(&self, index: usize) -> BarRole {
        if self.is_found(index) {
            BarRole::Found
        } else if self.is_swapping(index) {
            BarRole::Swapping
        } else if self.is_comparing(index) {
            BarRole::Comparing
        } else {
            BarRole::Normal
        }
    }

    /// Roles of every displayed bar
    pub fn bar_roles(&self) -> Vec<BarRole> {
        (0..self.array.len()).map(|i| self.bar_role(i)).collect()
    }
}
