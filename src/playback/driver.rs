//! Frame driver: turns a trace into paced playback frames
//!
//! [`SortPlayback`] and [`SearchPlayback`] are plain iterators. Each item is
//! the full [`PlaybackState`] to show after one step plus how long to hold
//! it. They never sleep and hold no clock, so replaying the same trace twice
//! yields identical frames; [`TracePlayer`](super::TracePlayer) adds the
//! real-time pacing on top.

use std::iter::Enumerate;
use std::slice::Iter;
use std::time::Duration;

use super::state::{PlaybackKind, PlaybackState};
use crate::types::{Event, Trace};

/// Slowest accepted speed setting
pub const MIN_SPEED: u32 = 1;

/// Fastest accepted speed setting
pub const MAX_SPEED: u32 = 100;

/// Speed used when none is configured
pub const DEFAULT_SPEED: u32 = 50;

/// How long a failed search lights up every probed position
pub const NOT_FOUND_FLASH: Duration = Duration::from_millis(500);

/// How long the result of a search stays on screen before the reset
pub const SETTLE_DELAY: Duration = Duration::from_millis(1000);

/// Per-event delay derived from the speed setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    speed: u32,
}

impl Pacing {
    /// Pacing for `speed`, clamped to `MIN_SPEED..=MAX_SPEED`
    pub fn from_speed(speed: u32) -> Self {
        Self {
            speed: speed.clamp(MIN_SPEED, MAX_SPEED),
        }
    }

    /// Effective (clamped) speed
    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Delay after each event: `101 - speed` milliseconds
    pub fn step(&self) -> Duration {
        Duration::from_millis(u64::from(MAX_SPEED + 1 - self.speed))
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self::from_speed(DEFAULT_SPEED)
    }
}

/// Why a frame was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameCue {
    /// Result of applying the event at this trace position
    Event(usize),
    /// Failed search: every probed position lit up
    NotFoundFlash,
    /// Search result held before the reset
    Settle,
    /// Back at the idle baseline
    Idle,
}

/// One state update together with how long it stays on screen
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackFrame<T> {
    pub cue: FrameCue,
    pub state: PlaybackState<T>,
    pub hold: Duration,
}

/// Sum of all holds, i.e. the wall time a full replay takes
pub fn total_hold<T>(frames: &[PlaybackFrame<T>]) -> Duration {
    frames.iter().map(|f| f.hold).sum()
}

fn apply<T: Clone>(state: &mut PlaybackState<T>, event: &Event<T>) {
    match event {
        Event::Compare { indices, .. } => state.comparing = indices.to_vec(),
        Event::Swap { indices, snapshot } => {
            state.swapping = indices.to_vec();
            state.array = snapshot.clone();
        }
        Event::Found { index } => state.found = Some(*index),
    }
}

fn started<T>(display: Vec<T>, kind: PlaybackKind) -> PlaybackState<T> {
    let mut state = PlaybackState::idle(display);
    state.active = Some(kind);
    state
}

/// Frames of a sort replay
///
/// Compare events move the comparing set, swap events move the swapping set
/// and replace the displayed array. The final frame clears both sets and
/// keeps the last array.
pub struct SortPlayback<'a, T> {
    events: Enumerate<Iter<'a, Event<T>>>,
    state: PlaybackState<T>,
    pacing: Pacing,
    finished: bool,
}

impl<'a, T: Clone> SortPlayback<'a, T> {
    /// Start from the idle baseline showing `display`
    pub fn new(trace: &'a Trace<T>, speed: u32, display: Vec<T>) -> Self {
        Self {
            events: trace.events().iter().enumerate(),
            state: started(display, PlaybackKind::Sort),
            pacing: Pacing::from_speed(speed),
            finished: false,
        }
    }

    /// State as of the last produced frame
    pub fn state(&self) -> &PlaybackState<T> {
        &self.state
    }
}

impl<T: Clone> Iterator for SortPlayback<'_, T> {
    type Item = PlaybackFrame<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let (cue, hold) = match self.events.next() {
            Some((position, event)) => {
                apply(&mut self.state, event);
                (FrameCue::Event(position), self.pacing.step())
            }
            None => {
                self.finished = true;
                self.state.comparing.clear();
                self.state.swapping.clear();
                self.state.active = None;
                (FrameCue::Idle, Duration::ZERO)
            }
        };

        Some(PlaybackFrame {
            cue,
            state: self.state.clone(),
            hold,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.finished {
            0
        } else {
            self.events.len() + 1
        };
        (remaining, Some(remaining))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchPhase {
    Events,
    Flash,
    Settle,
    Idle,
    Done,
}

/// Frames of a search replay
///
/// After the events: a not-found flash over positions `0..trace.len()` when
/// the trace is non-empty and does not end on `Found`, then a settle hold,
/// then the reset to idle.
pub struct SearchPlayback<'a, T> {
    events: Enumerate<Iter<'a, Event<T>>>,
    state: PlaybackState<T>,
    pacing: Pacing,
    phase: SearchPhase,
    trace_len: usize,
    not_found: bool,
}

impl<'a, T: Clone> SearchPlayback<'a, T> {
    /// Start from the idle baseline showing `display`
    pub fn new(trace: &'a Trace<T>, speed: u32, display: Vec<T>) -> Self {
        let not_found = trace.last().is_some_and(|e| !e.is_found());
        Self {
            events: trace.events().iter().enumerate(),
            state: started(display, PlaybackKind::Search),
            pacing: Pacing::from_speed(speed),
            phase: SearchPhase::Events,
            trace_len: trace.len(),
            not_found,
        }
    }

    /// State as of the last produced frame
    pub fn state(&self) -> &PlaybackState<T> {
        &self.state
    }
}

impl<T: Clone> Iterator for SearchPlayback<'_, T> {
    type Item = PlaybackFrame<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let (cue, hold) = loop {
            match self.phase {
                SearchPhase::Events => match self.events.next() {
                    Some((position, event)) => {
                        apply(&mut self.state, event);
                        break (FrameCue::Event(position), self.pacing.step());
                    }
                    None => {
                        self.phase = if self.not_found {
                            SearchPhase::Flash
                        } else {
                            SearchPhase::Settle
                        };
                    }
                },
                SearchPhase::Flash => {
                    self.state.comparing = (0..self.trace_len).collect();
                    self.phase = SearchPhase::Settle;
                    break (FrameCue::NotFoundFlash, NOT_FOUND_FLASH);
                }
                SearchPhase::Settle => {
                    self.phase = SearchPhase::Idle;
                    break (FrameCue::Settle, SETTLE_DELAY);
                }
                SearchPhase::Idle => {
                    self.phase = SearchPhase::Done;
                    self.state.reset_indicators();
                    self.state.active = None;
                    break (FrameCue::Idle, Duration::ZERO);
                }
                SearchPhase::Done => return None,
            }
        };

        Some(PlaybackFrame {
            cue,
            state: self.state.clone(),
            hold,
        })
    }
}
