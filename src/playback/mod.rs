//! Trace playback module
//!
//! This module replays traces as a sequence of UI-facing state updates.
//!
//! # Layers
//!
//! - [`driver`] - pure frame iterators ([`SortPlayback`], [`SearchPlayback`])
//!   that apply one event at a time and attach the hold time
//! - [`player`] - [`TracePlayer`], which owns the [`PlaybackState`], publishes
//!   frames on a `tokio::sync::watch` channel and sleeps between them
//!
//! # Timing
//!
//! Each event is held for `101 - speed` milliseconds (speed clamped to
//! 1–100). A search that ends without a match flashes for
//! [`NOT_FOUND_FLASH`]; every search then holds [`SETTLE_DELAY`] before the
//! indicators reset.

pub mod driver;
pub mod player;
pub mod state;

pub use driver::{
    total_hold, FrameCue, Pacing, PlaybackFrame, SearchPlayback, SortPlayback, DEFAULT_SPEED,
    MAX_SPEED, MIN_SPEED, NOT_FOUND_FLASH, SETTLE_DELAY,
};
pub use player::{IgnoreReason, PlaybackOutcome, PlaybackReport, PlaybackSession, TracePlayer};
pub use state::{BarRole, PlaybackKind, PlaybackState};
