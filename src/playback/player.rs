//! Trace player for paced, real-time playback

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::sync::watch;

use super::driver::{PlaybackFrame, SearchPlayback, SortPlayback};
use super::state::{PlaybackKind, PlaybackState};
use crate::types::{Trace, Value};

/// Why a playback request did not run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Another playback is still in flight
    Busy,
    /// Search requested without a usable target value
    MissingTarget,
}

/// Summary of a finished playback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackReport {
    pub kind: PlaybackKind,
    /// Number of published state updates
    pub frames: usize,
    /// Found position reported during a search
    pub found: Option<usize>,
    /// Total time spent holding frames
    pub elapsed: Duration,
}

/// Result of a playback request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackOutcome {
    Completed(PlaybackReport),
    Ignored(IgnoreReason),
}

impl PlaybackOutcome {
    /// Check if the playback ran to the end
    pub fn is_completed(&self) -> bool {
        matches!(self, PlaybackOutcome::Completed(_))
    }

    /// Report of a completed playback
    pub fn report(&self) -> Option<&PlaybackReport> {
        match self {
            PlaybackOutcome::Completed(report) => Some(report),
            PlaybackOutcome::Ignored(_) => None,
        }
    }
}

/// Owner of the playback state
///
/// Publishes every frame on a watch channel; presentation code holds
/// receivers from [`TracePlayer::subscribe`] and never writes. Only one
/// playback can be in flight: requests made meanwhile are ignored.
#[derive(Debug)]
pub struct TracePlayer<T = Value> {
    state: watch::Sender<PlaybackState<T>>,
    busy: AtomicBool,
}

impl<T: Clone> TracePlayer<T> {
    /// Create an idle player showing `display`
    pub fn new(display: Vec<T>) -> Self {
        let (state, _) = watch::channel(PlaybackState::idle(display));
        Self {
            state,
            busy: AtomicBool::new(false),
        }
    }

    /// Receive every published state update
    pub fn subscribe(&self) -> watch::Receiver<PlaybackState<T>> {
        self.state.subscribe()
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> PlaybackState<T> {
        self.state.borrow().clone()
    }

    /// Currently displayed sequence
    pub fn display(&self) -> Vec<T> {
        self.state.borrow().array.clone()
    }

    /// Check if a playback is in flight
    pub fn is_active(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Show a new sequence and clear indicators; refused while playing
    pub fn set_display(&self, array: Vec<T>) -> bool {
        if self.is_active() {
            return false;
        }
        self.state.send_modify(|state| {
            state.array = array;
            state.reset_indicators();
        });
        true
    }

    /// Claim the player for one playback
    ///
    /// Returns `None` while another session is alive. The new session starts
    /// from the idle baseline.
    pub fn try_begin(&self, kind: PlaybackKind) -> Option<PlaybackSession<'_, T>> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!("{} request ignored: playback in flight", kind.display_name());
            return None;
        }

        self.state.send_modify(|state| {
            state.reset_indicators();
            state.active = Some(kind);
        });

        Some(PlaybackSession { player: self, kind })
    }

    /// Replay a sort trace at `speed`
    pub async fn play_sort(&self, trace: &Trace<T>, speed: u32) -> PlaybackOutcome {
        match self.try_begin(PlaybackKind::Sort) {
            Some(session) => PlaybackOutcome::Completed(session.play_sort(trace, speed).await),
            None => PlaybackOutcome::Ignored(IgnoreReason::Busy),
        }
    }

    /// Replay a search trace at `speed`
    pub async fn play_search(&self, trace: &Trace<T>, speed: u32) -> PlaybackOutcome {
        match self.try_begin(PlaybackKind::Search) {
            Some(session) => PlaybackOutcome::Completed(session.play_search(trace, speed).await),
            None => PlaybackOutcome::Ignored(IgnoreReason::Busy),
        }
    }
}

/// Exclusive claim on a [`TracePlayer`]
///
/// Dropping the session, including dropping a playback future halfway,
/// releases the player. No further frames are published after that.
#[derive(Debug)]
pub struct PlaybackSession<'a, T: Clone> {
    player: &'a TracePlayer<T>,
    kind: PlaybackKind,
}

impl<T: Clone> PlaybackSession<'_, T> {
    pub fn kind(&self) -> PlaybackKind {
        self.kind
    }

    /// Currently displayed sequence
    pub fn display(&self) -> Vec<T> {
        self.player.display()
    }

    /// Swap the displayed sequence before the replay starts
    pub fn replace_display(&mut self, array: Vec<T>) {
        self.player.state.send_modify(|state| state.array = array);
    }

    /// Replay a sort trace starting from the displayed sequence
    pub async fn play_sort(self, trace: &Trace<T>, speed: u32) -> PlaybackReport {
        let frames = SortPlayback::new(trace, speed, self.display());
        self.run(frames).await
    }

    /// Replay a search trace over the displayed sequence
    pub async fn play_search(self, trace: &Trace<T>, speed: u32) -> PlaybackReport {
        let frames = SearchPlayback::new(trace, speed, self.display());
        self.run(frames).await
    }

    async fn run(self, frames: impl Iterator<Item = PlaybackFrame<T>>) -> PlaybackReport {
        tracing::info!("{} started", self.kind.display_name());

        let mut report = PlaybackReport {
            kind: self.kind,
            frames: 0,
            found: None,
            elapsed: Duration::ZERO,
        };

        for frame in frames {
            tracing::trace!(cue = ?frame.cue, hold = ?frame.hold, "Publishing frame");

            report.frames += 1;
            report.elapsed += frame.hold;
            if frame.state.found.is_some() {
                report.found = frame.state.found;
            }

            self.player.state.send_replace(frame.state);

            if !frame.hold.is_zero() {
                tokio::time::sleep(frame.hold).await;
            }
        }

        tracing::info!(
            frames = report.frames,
            elapsed = ?report.elapsed,
            "{} finished",
            self.kind.display_name()
        );
        report
    }
}

impl<T: Clone> Drop for PlaybackSession<'_, T> {
    fn drop(&mut self) {
        self.player.state.send_if_modified(|state| {
            let was_active = state.active.is_some();
            state.active = None;
            was_active
        });
        self.player.busy.store(false, Ordering::Release);
    }
}
