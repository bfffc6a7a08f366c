//! Application module
//!
//! [`Visualizer`] is the explicit state container behind the UI: it owns the
//! configuration, the random sequence source, a sorted reference copy of the
//! current sequence and the [`TracePlayer`] that holds everything displayed.
//!
//! Actions follow the UI rules:
//! - while a playback is in flight, reset, size and algorithm changes are
//!   ignored and new sort/search requests are rejected
//! - searching needs an integer in the search box
//! - binary search sorts the displayed sequence before it starts

use tokio::sync::watch;

use crate::config::{validate_array_size, validate_speed, Theme, VisualizerConfig};
use crate::engine::{search_trace, sort_trace};
use crate::error::Result;
use crate::generator::SequenceGenerator;
use crate::playback::{IgnoreReason, PlaybackKind, PlaybackOutcome, PlaybackState, TracePlayer};
use crate::types::{SearchAlgorithm, SortAlgorithm, Value};

fn sorted(sequence: &[Value]) -> Vec<Value> {
    let mut sorted = sequence.to_vec();
    sorted.sort_unstable();
    sorted
}

/// Sorting & searching visualizer state
#[derive(Debug)]
pub struct Visualizer {
    config: VisualizerConfig,
    generator: SequenceGenerator,
    sorted_reference: Vec<Value>,
    player: TracePlayer,
}

impl Visualizer {
    /// Create a visualizer with an OS-seeded random sequence
    pub fn new(config: VisualizerConfig) -> Result<Self> {
        let generator = SequenceGenerator::new(config.value_range)?;
        Self::with_generator(config, generator)
    }

    /// Create a visualizer drawing sequences from `generator`
    pub fn with_generator(config: VisualizerConfig, mut generator: SequenceGenerator) -> Result<Self> {
        config.validate()?;
        generator.range().validate()?;
        let sequence = generator.generate(config.array_size);
        Ok(Self::assemble(config, generator, sequence))
    }

    /// Create a visualizer showing a given sequence
    pub fn with_sequence(config: VisualizerConfig, sequence: Vec<Value>) -> Result<Self> {
        config.validate()?;
        let generator = SequenceGenerator::new(config.value_range)?;
        Ok(Self::assemble(config, generator, sequence))
    }

    fn assemble(
        config: VisualizerConfig,
        generator: SequenceGenerator,
        sequence: Vec<Value>,
    ) -> Self {
        Self {
            sorted_reference: sorted(&sequence),
            player: TracePlayer::new(sequence),
            config,
            generator,
        }
    }

    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    pub fn player(&self) -> &TracePlayer {
        &self.player
    }

    /// Observe every playback state update
    pub fn subscribe(&self) -> watch::Receiver<PlaybackState> {
        self.player.subscribe()
    }

    /// Copy of the current playback state
    pub fn state(&self) -> PlaybackState {
        self.player.snapshot()
    }

    /// Currently displayed sequence
    pub fn sequence(&self) -> Vec<Value> {
        self.player.display()
    }

    /// Ascending copy of the sequence as last generated
    pub fn sorted_reference(&self) -> &[Value] {
        &self.sorted_reference
    }

    /// Check if the displayed sequence is in ascending order
    pub fn is_display_sorted(&self) -> bool {
        self.player.display() == self.sorted_reference
    }

    /// Check if a playback is in flight
    pub fn is_animating(&self) -> bool {
        self.player.is_active()
    }

    /// Draw a fresh sequence of the configured size
    ///
    /// Returns `false` (and changes nothing) while animating.
    pub fn regenerate(&mut self) -> bool {
        if self.is_animating() {
            return false;
        }

        let sequence = self.generator.generate(self.config.array_size);
        self.sorted_reference = sorted(&sequence);
        tracing::info!("Generated new sequence of {} values", sequence.len());
        self.player.set_display(sequence)
    }

    /// Same as [`regenerate`](Self::regenerate); bound to the reset button
    pub fn reset(&mut self) -> bool {
        self.regenerate()
    }

    /// Change the array size and draw a new sequence
    ///
    /// Out-of-range sizes are an error; while animating the change is ignored
    /// and `Ok(false)` is returned.
    pub fn set_array_size(&mut self, size: usize) -> Result<bool> {
        let size = validate_array_size(size)?;
        if self.is_animating() {
            return Ok(false);
        }
        self.config.array_size = size;
        Ok(self.regenerate())
    }

    /// Change the animation speed used by the next playback
    pub fn set_speed(&mut self, speed: u32) -> Result<()> {
        self.config.speed = validate_speed(speed)?;
        Ok(())
    }

    pub fn select_sort(&mut self, algorithm: SortAlgorithm) -> bool {
        if self.is_animating() {
            return false;
        }
        self.config.sort_algorithm = algorithm;
        true
    }

    pub fn select_search(&mut self, algorithm: SearchAlgorithm) -> bool {
        if self.is_animating() {
            return false;
        }
        self.config.search_algorithm = algorithm;
        true
    }

    /// Update the search box text
    pub fn set_search_value(&mut self, text: impl Into<String>) -> bool {
        if self.is_animating() {
            return false;
        }
        self.config.search_value = text.into();
        true
    }

    /// Switch between light and dark theme, returning the new one
    pub fn toggle_theme(&mut self) -> Theme {
        self.config.theme = self.config.theme.toggled();
        self.config.theme
    }

    /// Whether the sort action is enabled
    pub fn can_sort(&self) -> bool {
        !self.is_animating()
    }

    /// Whether the search action is enabled
    pub fn can_search(&self) -> bool {
        !self.is_animating() && self.config.search_target().is_ok()
    }

    /// Sort the displayed sequence with the selected engine and play it back
    pub async fn start_sort(&self) -> PlaybackOutcome {
        let Some(session) = self.player.try_begin(PlaybackKind::Sort) else {
            return PlaybackOutcome::Ignored(IgnoreReason::Busy);
        };

        let algorithm = self.config.sort_algorithm;
        let sequence = session.display();
        let trace = sort_trace(&sequence, algorithm);
        tracing::info!("Sorting {} values with {}", sequence.len(), algorithm);

        PlaybackOutcome::Completed(session.play_sort(&trace, self.config.speed).await)
    }

    /// Search the displayed sequence for the search box value and play it back
    pub async fn start_search(&self) -> PlaybackOutcome {
        if self.is_animating() {
            return PlaybackOutcome::Ignored(IgnoreReason::Busy);
        }

        let target = match self.config.search_target() {
            Ok(target) => target,
            Err(e) => {
                tracing::debug!("Search ignored: {}", e);
                return PlaybackOutcome::Ignored(IgnoreReason::MissingTarget);
            }
        };

        let Some(mut session) = self.player.try_begin(PlaybackKind::Search) else {
            return PlaybackOutcome::Ignored(IgnoreReason::Busy);
        };

        let algorithm = self.config.search_algorithm;
        let mut sequence = session.display();
        if algorithm.requires_sorted_input() {
            sequence.sort_unstable();
            session.replace_display(sequence.clone());
        }

        let trace = search_trace(&sequence, algorithm, &target);
        tracing::info!("Searching for {} with {}", target, algorithm);

        PlaybackOutcome::Completed(session.play_search(&trace, self.config.speed).await)
    }
}
