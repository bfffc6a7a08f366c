//! # AlgoVis-RS: Sorting & Searching Visualizer
//!
//! Turns classic sorting and searching algorithms into step-by-step animation
//! traces and plays them back against a displayed sequence of integers.
//!
//! ## Architecture
//!
//! - **Engines**: pure functions that run an algorithm on a private copy of
//!   the input and record every comparison, exchange and hit as an [`Event`]
//! - **Playback**: replays a [`Trace`] at a user-chosen speed, publishing each
//!   [`PlaybackState`] on a watch channel for any observer to draw
//! - **Visualizer**: the controller owning configuration, the random sequence
//!   source and the single in-flight playback
//! - **Frontend**: derives bar colors, effects and heights from the state
//!
//! ## Configuration
//!
//! Preferences are stored as TOML in the platform-appropriate data directory
//! under `dev.hxyulin.algovis-rs` (see [`config`]).
//!
//! ## Example
//!
//! ```ignore
//! use algovis_rs::{Visualizer, VisualizerConfig, SortAlgorithm};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> algovis_rs::Result<()> {
//!     let mut visualizer = Visualizer::new(VisualizerConfig::load_or_default())?;
//!     visualizer.select_sort(SortAlgorithm::Quick);
//!
//!     let mut frames = visualizer.subscribe();
//!     tokio::spawn(async move {
//!         while frames.changed().await.is_ok() {
//!             println!("{:?}", frames.borrow().array);
//!         }
//!     });
//!
//!     visualizer.start_sort().await;
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod config;
pub mod engine;
pub mod error;
pub mod frontend;
pub mod generator;
pub mod playback;
pub mod types;

// Re-export commonly used types
pub use app::Visualizer;
pub use config::{Theme, ValueRange, VisualizerConfig};
pub use engine::{search_trace, sort_trace};
pub use error::{Result, ResultExt, VisError};
pub use generator::SequenceGenerator;
pub use playback::{
    IgnoreReason, PlaybackKind, PlaybackOutcome, PlaybackReport, PlaybackState, TracePlayer,
};
pub use types::{Event, Indices, SearchAlgorithm, SortAlgorithm, Trace, TraceSource, Value};
