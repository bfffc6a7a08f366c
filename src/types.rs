//! Core data types for AlgoVis-RS
//!
//! This module contains the fundamental data structures shared by the trace
//! engines, the playback driver and the presentation helpers.
//!
//! # Main Types
//!
//! - [`Event`] - One step of an algorithm: compare, swap or found
//! - [`Trace`] - The immutable, ordered event log of one engine run
//! - [`Indices`] - The one or two positions an event refers to
//! - [`SortAlgorithm`] / [`SearchAlgorithm`] - Engine selectors
//!
//! # Selectors
//!
//! Algorithm selectors use the same string names as the visualizer UI
//! (`bubbleSort`, `linearSearch`, ...). [`SortAlgorithm::from_selector`] and
//! [`SearchAlgorithm::from_selector`] fall back to the default engine for
//! unknown names so that a playback can always be produced; the [`FromStr`]
//! implementations are strict.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::VisError;

/// Element type of generated sequences
pub type Value = i64;

/// The positions touched by a single event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Indices {
    /// A single position (merge writes, search probes)
    One(usize),
    /// A pair of positions (comparisons and exchanges)
    Two(usize, usize),
}

impl Indices {
    /// Iterate over the referenced positions in order
    pub fn iter(&self) -> impl Iterator<Item = usize> {
        let (first, second) = match *self {
            Indices::One(a) => (a, None),
            Indices::Two(a, b) => (a, Some(b)),
        };
        std::iter::once(first).chain(second)
    }

    /// Collect the positions into a vector
    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }

    /// Largest referenced position
    pub fn max(&self) -> usize {
        match *self {
            Indices::One(a) => a,
            Indices::Two(a, b) => a.max(b),
        }
    }

    /// Check whether `index` is one of the referenced positions
    pub fn contains(&self, index: usize) -> bool {
        self.iter().any(|i| i == index)
    }
}

/// A single step of an algorithm run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Event<T = Value> {
    /// Elements at `indices` are being compared.
    ///
    /// Sort engines attach the working array as it is at this moment;
    /// search engines leave `snapshot` empty.
    Compare {
        indices: Indices,
        #[serde(skip_serializing_if = "Option::is_none")]
        snapshot: Option<Vec<T>>,
    },
    /// Elements at `indices` changed; `snapshot` is the array after the change
    Swap { indices: Indices, snapshot: Vec<T> },
    /// The search target sits at `index`
    Found { index: usize },
}

impl<T> Event<T> {
    /// Check if this is a comparison
    pub fn is_compare(&self) -> bool {
        matches!(self, Event::Compare { .. })
    }

    /// Check if this is a swap/write
    pub fn is_swap(&self) -> bool {
        matches!(self, Event::Swap { .. })
    }

    /// Check if this is a found marker
    pub fn is_found(&self) -> bool {
        matches!(self, Event::Found { .. })
    }

    /// Largest position this event refers to
    pub fn max_index(&self) -> usize {
        match self {
            Event::Compare { indices, .. } | Event::Swap { indices, .. } => indices.max(),
            Event::Found { index } => *index,
        }
    }
}

/// Which engine produced a trace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceSource {
    Sort(SortAlgorithm),
    Search(SearchAlgorithm),
}

impl fmt::Display for TraceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceSource::Sort(algorithm) => write!(f, "{}", algorithm),
            TraceSource::Search(algorithm) => write!(f, "{}", algorithm),
        }
    }
}

/// The ordered, immutable event log produced by one engine invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace<T = Value> {
    source: TraceSource,
    events: Vec<Event<T>>,
}

impl<T> Trace<T> {
    pub(crate) fn new(source: TraceSource, events: Vec<Event<T>>) -> Self {
        Self { source, events }
    }

    /// Engine that produced this trace
    pub fn source(&self) -> TraceSource {
        self.source
    }

    /// All events in playback order
    pub fn events(&self) -> &[Event<T>] {
        &self.events
    }

    /// Iterate over the events in playback order
    pub fn iter(&self) -> std::slice::Iter<'_, Event<T>> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn last(&self) -> Option<&Event<T>> {
        self.events.last()
    }

    /// Number of compare events
    pub fn compare_count(&self) -> usize {
        self.events.iter().filter(|e| e.is_compare()).count()
    }

    /// Number of swap/write events
    pub fn swap_count(&self) -> usize {
        self.events.iter().filter(|e| e.is_swap()).count()
    }

    /// Snapshot carried by the last swap, i.e. the array a full replay ends on
    pub fn final_snapshot(&self) -> Option<&[T]> {
        self.events.iter().rev().find_map(|e| match e {
            Event::Swap { snapshot, .. } => Some(snapshot.as_slice()),
            _ => None,
        })
    }

    /// Index reported by the terminal found event, if any
    pub fn found_index(&self) -> Option<usize> {
        match self.events.last() {
            Some(Event::Found { index }) => Some(*index),
            _ => None,
        }
    }

    /// Largest position referenced by any event
    pub fn max_index(&self) -> Option<usize> {
        self.events.iter().map(Event::max_index).max()
    }
}

impl<'a, T> IntoIterator for &'a Trace<T> {
    type Item = &'a Event<T>;
    type IntoIter = std::slice::Iter<'a, Event<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

/// Sorting engine selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortAlgorithm {
    #[default]
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
}

impl SortAlgorithm {
    /// All sort engines in menu order
    pub const ALL: [SortAlgorithm; 6] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
        SortAlgorithm::Insertion,
        SortAlgorithm::Merge,
        SortAlgorithm::Quick,
        SortAlgorithm::Heap,
    ];

    /// Selector string used by the UI
    pub fn selector(&self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "bubbleSort",
            SortAlgorithm::Selection => "selectionSort",
            SortAlgorithm::Insertion => "insertionSort",
            SortAlgorithm::Merge => "mergeSort",
            SortAlgorithm::Quick => "quickSort",
            SortAlgorithm::Heap => "heapSort",
        }
    }

    /// Display name for menus
    pub fn display_name(&self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "Bubble Sort",
            SortAlgorithm::Selection => "Selection Sort",
            SortAlgorithm::Insertion => "Insertion Sort",
            SortAlgorithm::Merge => "Merge Sort",
            SortAlgorithm::Quick => "Quick Sort",
            SortAlgorithm::Heap => "Heap Sort",
        }
    }

    /// Resolve a selector, falling back to bubble sort for unknown names
    pub fn from_selector(selector: &str) -> Self {
        selector.parse().unwrap_or_else(|_| {
            tracing::warn!("Unknown sort selector {:?}, using bubble sort", selector);
            SortAlgorithm::default()
        })
    }
}

impl FromStr for SortAlgorithm {
    type Err = VisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        SortAlgorithm::ALL
            .into_iter()
            .find(|a| {
                a.selector().eq_ignore_ascii_case(s)
                    || a.selector()
                        .trim_end_matches("Sort")
                        .eq_ignore_ascii_case(s)
            })
            .ok_or_else(|| VisError::UnknownAlgorithm(s.to_string()))
    }
}

impl From<String> for SortAlgorithm {
    fn from(s: String) -> Self {
        SortAlgorithm::from_selector(&s)
    }
}

impl From<SortAlgorithm> for String {
    fn from(a: SortAlgorithm) -> Self {
        a.selector().to_string()
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Searching engine selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SearchAlgorithm {
    #[default]
    Linear,
    /// Requires ascending input; the caller sorts first
    Binary,
}

impl SearchAlgorithm {
    pub const ALL: [SearchAlgorithm; 2] = [SearchAlgorithm::Linear, SearchAlgorithm::Binary];

    /// Selector string used by the UI
    pub fn selector(&self) -> &'static str {
        match self {
            SearchAlgorithm::Linear => "linearSearch",
            SearchAlgorithm::Binary => "binarySearch",
        }
    }

    /// Display name for menus
    pub fn display_name(&self) -> &'static str {
        match self {
            SearchAlgorithm::Linear => "Linear Search",
            SearchAlgorithm::Binary => "Binary Search",
        }
    }

    /// Whether the engine needs the sequence sorted before it runs
    pub fn requires_sorted_input(&self) -> bool {
        matches!(self, SearchAlgorithm::Binary)
    }

    /// Resolve a selector, falling back to linear search for unknown names
    pub fn from_selector(selector: &str) -> Self {
        selector.parse().unwrap_or_else(|_| {
            tracing::warn!("Unknown search selector {:?}, using linear search", selector);
            SearchAlgorithm::default()
        })
    }
}

impl FromStr for SearchAlgorithm {
    type Err = VisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        SearchAlgorithm::ALL
            .into_iter()
            .find(|a| {
                a.selector().eq_ignore_ascii_case(s)
                    || a.selector()
                        .trim_end_matches("Search")
                        .eq_ignore_ascii_case(s)
            })
            .ok_or_else(|| VisError::UnknownAlgorithm(s.to_string()))
    }
}

impl From<String> for SearchAlgorithm {
    fn from(s: String) -> Self {
        SearchAlgorithm::from_selector(&s)
    }
}

impl From<SearchAlgorithm> for String {
    fn from(a: SearchAlgorithm) -> Self {
        a.selector().to_string()
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
