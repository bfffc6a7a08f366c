//! Trace engines
//!
//! Each engine runs a classic algorithm on its own working copy of the input
//! and records what it does as an ordered list of [`Event`]s. Engines are
//! pure: the caller's slice is never touched, no randomness is involved and
//! the same input always yields the same trace.
//!
//! # Entry points
//!
//! - [`sort_trace`] - run one of the six sort engines
//! - [`search_trace`] - run linear or binary search for a target
//!
//! Binary search expects ascending input. Sorting the sequence (and showing
//! the sorted order) is the caller's job, see
//! [`Visualizer::start_search`](crate::app::Visualizer::start_search).

pub mod search;
pub mod sort;

use crate::types::{Event, Indices, SearchAlgorithm, SortAlgorithm, Trace, TraceSource};

/// Produce the animation trace of `algorithm` sorting `sequence` ascending
pub fn sort_trace<T>(sequence: &[T], algorithm: SortAlgorithm) -> Trace<T>
where
    T: PartialOrd + Clone,
{
    let events = match algorithm {
        SortAlgorithm::Bubble => sort::bubble(sequence),
        SortAlgorithm::Selection => sort::selection(sequence),
        SortAlgorithm::Insertion => sort::insertion(sequence),
        SortAlgorithm::Merge => sort::merge(sequence),
        SortAlgorithm::Quick => sort::quick(sequence),
        SortAlgorithm::Heap => sort::heap(sequence),
    };

    tracing::debug!(
        algorithm = %algorithm,
        len = sequence.len(),
        events = events.len(),
        "Generated sort trace"
    );

    Trace::new(TraceSource::Sort(algorithm), events)
}

/// Produce the animation trace of `algorithm` looking for `target`
///
/// For [`SearchAlgorithm::Binary`] the sequence must already be ascending.
pub fn search_trace<T>(sequence: &[T], algorithm: SearchAlgorithm, target: &T) -> Trace<T>
where
    T: PartialOrd,
{
    let events = match algorithm {
        SearchAlgorithm::Linear => search::linear(sequence, target),
        SearchAlgorithm::Binary => search::binary(sequence, target),
    };

    tracing::debug!(
        algorithm = %algorithm,
        len = sequence.len(),
        events = events.len(),
        found = events.last().is_some_and(Event::is_found),
        "Generated search trace"
    );

    Trace::new(TraceSource::Search(algorithm), events)
}

/// Working copy plus event log shared by the sort engines
pub(crate) struct Recorder<T> {
    work: Vec<T>,
    events: Vec<Event<T>>,
}

impl<T: PartialOrd + Clone> Recorder<T> {
    pub(crate) fn new(sequence: &[T]) -> Self {
        Self {
            work: sequence.to_vec(),
            events: Vec::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.work.len()
    }

    pub(crate) fn get(&self, index: usize) -> &T {
        &self.work[index]
    }

    /// Record a comparison of `a` against `b` and report `work[a] > work[b]`
    pub(crate) fn greater(&mut self, a: usize, b: usize) -> bool {
        self.compare(a, b);
        self.work[a] > self.work[b]
    }

    /// Record a comparison of `a` against `b` and report `work[a] < work[b]`
    pub(crate) fn less(&mut self, a: usize, b: usize) -> bool {
        self.compare(a, b);
        self.work[a] < self.work[b]
    }

    /// Record a comparison without deciding anything
    pub(crate) fn compare(&mut self, a: usize, b: usize) {
        self.events.push(Event::Compare {
            indices: Indices::Two(a, b),
            snapshot: Some(self.work.clone()),
        });
    }

    /// Exchange two positions and record the result
    pub(crate) fn swap(&mut self, a: usize, b: usize) {
        self.work.swap(a, b);
        self.events.push(Event::Swap {
            indices: Indices::Two(a, b),
            snapshot: self.work.clone(),
        });
    }

    /// Overwrite one position and record the result
    pub(crate) fn write(&mut self, index: usize, value: T) {
        self.work[index] = value;
        self.events.push(Event::Swap {
            indices: Indices::One(index),
            snapshot: self.work.clone(),
        });
    }

    pub(crate) fn into_events(self) -> Vec<Event<T>> {
        self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_recorder_snapshots_follow_writes() {
        let mut recorder = Recorder::new(&[3, 1, 2]);
        assert!(recorder.greater(0, 1));
        recorder.swap(0, 1);
        recorder.write(2, 9);

        let events = recorder.into_events();
        assert_eq!(events.len(), 3);
        assert_eq!(
            events[0],
            Event::Compare {
                indices: Indices::Two(0, 1),
                snapshot: Some(vec![3, 1, 2]),
            }
        );
        assert_eq!(
            events[1],
            Event::Swap {
                indices: Indices::Two(0, 1),
                snapshot: vec![1, 3, 2],
            }
        );
        assert_eq!(
            events[2],
            Event::Swap {
                indices: Indices::One(2),
                snapshot: vec![1, 3, 9],
            }
        );
    }

    #[test]
    fn test_input_is_not_mutated() {
        let input = vec![5, 4, 3, 2, 1];
        for algorithm in SortAlgorithm::ALL {
            let _ = sort_trace(&input, algorithm);
        }
        assert_eq!(input, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_trace_source_is_tagged() {
        let trace = sort_trace(&[2, 1], SortAlgorithm::Heap);
        assert_eq!(trace.source(), TraceSource::Sort(SortAlgorithm::Heap));

        let trace = search_trace(&[2, 1], SearchAlgorithm::Linear, &1);
        assert_eq!(trace.source(), TraceSource::Search(SearchAlgorithm::Linear));
    }

    // Property-based tests using proptest
    proptest! {
        #[test]
        fn test_final_snapshot_is_sorted(
            input in prop::collection::vec(-50i64..50, 0..60)
        ) {
            let mut expected = input.clone();
            expected.sort();

            for algorithm in SortAlgorithm::ALL {
                let trace = sort_trace(&input, algorithm);
                // Property: replaying every swap ends on the sorted sequence
                let replayed = trace.final_snapshot().map(<[i64]>::to_vec).unwrap_or_else(|| input.clone());
                prop_assert_eq!(&replayed, &expected, "{} did not sort", algorithm);
            }
        }

        #[test]
        fn test_indices_stay_in_bounds(
            input in prop::collection::vec(0i64..20, 0..40)
        ) {
            for algorithm in SortAlgorithm::ALL {
                let trace = sort_trace(&input, algorithm);
                for event in &trace {
                    prop_assert!(event.max_index() < input.len());
                    prop_assert!(!event.is_found());
                }
            }
        }

        #[test]
        fn test_snapshots_keep_the_same_elements(
            input in prop::collection::vec(0i64..10, 1..30)
        ) {
            let mut expected = input.clone();
            expected.sort();

            // Exchange-based engines never lose or duplicate a value mid-run
            for algorithm in [
                SortAlgorithm::Bubble,
                SortAlgorithm::Selection,
                SortAlgorithm::Insertion,
                SortAlgorithm::Quick,
                SortAlgorithm::Heap,
            ] {
                for event in &sort_trace(&input, algorithm) {
                    if let Event::Swap { snapshot, .. } = event {
                        let mut sorted = snapshot.clone();
                        sorted.sort();
                        prop_assert_eq!(&sorted, &expected);
                    }
                }
            }
        }

        #[test]
        fn test_already_sorted_needs_no_swaps(
            mut input in prop::collection::vec(0i64..100, 0..40)
        ) {
            input.sort();
            for algorithm in [
                SortAlgorithm::Bubble,
                SortAlgorithm::Selection,
                SortAlgorithm::Insertion,
            ] {
                prop_assert_eq!(sort_trace(&input, algorithm).swap_count(), 0);
            }
        }

        #[test]
        fn test_found_index_holds_target(
            input in prop::collection::vec(0i64..30, 0..40),
            target in 0i64..30
        ) {
            let mut sorted = input.clone();
            sorted.sort();

            let linear = search_trace(&input, SearchAlgorithm::Linear, &target);
            let binary = search_trace(&sorted, SearchAlgorithm::Binary, &target);

            prop_assert_eq!(linear.found_index().is_some(), input.contains(&target));
            prop_assert_eq!(binary.found_index().is_some(), sorted.contains(&target));

            if let Some(index) = linear.found_index() {
                prop_assert_eq!(input[index], target);
                // Linear search stops at the first occurrence
                prop_assert!(input[..index].iter().all(|v| *v != target));
            }
            if let Some(index) = binary.found_index() {
                prop_assert_eq!(sorted[index], target);
            }

            // Found can only ever be the last event
            for trace in [&linear, &binary] {
                let found_positions: Vec<_> = trace.iter().enumerate()
                    .filter(|(_, e)| e.is_found())
                    .map(|(i, _)| i)
                    .collect();
                prop_assert!(found_positions.len() <= 1);
                if let Some(&pos) = found_positions.first() {
                    prop_assert_eq!(pos, trace.len() - 1);
                }
            }
        }
    }
}
