//! Common test utilities and helpers

#![allow(dead_code)] // Test utilities may not all be used in every test file

pub mod builders;

use algovis_rs::{Event, PlaybackState, Trace, Value};

/// Assert a slice is in non-decreasing order
pub fn assert_sorted(values: &[Value]) {
    assert!(
        values.windows(2).all(|w| w[0] <= w[1]),
        "Expected {:?} to be sorted",
        values
    );
}

/// Assert `a` and `b` hold the same values with the same multiplicities
pub fn assert_permutation(a: &[Value], b: &[Value]) {
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    assert_eq!(a, b, "Expected a permutation");
}

/// Assert every index of every event is a valid position
pub fn assert_indices_in_bounds(trace: &Trace, len: usize) {
    if let Some(max) = trace.max_index() {
        assert!(max < len, "Index {} out of bounds for length {}", max, len);
    }
}

/// Positions probed by a search trace, in order
pub fn probes(trace: &Trace) -> Vec<usize> {
    trace
        .iter()
        .filter_map(|event| match event {
            Event::Compare { indices, .. } => Some(indices.max()),
            _ => None,
        })
        .collect()
}

/// Assert the state shows no indicators and no running playback
pub fn assert_idle(state: &PlaybackState) {
    assert!(
        state.is_idle(),
        "Expected idle state, got comparing {:?} swapping {:?} found {:?} active {:?}",
        state.comparing,
        state.swapping,
        state.found,
        state.active
    );
}
