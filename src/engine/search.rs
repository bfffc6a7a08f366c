//! Search engines
//!
//! Search traces carry no array snapshots: the displayed sequence does not
//! change while searching. A [`Event::Found`] is always the final event.

use crate::types::{Event, Indices};

fn probe<T>(index: usize) -> Event<T> {
    Event::Compare {
        indices: Indices::One(index),
        snapshot: None,
    }
}

/// Left-to-right scan that stops at the first match
pub fn linear<T: PartialEq>(sequence: &[T], target: &T) -> Vec<Event<T>> {
    let mut events = Vec::new();

    for (index, value) in sequence.iter().enumerate() {
        events.push(probe(index));
        if value == target {
            events.push(Event::Found { index });
            break;
        }
    }

    events
}

/// Shrinking inclusive bounds with a floor midpoint; `sequence` must be ascending
pub fn binary<T: PartialOrd>(sequence: &[T], target: &T) -> Vec<Event<T>> {
    let mut events = Vec::new();
    let Some(mut right) = sequence.len().checked_sub(1) else {
        return events;
    };
    let mut left = 0;

    while left <= right {
        let mid = (left + right) / 2;
        events.push(probe(mid));

        let value = &sequence[mid];
        if value == target {
            events.push(Event::Found { index: mid });
            break;
        }

        if value < target {
            left = mid + 1;
        } else if mid == 0 {
            // right bound would drop below zero
            break;
        } else {
            right = mid - 1;
        }
    }

    events
}
