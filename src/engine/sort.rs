//! Sort engines
//!
//! Every function returns the events of one ascending sort of `sequence`.
//! Comparisons are recorded before they are decided; swaps carry the array
//! as it looks after the exchange.

use super::Recorder;
use crate::types::Event;

/// Adjacent double loop, `n - 1` full passes
pub fn bubble<T: PartialOrd + Clone>(sequence: &[T]) -> Vec<Event<T>> {
    let mut rec = Recorder::new(sequence);
    let n = rec.len();

    for pass in 0..n.saturating_sub(1) {
        for j in 0..n - pass - 1 {
            if rec.greater(j, j + 1) {
                rec.swap(j, j + 1);
            }
        }
    }

    rec.into_events()
}

/// Scan for the minimum of the unsorted tail, one exchange per position at most
pub fn selection<T: PartialOrd + Clone>(sequence: &[T]) -> Vec<Event<T>> {
    let mut rec = Recorder::new(sequence);
    let n = rec.len();

    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..n {
            if rec.greater(min, j) {
                min = j;
            }
        }
        if min != i {
            rec.swap(i, min);
        }
    }

    rec.into_events()
}

/// Walk each new element left while its neighbor is greater
///
/// The key travels by adjacent exchanges, so every swap snapshot is a
/// permutation of the input.
pub fn insertion<T: PartialOrd + Clone>(sequence: &[T]) -> Vec<Event<T>> {
    let mut rec = Recorder::new(sequence);

    for i in 1..rec.len() {
        let mut key = i;
        while key > 0 && rec.greater(key - 1, key) {
            rec.swap(key - 1, key);
            key -= 1;
        }
    }

    rec.into_events()
}

/// Top-down merge sort with a scratch copy of each merged range
pub fn merge<T: PartialOrd + Clone>(sequence: &[T]) -> Vec<Event<T>> {
    let mut rec = Recorder::new(sequence);
    if rec.len() > 1 {
        let last = rec.len() - 1;
        merge_range(&mut rec, 0, last);
    }
    rec.into_events()
}

fn merge_range<T: PartialOrd + Clone>(rec: &mut Recorder<T>, left: usize, right: usize) {
    if left >= right {
        return;
    }
    let middle = (left + right) / 2;
    merge_range(rec, left, middle);
    merge_range(rec, middle + 1, right);
    merge_halves(rec, left, middle, right);
}

fn merge_halves<T: PartialOrd + Clone>(
    rec: &mut Recorder<T>,
    left: usize,
    middle: usize,
    right: usize,
) {
    // Indices into `scratch` are offset by `left` so that recorded
    // comparisons name positions of the full array.
    let scratch: Vec<T> = (left..=right).map(|i| rec.get(i).clone()).collect();
    let at = |i: usize| &scratch[i - left];

    let (mut i, mut j, mut k) = (left, middle + 1, left);

    while i <= middle && j <= right {
        rec.compare(i, j);
        let value = if at(i) <= at(j) {
            i += 1;
            at(i - 1).clone()
        } else {
            j += 1;
            at(j - 1).clone()
        };
        rec.write(k, value);
        k += 1;
    }

    for rest in (i..=middle).chain(j..=right) {
        rec.write(k, at(rest).clone());
        k += 1;
    }
}

/// Lomuto partition quicksort, pivot is the last element of each range
pub fn quick<T: PartialOrd + Clone>(sequence: &[T]) -> Vec<Event<T>> {
    let mut rec = Recorder::new(sequence);
    if rec.len() > 1 {
        let last = rec.len() - 1;
        quick_range(&mut rec, 0, last);
    }
    rec.into_events()
}

fn quick_range<T: PartialOrd + Clone>(rec: &mut Recorder<T>, low: usize, high: usize) {
    if low >= high {
        return;
    }
    let pivot = partition(rec, low, high);
    if pivot > low {
        quick_range(rec, low, pivot - 1);
    }
    quick_range(rec, pivot + 1, high);
}

fn partition<T: PartialOrd + Clone>(rec: &mut Recorder<T>, low: usize, high: usize) -> usize {
    // First slot after the "less than pivot" zone
    let mut store = low;

    for j in low..high {
        if rec.less(j, high) {
            rec.swap(store, j);
            store += 1;
        }
    }

    // Always recorded, even when the pivot is already in place
    rec.swap(store, high);
    store
}

/// Max-heap build followed by repeated root extraction
pub fn heap<T: PartialOrd + Clone>(sequence: &[T]) -> Vec<Event<T>> {
    let mut rec = Recorder::new(sequence);
    let n = rec.len();

    for root in (0..n / 2).rev() {
        sift_down(&mut rec, n, root);
    }

    for end in (1..n).rev() {
        rec.swap(0, end);
        sift_down(&mut rec, end, 0);
    }

    rec.into_events()
}

fn sift_down<T: PartialOrd + Clone>(rec: &mut Recorder<T>, size: usize, root: usize) {
    let mut root = root;
    loop {
        let mut largest = root;
        let left = 2 * root + 1;
        let right = 2 * root + 2;

        if left < size && rec.less(largest, left) {
            largest = left;
        }
        if right < size && rec.less(largest, right) {
            largest = right;
        }
        if largest == root {
            return;
        }

        rec.swap(root, largest);
        root = largest;
    }
}
