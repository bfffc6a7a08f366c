//! Integration tests for the sort and search trace engines
//!
//! These tests run every engine through the public API and check the event
//! logs the way a playback would consume them.

mod common;

use algovis_rs::{
    search_trace, sort_trace, Event, Indices, SearchAlgorithm, SequenceGenerator, SortAlgorithm,
    Trace, TraceSource, ValueRange,
};
use common::{assert_indices_in_bounds, assert_permutation, assert_sorted, probes};

#[test]
fn test_bubble_trace_of_three() {
    let trace = sort_trace(&[3, 1, 2], SortAlgorithm::Bubble);

    assert_eq!(trace.source(), TraceSource::Sort(SortAlgorithm::Bubble));
    assert_eq!(
        trace.events(),
        &[
            Event::Compare {
                indices: Indices::Two(0, 1),
                snapshot: Some(vec![3, 1, 2]),
            },
            Event::Swap {
                indices: Indices::Two(0, 1),
                snapshot: vec![1, 3, 2],
            },
            Event::Compare {
                indices: Indices::Two(1, 2),
                snapshot: Some(vec![1, 3, 2]),
            },
            Event::Swap {
                indices: Indices::Two(1, 2),
                snapshot: vec![1, 2, 3],
            },
            Event::Compare {
                indices: Indices::Two(0, 1),
                snapshot: Some(vec![1, 2, 3]),
            },
        ]
    );
}

#[test]
fn test_every_sort_on_random_sequences() {
    let mut generator = SequenceGenerator::with_seed(ValueRange::default(), 42).unwrap();

    for size in [10, 37, 100] {
        let input = generator.generate(size);
        for algorithm in SortAlgorithm::ALL {
            let trace = sort_trace(&input, algorithm);

            assert_indices_in_bounds(&trace, input.len());
            let result = trace.final_snapshot().unwrap_or(&input);
            assert_sorted(result);
            assert_permutation(result, &input);
        }
    }
}

#[test]
fn test_duplicates_and_negatives_sort() {
    let input = vec![4, -2, 4, 0, -2, 7, 4];
    for algorithm in SortAlgorithm::ALL {
        let trace = sort_trace(&input, algorithm);
        let result = trace.final_snapshot().unwrap();
        assert_eq!(result, &[-2, -2, 0, 4, 4, 4, 7], "{}", algorithm);
    }
}

#[test]
fn test_trivial_inputs_produce_no_events() {
    for algorithm in SortAlgorithm::ALL {
        assert!(sort_trace::<i64>(&[], algorithm).is_empty());
        assert!(sort_trace(&[42], algorithm).is_empty());
    }
}

#[test]
fn test_merge_writes_single_positions() {
    let trace = sort_trace(&[2, 1], SortAlgorithm::Merge);
    let writes: Vec<_> = trace
        .iter()
        .filter_map(|e| match e {
            Event::Swap { indices, .. } => Some(*indices),
            _ => None,
        })
        .collect();
    assert_eq!(writes, vec![Indices::One(0), Indices::One(1)]);
    assert_eq!(trace.final_snapshot(), Some(&[1, 2][..]));
}

#[test]
fn test_linear_search_found() {
    let trace = search_trace(&[5, 3, 8, 1, 9], SearchAlgorithm::Linear, &8);
    assert_eq!(probes(&trace), vec![0, 1, 2]);
    assert_eq!(trace.found_index(), Some(2));
    assert_eq!(trace.len(), 4);
}

#[test]
fn test_linear_search_missing_probes_everything() {
    let trace = search_trace(&[5, 3, 8], SearchAlgorithm::Linear, &7);
    assert_eq!(probes(&trace), vec![0, 1, 2]);
    assert_eq!(trace.found_index(), None);
    assert!(trace.iter().all(Event::is_compare));
}

#[test]
fn test_binary_search_probes() {
    let sorted = [1, 3, 5, 8, 9];

    let trace = search_trace(&sorted, SearchAlgorithm::Binary, &8);
    assert_eq!(probes(&trace), vec![2, 3]);
    assert_eq!(trace.found_index(), Some(3));

    let trace = search_trace(&sorted, SearchAlgorithm::Binary, &4);
    assert_eq!(probes(&trace), vec![2, 0, 1]);
    assert_eq!(trace.found_index(), None);

    let trace = search_trace(&sorted, SearchAlgorithm::Binary, &0);
    assert_eq!(probes(&trace), vec![2, 0]);
}

#[test]
fn test_search_on_empty_sequence() {
    for algorithm in SearchAlgorithm::ALL {
        assert!(search_trace::<i64>(&[], algorithm, &1).is_empty());
    }
}

#[test]
fn test_search_compares_carry_no_snapshot() {
    let trace = search_trace(&[1, 2, 3], SearchAlgorithm::Binary, &3);
    assert!(trace
        .iter()
        .all(|e| !matches!(e, Event::Compare { snapshot: Some(_), .. })));
}

#[test]
fn test_trace_json_shape() {
    let trace = sort_trace(&[2, 1], SortAlgorithm::Bubble);
    let json = serde_json::to_value(&trace).unwrap();

    assert_eq!(json["source"]["sort"], "bubbleSort");
    assert_eq!(json["events"][0]["type"], "compare");
    assert_eq!(json["events"][0]["indices"], serde_json::json!([0, 1]));
    assert_eq!(json["events"][1]["type"], "swap");
    assert_eq!(json["events"][1]["snapshot"], serde_json::json!([1, 2]));

    let search = search_trace(&[1, 2], SearchAlgorithm::Linear, &2);
    let json = serde_json::to_value(&search).unwrap();
    assert!(json["events"][0].get("snapshot").is_none());
    assert_eq!(json["events"][2], serde_json::json!({ "type": "found", "index": 1 }));
}

#[test]
fn test_trace_json_reads_back() {
    let input = vec![9, 4, 7, 1];
    for algorithm in SortAlgorithm::ALL {
        let trace = sort_trace(&input, algorithm);
        let text = serde_json::to_string(&trace).unwrap();
        let parsed: Trace = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, trace, "{}", algorithm);
    }

    let search = search_trace(&[1, 4, 7, 9], SearchAlgorithm::Binary, &5);
    let text = serde_json::to_string_pretty(&search).unwrap();
    let parsed: Trace = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, search);
    assert_eq!(parsed.source(), TraceSource::Search(SearchAlgorithm::Binary));
}
