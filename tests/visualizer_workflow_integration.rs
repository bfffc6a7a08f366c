//! Integration tests for the visualizer controller workflow
//!
//! These tests drive [`Visualizer`] the way the UI does: change settings,
//! start sorts and searches, and watch what the display ends up showing.

mod common;

use algovis_rs::{
    IgnoreReason, PlaybackKind, PlaybackOutcome, SearchAlgorithm, SortAlgorithm, Theme,
    VisualizerConfig,
};
use common::builders::VisualizerBuilder;
use common::{assert_idle, assert_permutation, assert_sorted};

#[tokio::test(start_paused = true)]
async fn test_sort_then_search_workflow() {
    let mut vis = VisualizerBuilder::new()
        .size(30)
        .seed(11)
        .sort(SortAlgorithm::Heap)
        .build();
    let original = vis.sequence();

    let outcome = vis.start_sort().await;
    assert!(outcome.is_completed());
    assert_sorted(&vis.sequence());
    assert_permutation(&vis.sequence(), &original);
    assert!(vis.is_display_sorted());

    let target = vis.sequence()[17];
    vis.select_search(SearchAlgorithm::Binary);
    vis.set_search_value(format!(" {} ", target));
    assert!(vis.can_search());

    let report = vis.start_search().await.report().cloned().unwrap();
    let found = report.found.unwrap();
    assert_eq!(vis.sequence()[found], target);
    assert_idle(&vis.state());
}

#[tokio::test(start_paused = true)]
async fn test_every_sort_through_the_controller() {
    for algorithm in SortAlgorithm::ALL {
        let mut vis = VisualizerBuilder::new().seed(5).build();
        vis.select_sort(algorithm);

        let report = vis.start_sort().await.report().cloned().unwrap();
        assert_eq!(report.kind, PlaybackKind::Sort);
        assert!(vis.is_display_sorted(), "{} left the display unsorted", algorithm);
    }
}

#[tokio::test(start_paused = true)]
async fn test_binary_search_sorts_unsorted_display() {
    let vis = VisualizerBuilder::new()
        .sequence(&[40, 10, 30, 20])
        .search(SearchAlgorithm::Binary, "25")
        .build();

    let report = vis.start_search().await.report().cloned().unwrap();
    assert_eq!(report.found, None);
    assert_eq!(vis.sequence(), vec![10, 20, 30, 40]);
}

#[tokio::test(start_paused = true)]
async fn test_linear_search_leaves_display_untouched() {
    let vis = VisualizerBuilder::new()
        .sequence(&[40, 10, 30, 20])
        .search(SearchAlgorithm::Linear, "30")
        .build();

    let report = vis.start_search().await.report().cloned().unwrap();
    assert_eq!(report.found, Some(2));
    assert_eq!(vis.sequence(), vec![40, 10, 30, 20]);
}

#[tokio::test(start_paused = true)]
async fn test_invalid_target_is_ignored() {
    for text in ["", "   ", "abc", "4.5"] {
        let vis = VisualizerBuilder::new()
            .sequence(&[1, 2, 3])
            .search(SearchAlgorithm::Linear, text)
            .build();

        assert!(!vis.can_search());
        assert_eq!(
            vis.start_search().await,
            PlaybackOutcome::Ignored(IgnoreReason::MissingTarget)
        );
        assert_idle(&vis.state());
    }
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_requests_run_once() {
    let vis = VisualizerBuilder::new()
        .sequence(&[5, 4, 3, 2, 1])
        .search(SearchAlgorithm::Linear, "3")
        .build();

    let (sort, search) = tokio::join!(vis.start_sort(), vis.start_search());

    assert!(sort.is_completed());
    assert_eq!(search, PlaybackOutcome::Ignored(IgnoreReason::Busy));
    assert_eq!(vis.sequence(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_regenerate_keeps_reference_in_step() {
    let mut vis = VisualizerBuilder::new().size(25).seed(99).build();
    let before = vis.sequence();

    assert!(vis.reset());
    let after = vis.sequence();
    assert_eq!(after.len(), 25);
    assert_ne!(after, before);

    let mut expected = after.clone();
    expected.sort_unstable();
    assert_eq!(vis.sorted_reference(), expected.as_slice());
    assert_idle(&vis.state());
}

#[test]
fn test_generated_values_stay_in_range() {
    let vis = VisualizerBuilder::new().size(100).seed(1).build();
    let range = vis.config().value_range;
    assert!(vis.sequence().iter().all(|v| range.contains(*v)));
}

#[test]
fn test_settings_round_trip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("visualizer.toml");

    let mut vis = VisualizerBuilder::new().build();
    vis.set_speed(80).unwrap();
    vis.select_sort(SortAlgorithm::Quick);
    assert_eq!(vis.toggle_theme(), Theme::Dark);
    vis.config().save_to(&path).unwrap();

    let loaded = VisualizerConfig::load_from(&path).unwrap();
    assert_eq!(&loaded, vis.config());
    assert_eq!(loaded.sort_algorithm, SortAlgorithm::Quick);
}
