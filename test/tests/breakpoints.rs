//! Breakpoint predicates evaluated through an installed state.

use floem_responsive_test::prelude::*;

fn example_options() -> ResponsiveOptions {
    ResponsiveOptions::new()
        .breakpoint("mobile", 600.0)
        .breakpoint(
            "desktop",
            BreakpointSpec {
                value: 1200.0,
                ignore_scrollbar: true,
            },
        )
}

#[test]
fn example_with_scrollbar() {
    let harness = ViewportHarness::with_scrollbar(example_options(), 1280.0, 15.0);
    let state = harness.state();
    assert_eq!(state.scrollbar_width(), 15.0);

    harness.resize(585.0);
    assert_eq!(state.width(), 585.0);
    assert_eq!(state.is("isMobile"), Some(true));
    assert_eq!(state.is("isDesktop"), Some(true));

    harness.resize(590.0);
    assert_eq!(state.is("isMobile"), Some(false));

    harness.resize(1190.0);
    assert_eq!(state.is("isMobile"), Some(false));
    assert_eq!(state.is("isDesktop"), Some(true));
}

#[test]
fn thresholds_are_inclusive() {
    let harness = ViewportHarness::with_scrollbar(example_options(), 1280.0, 15.0);
    let state = harness.state();

    harness.resize(585.0);
    assert_eq!(state.is("isMobile"), Some(true));
    harness.resize(586.0);
    assert_eq!(state.is("isMobile"), Some(false));

    harness.resize(1200.0);
    assert_eq!(state.is("isDesktop"), Some(true));
    harness.resize(1201.0);
    assert_eq!(state.is("isDesktop"), Some(false));
}

#[test]
fn predicates_hold_for_every_width() {
    let harness = ViewportHarness::with_scrollbar(example_options(), 1280.0, 17.0);
    let state = harness.state();

    for width in (0..=1400).step_by(7).map(f64::from) {
        state.set_width(width);
        assert_eq!(state.is("isMobile"), Some(width + 17.0 <= 600.0), "width {width}");
        assert_eq!(state.is("isDesktop"), Some(width <= 1200.0), "width {width}");
    }
}

#[test]
fn scrollbar_is_not_remeasured_on_resize() {
    let harness = ViewportHarness::with_scrollbar(example_options(), 1280.0, 15.0);
    harness.viewport().resize(700.0, 700.0);

    let state = harness.state();
    assert_eq!(state.scrollbar_width(), 15.0);
    state.set_width(585.0);
    assert_eq!(state.is("isMobile"), Some(true));
}

#[test]
fn reader_sees_predicate_changes() {
    let harness = ViewportHarness::new(example_options(), 1000.0);
    let (recorder, flags) = WidthRecorder::track_predicate(harness.state(), "isMobile");

    harness.resize(500.0);
    harness.resize(700.0);

    assert_eq!(recorder.widths(), vec![1000.0, 500.0, 700.0]);
    assert_eq!(*flags.borrow(), vec![Some(false), Some(true), Some(false)]);
}

#[test]
fn snapshot_matches_published_shape() {
    let harness = ViewportHarness::new(example_options(), 590.0);
    let snapshot = harness.state().snapshot();

    assert_eq!(
        serde_json::to_value(&snapshot).unwrap(),
        serde_json::json!({ "width": 590.0, "isMobile": true, "isDesktop": true })
    );
}
