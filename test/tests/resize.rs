//! Resize events flowing into the shared state.

use floem_responsive_test::prelude::*;

#[test]
fn initial_width_is_measured() {
    let harness = ViewportHarness::with_scrollbar(ResponsiveOptions::new(), 1024.0, 16.0);
    assert_eq!(harness.state().width(), 1008.0);
}

#[test]
fn resize_updates_width_synchronously() {
    let harness = ViewportHarness::new(ResponsiveOptions::new(), 1024.0);
    harness.resize(800.0);
    assert_eq!(harness.state().width(), 800.0);
}

#[test]
fn on_resize_sees_updated_state() {
    let tracker = ResizeTracker::new();
    let harness = ViewportHarness::new(tracker.attach(ResponsiveOptions::new()), 1024.0);

    harness.resize(800.0);
    harness.resize(640.0);

    assert_eq!(tracker.count(), 2);
    let events = tracker.events();
    assert_eq!(events[0].0.content_width, 800.0);
    assert_eq!(events[0].1, 800.0);
    assert_eq!(events[1].1, 640.0);
}

#[test]
fn every_event_is_applied_in_order() {
    let harness = ViewportHarness::new(ResponsiveOptions::new(), 1024.0);
    let recorder = WidthRecorder::track(harness.state());

    for width in [1000.0, 900.0, 900.0, 320.0] {
        harness.resize(width);
    }

    assert_eq!(recorder.widths(), vec![1024.0, 1000.0, 900.0, 900.0, 320.0]);
}

#[test]
fn one_listener_per_install() {
    let harness = ViewportHarness::new(ResponsiveOptions::new(), 1024.0);
    assert_eq!(harness.viewport().listener_count(), 1);
}

#[test]
fn without_viewport_width_is_static() {
    let tracker = ResizeTracker::new();
    let state = install(
        tracker
            .attach(ResponsiveOptions::new().breakpoint("mobile", 600.0))
            .default_width(500.0),
    );

    assert_eq!(state.width(), 500.0);
    assert_eq!(state.scrollbar_width(), 0.0);
    assert_eq!(state.is("isMobile"), Some(true));
    assert_eq!(tracker.count(), 0);
}
