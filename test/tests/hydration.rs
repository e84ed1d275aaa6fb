//! First-frame behavior for server-rendered pages.

use floem_responsive_test::prelude::*;

#[test]
fn marker_defers_measured_width() {
    let harness = ViewportHarness::server_rendered(
        ResponsiveOptions::new().breakpoint("mobile", 600.0),
        480.0,
    );
    let recorder = WidthRecorder::track(harness.state());

    assert_eq!(harness.state().width(), 1024.0);
    assert_eq!(harness.state().is("isMobile"), Some(false));
    assert_eq!(harness.viewport().pending_frames(), 1);

    assert_eq!(harness.frame(), 1);
    assert_eq!(harness.state().width(), 480.0);
    assert_eq!(harness.state().is("isMobile"), Some(true));

    assert_eq!(recorder.widths(), vec![1024.0, 480.0]);
    assert_eq!(harness.frame(), 0);
}

#[test]
fn explicit_flag_enables_hydration() {
    let harness = ViewportHarness::new(
        ResponsiveOptions::new()
            .default_width(1280.0)
            .server_rendered(true),
        640.0,
    );

    assert_eq!(harness.state().width(), 1280.0);
    harness.frame();
    assert_eq!(harness.state().width(), 640.0);
}

#[test]
fn explicit_flag_overrides_marker() {
    let harness = ViewportHarness::server_rendered(
        ResponsiveOptions::new().server_rendered(false),
        640.0,
    );

    assert_eq!(harness.state().width(), 640.0);
    assert_eq!(harness.viewport().pending_frames(), 0);
}

#[test]
fn before_provide_sees_default_width_when_hydrating() {
    let seen = std::rc::Rc::new(std::cell::Cell::new(0.0));
    let harness = ViewportHarness::server_rendered(
        ResponsiveOptions::new().before_provide({
            let seen = seen.clone();
            move |value| seen.set(value.width)
        }),
        640.0,
    );

    assert_eq!(seen.get(), 1024.0);
    harness.frame();
    assert_eq!(harness.state().width(), 640.0);
}

#[test]
fn resize_before_first_frame() {
    let harness = ViewportHarness::server_rendered(ResponsiveOptions::new(), 640.0);
    let recorder = WidthRecorder::track(harness.state());

    harness.resize(700.0);
    assert_eq!(harness.state().width(), 700.0);

    harness.frame();
    assert_eq!(harness.state().width(), 700.0);
    assert_eq!(recorder.widths(), vec![1024.0, 700.0, 700.0]);
}

#[test]
fn headless_never_hydrates() {
    let state = install(ResponsiveOptions::new().server_rendered(true).default_width(900.0));
    assert_eq!(state.width(), 900.0);
}
