//! # Floem Responsive
//! One reactive viewport width per application, with named breakpoint
//! predicates derived from it.
//!
//! Views that need to adapt to the window size read the shared
//! [`ResponsiveState`] instead of each listening for resize events. Reads go
//! through a floem signal, so any effect or view that reads the width or a
//! predicate is re-run when the viewport is resized.
//!
//! ## Example
//! ```rust
//! use std::rc::Rc;
//! use floem_responsive::prelude::*;
//!
//! let viewport = Rc::new(HeadlessViewport::with_scrollbar(1280.0, 15.0));
//! install(
//!     ResponsiveOptions::new()
//!         .breakpoint("mobile", 600.0)
//!         .breakpoint("desktop", BreakpointSpec { value: 1200.0, ignore_scrollbar: true })
//!         .viewport(viewport.clone()),
//! );
//!
//! // Anywhere below the installing root:
//! let responsive = use_default_responsive().unwrap();
//! assert_eq!(responsive.width(), 1265.0);
//! assert_eq!(responsive.is("isDesktop"), Some(false));
//!
//! viewport.resize(615.0, 600.0);
//! assert_eq!(responsive.is("isMobile"), Some(false));
//! assert_eq!(responsive.is("isDesktop"), Some(true));
//! ```
//!
//! ## Breakpoints
//!
//! Every breakpoint key becomes a predicate named `is` followed by the key
//! with its first letter upper-cased. A predicate holds while the width is at
//! or below its threshold. By default the scrollbar width measured at setup is
//! added to the width before comparing, so thresholds describe the usable
//! content width. A [`BreakpointSpec`] with `ignore_scrollbar` compares the
//! raw width instead.
//!
//! The scrollbar is measured once, in [`install`], and not re-measured on
//! resize.
//!
//! ## Server-rendered pages
//!
//! When the first frame was rendered ahead of time for the default width, the
//! state starts at that width and switches to the measured width on the next
//! animation frame, so the first client frame matches the pre-rendered one.
//! This is enabled with [`ResponsiveOptions::server_rendered`] or by a viewport
//! that reports [`Viewport::is_server_rendered`].
//!
//! ## Without a window
//!
//! When no viewport is given, the width stays at the default width, the
//! scrollbar width is 0 and no resize listener is registered.
//! [`HeadlessViewport`] can stand in for a real window in tests.

pub mod breakpoint;
pub mod config;
pub mod context;
pub mod headless;
pub mod hydration;
mod install;
mod options;
pub mod resize;
pub mod scrollbar;
mod state;
pub mod viewport;

pub use breakpoint::{Breakpoint, BreakpointSpec, Breakpoints, Predicate, predicate_name};
pub use config::{ConfigError, DEFAULT_WIDTH, ResponsiveConfig};
pub use context::{
    ContextPublisher, DEFAULT_NAME, Publish, ResponsiveRegistry, use_default_responsive,
    use_responsive,
};
pub use floem_reactive as reactive;
pub use headless::HeadlessViewport;
pub use hydration::HydrationScheduler;
pub use install::{install, install_with};
pub use options::{BeforeProvide, ResponsiveOptions};
pub use resize::OnResize;
pub use state::{ResponsiveSnapshot, ResponsiveState, UnwrappedResponsive};
pub use viewport::{ResizeEvent, ResizeListener, Viewport};

pub mod prelude {
    pub use crate::{
        Breakpoint, BreakpointSpec, HeadlessViewport, ResizeEvent, ResponsiveOptions,
        ResponsiveState, Viewport, install, use_default_responsive, use_responsive,
    };
}
