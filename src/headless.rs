//! Headless viewport for tests and hosts without a window.
//!
//! [`HeadlessViewport`] keeps its dimensions in memory, dispatches resize
//! notifications when told to and queues animation frame callbacks until
//! [`HeadlessViewport::run_animation_frame`] is called. It lets the full
//! setup, hydration and resize cycle run without a windowing system.
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use floem_responsive::{HeadlessViewport, ResponsiveOptions, install};
//!
//! let viewport = Rc::new(HeadlessViewport::with_scrollbar(800.0, 15.0));
//! let responsive = install(
//!     ResponsiveOptions::new()
//!         .breakpoint("mobile", 600.0)
//!         .viewport(viewport.clone()),
//! );
//! assert_eq!(responsive.width(), 785.0);
//!
//! viewport.resize(500.0, 485.0);
//! assert_eq!(responsive.is("isMobile"), Some(true));
//! ```

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use smallvec::SmallVec;

use crate::viewport::{ResizeEvent, ResizeListener, Viewport};

/// An in-memory [`Viewport`].
///
/// Listeners are invoked synchronously from [`resize`](Self::resize), in
/// registration order.
pub struct HeadlessViewport {
    outer_width: Cell<f64>,
    content_width: Cell<f64>,
    server_rendered: Cell<bool>,
    listeners: RefCell<SmallVec<[ResizeListener; 2]>>,
    frames: RefCell<VecDeque<Box<dyn FnOnce()>>>,
}

impl HeadlessViewport {
    /// Create a viewport without a scrollbar.
    pub fn new(width: f64) -> Self {
        Self::new_with_widths(width, width)
    }

    /// Create a viewport whose content area is narrowed by a scrollbar.
    pub fn with_scrollbar(outer_width: f64, scrollbar_width: f64) -> Self {
        Self::new_with_widths(outer_width, outer_width - scrollbar_width)
    }

    pub fn new_with_widths(outer_width: f64, content_width: f64) -> Self {
        Self {
            outer_width: Cell::new(outer_width),
            content_width: Cell::new(content_width),
            server_rendered: Cell::new(false),
            listeners: RefCell::new(SmallVec::new()),
            frames: RefCell::new(VecDeque::new()),
        }
    }

    /// Mark the viewport as hosting a page that was rendered ahead of time.
    pub fn server_rendered(self, server_rendered: bool) -> Self {
        self.server_rendered.set(server_rendered);
        self
    }

    /// Set both widths and notify every resize listener.
    pub fn resize(&self, outer_width: f64, content_width: f64) -> ResizeEvent {
        self.outer_width.set(outer_width);
        self.content_width.set(content_width);
        let event = ResizeEvent {
            outer_width,
            content_width,
        };
        self.dispatch(&event);
        event
    }

    /// Resize the content area, keeping the current scrollbar width.
    pub fn resize_content(&self, content_width: f64) -> ResizeEvent {
        let scrollbar = self.outer_width.get() - self.content_width.get();
        self.resize(content_width + scrollbar, content_width)
    }

    fn dispatch(&self, event: &ResizeEvent) {
        // Listeners may register further listeners, so don't hold the borrow.
        let listeners = self.listeners.borrow().clone();
        for listener in listeners {
            listener(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn pending_frames(&self) -> usize {
        self.frames.borrow().len()
    }

    /// Run the callbacks queued before this call and return how many ran.
    ///
    /// Callbacks requested while the frame runs are deferred to the next one.
    pub fn run_animation_frame(&self) -> usize {
        let frames = std::mem::take(&mut *self.frames.borrow_mut());
        let count = frames.len();
        for frame in frames {
            frame();
        }
        count
    }
}

impl Viewport for HeadlessViewport {
    fn outer_width(&self) -> f64 {
        self.outer_width.get()
    }

    fn content_width(&self) -> f64 {
        self.content_width.get()
    }

    fn add_resize_listener(&self, listener: ResizeListener) {
        self.listeners.borrow_mut().push(listener);
    }

    fn request_animation_frame(&self, callback: Box<dyn FnOnce()>) {
        self.frames.borrow_mut().push_back(callback);
    }

    fn is_server_rendered(&self) -> bool {
        self.server_rendered.get()
    }
}
