//! The host window as seen by the responsive state.
//!
//! A [`Viewport`] reports two widths: the outer width, which includes a
//! vertical scrollbar when one is shown, and the content width the document
//! can actually lay out into. Hosts without a real window simply don't
//! provide one and every reader falls back to a configured width.

use std::rc::Rc;

/// Dimensions reported with a resize notification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeEvent {
    pub outer_width: f64,
    pub content_width: f64,
}

pub type ResizeListener = Rc<dyn Fn(&ResizeEvent)>;

pub trait Viewport {
    /// Width of the window including any scrollbar.
    fn outer_width(&self) -> f64;

    /// Width available to document content.
    fn content_width(&self) -> f64;

    /// Register a listener that lives as long as the viewport.
    fn add_resize_listener(&self, listener: ResizeListener);

    /// Run `callback` once, before the next frame is presented.
    fn request_animation_frame(&self, callback: Box<dyn FnOnce()>);

    /// Whether the host rendered the first frame ahead of time and expects the
    /// first client frame to match it.
    fn is_server_rendered(&self) -> bool {
        false
    }
}

/// Current width: the viewport's content width, or `fallback` without one.
pub fn read_width(viewport: Option<&dyn Viewport>, fallback: f64) -> f64 {
    match viewport {
        Some(viewport) => viewport.content_width(),
        None => fallback,
    }
}
