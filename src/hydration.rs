//! First-frame width for pages rendered ahead of time.
//!
//! Markup produced without a real viewport was laid out for the fallback
//! width. When the client takes over that markup, its first frame has to use
//! the same width or the two disagree. The real width is written one
//! animation frame later.

use std::rc::Rc;

use tracing::debug;

use crate::state::ResponsiveState;
use crate::viewport::{Viewport, read_width};

/// Whether the real width is written immediately or deferred by one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HydrationScheduler {
    deferred: bool,
}

impl HydrationScheduler {
    /// An explicit `server_rendered` flag wins over the viewport's marker.
    /// Without a viewport nothing is ever deferred.
    pub fn new(viewport: Option<&dyn Viewport>, server_rendered: Option<bool>) -> Self {
        let deferred = match viewport {
            Some(viewport) => server_rendered.unwrap_or_else(|| viewport.is_server_rendered()),
            None => false,
        };
        Self { deferred }
    }

    pub fn is_deferred(&self) -> bool {
        self.deferred
    }

    /// Width the state starts with.
    pub fn initial_width(&self, viewport: Option<&dyn Viewport>, fallback: f64) -> f64 {
        if self.deferred {
            fallback
        } else {
            read_width(viewport, fallback)
        }
    }

    /// Queue the correction to the measured width when deferred.
    pub fn schedule_correction(
        &self,
        state: &ResponsiveState,
        viewport: Option<&Rc<dyn Viewport>>,
        fallback: f64,
    ) {
        if !self.deferred {
            return;
        }
        let Some(viewport) = viewport else {
            return;
        };

        debug!(fallback, "deferring viewport width to the next animation frame");
        let state = state.clone();
        let frame_viewport = Rc::downgrade(viewport);
        viewport.request_animation_frame(Box::new(move || {
            let Some(viewport) = frame_viewport.upgrade() else {
                return;
            };
            let width = read_width(Some(&*viewport), fallback);
            debug!(width, "applying measured viewport width after hydration");
            state.set_width(width);
        }));
    }
}

/// Bring `state` to its first-frame width and queue the correction if needed.
///
/// With `server_rendered` the width is set to `fallback` now and to the
/// measured width on the next animation frame. Otherwise the measured width is
/// written immediately. The write happens even when the width is unchanged, so
/// readers are always notified. Without a viewport this does nothing.
pub fn schedule(
    state: &ResponsiveState,
    viewport: Option<&Rc<dyn Viewport>>,
    fallback: f64,
    server_rendered: bool,
) {
    let Some(viewport) = viewport else {
        return;
    };
    let scheduler = HydrationScheduler::new(Some(&**viewport), Some(server_rendered));
    state.set_width(scheduler.initial_width(Some(&**viewport), fallback));
    scheduler.schedule_correction(state, Some(viewport), fallback);
}
