use std::rc::Rc;

use tracing::trace;

use crate::state::ResponsiveState;
use crate::viewport::{ResizeEvent, Viewport, read_width};

/// Called after the width has been updated for a resize event.
pub type OnResize = Rc<dyn Fn(&ResizeEvent, &ResponsiveState)>;

/// Keep `state` in sync with the viewport width.
///
/// The listener is never removed; it lives as long as the viewport and only
/// holds a weak handle back to it. Each event re-measures the viewport, writes
/// the width and then calls `on_resize` with the updated state. Panics from
/// `on_resize` are not caught.
pub fn attach(
    viewport: Option<&Rc<dyn Viewport>>,
    state: &ResponsiveState,
    fallback: f64,
    on_resize: Option<OnResize>,
) {
    let Some(viewport) = viewport else {
        return;
    };

    let listener_viewport = Rc::downgrade(viewport);
    let state = state.clone();
    viewport.add_resize_listener(Rc::new(move |event: &ResizeEvent| {
        let Some(viewport) = listener_viewport.upgrade() else {
            return;
        };
        let width = read_width(Some(&*viewport), fallback);
        trace!(width, outer_width = event.outer_width, "viewport resized");
        state.set_width(width);
        if let Some(on_resize) = &on_resize {
            on_resize(event, &state);
        }
    }));
}
