use crate::viewport::Viewport;

/// Measure the width taken by the vertical scrollbar.
///
/// Returns 0 without a viewport or when compensation is turned off. The
/// result is not clamped: some environments report a content width wider
/// than the window.
pub fn probe(viewport: Option<&dyn Viewport>, respect: bool) -> f64 {
    match viewport {
        Some(viewport) if respect => viewport.outer_width() - viewport.content_width(),
        _ => 0.0,
    }
}
