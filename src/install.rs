use tracing::debug;

use crate::breakpoint::build_predicates;
use crate::context::{ContextPublisher, Publish};
use crate::hydration::HydrationScheduler;
use crate::options::ResponsiveOptions;
use crate::resize;
use crate::scrollbar;
use crate::state::{ResponsiveState, UnwrappedResponsive};

/// Create the responsive state and publish it in the reactive context.
///
/// Call once per application, before any view reads the state with
/// [`use_responsive`](crate::use_responsive).
pub fn install(options: ResponsiveOptions) -> ResponsiveState {
    install_with(&ContextPublisher, options)
}

/// Same as [`install`], publishing through `publisher`.
pub fn install_with(publisher: &impl Publish, options: ResponsiveOptions) -> ResponsiveState {
    let ResponsiveOptions {
        breakpoints,
        default_width,
        viewport,
        before_provide,
        on_resize,
        name,
        respect_scrollbar_width,
        server_rendered,
    } = options;

    let scrollbar_width = scrollbar::probe(viewport.as_deref(), respect_scrollbar_width);
    let predicates = build_predicates(&breakpoints, scrollbar_width);

    let hydration = HydrationScheduler::new(viewport.as_deref(), server_rendered);
    let width = hydration.initial_width(viewport.as_deref(), default_width);

    let mut value = UnwrappedResponsive::new(width, scrollbar_width, predicates);
    if let Some(before_provide) = before_provide {
        before_provide(&mut value);
    }

    let state = ResponsiveState::wrap(value);
    hydration.schedule_correction(&state, viewport.as_ref(), default_width);
    resize::attach(viewport.as_ref(), &state, default_width, on_resize);

    debug!(
        name = %name,
        width = state.width_untracked(),
        scrollbar_width,
        predicates = state.predicate_names().count(),
        headless = viewport.is_none(),
        hydrating = hydration.is_deferred(),
        "installed responsive state"
    );
    publisher.publish(&name, state.clone());
    state
}
