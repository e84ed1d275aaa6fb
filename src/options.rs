use std::rc::Rc;

use crate::breakpoint::{Breakpoint, Breakpoints};
use crate::config::{DEFAULT_WIDTH, ResponsiveConfig};
use crate::context::DEFAULT_NAME;
use crate::resize::OnResize;
use crate::state::{ResponsiveState, UnwrappedResponsive};
use crate::viewport::{ResizeEvent, Viewport};

pub type BeforeProvide = Box<dyn FnOnce(&mut UnwrappedResponsive)>;

/// Everything [`install`](crate::install) needs.
///
/// ```rust
/// use floem_responsive::{BreakpointSpec, ResponsiveOptions};
///
/// let options = ResponsiveOptions::new()
///     .breakpoint("mobile", 600.0)
///     .breakpoint("desktop", BreakpointSpec { value: 1200.0, ignore_scrollbar: true })
///     .default_width(1280.0)
///     .name("viewport");
/// ```
pub struct ResponsiveOptions {
    pub(crate) breakpoints: Breakpoints,
    pub(crate) default_width: f64,
    pub(crate) viewport: Option<Rc<dyn Viewport>>,
    pub(crate) before_provide: Option<BeforeProvide>,
    pub(crate) on_resize: Option<OnResize>,
    pub(crate) name: String,
    pub(crate) respect_scrollbar_width: bool,
    pub(crate) server_rendered: Option<bool>,
}

impl Default for ResponsiveOptions {
    fn default() -> Self {
        Self {
            breakpoints: Breakpoints::new(),
            default_width: DEFAULT_WIDTH,
            viewport: None,
            before_provide: None,
            on_resize: None,
            name: DEFAULT_NAME.to_string(),
            respect_scrollbar_width: true,
            server_rendered: None,
        }
    }
}

impl ResponsiveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn breakpoint(mut self, key: impl Into<String>, breakpoint: impl Into<Breakpoint>) -> Self {
        self.breakpoints.insert(key.into(), breakpoint.into());
        self
    }

    pub fn breakpoints<K, B>(mut self, breakpoints: impl IntoIterator<Item = (K, B)>) -> Self
    where
        K: Into<String>,
        B: Into<Breakpoint>,
    {
        self.breakpoints.extend(
            breakpoints
                .into_iter()
                .map(|(key, breakpoint)| (key.into(), breakpoint.into())),
        );
        self
    }

    /// Width used without a viewport, and for the first frame of a
    /// server-rendered page.
    pub fn default_width(mut self, width: f64) -> Self {
        self.default_width = width;
        self
    }

    /// Track this viewport. Without one the state stays at the default width.
    pub fn viewport(mut self, viewport: Rc<dyn Viewport>) -> Self {
        self.viewport = Some(viewport);
        self
    }

    /// Inspect or edit the plain value right before it becomes reactive.
    pub fn before_provide(mut self, hook: impl FnOnce(&mut UnwrappedResponsive) + 'static) -> Self {
        self.before_provide = Some(Box::new(hook));
        self
    }

    /// Called for every resize event, after the width has been updated.
    pub fn on_resize(
        mut self,
        callback: impl Fn(&ResizeEvent, &ResponsiveState) + 'static,
    ) -> Self {
        self.on_resize = Some(Rc::new(callback));
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn respect_scrollbar_width(mut self, respect: bool) -> Self {
        self.respect_scrollbar_width = respect;
        self
    }

    /// Force hydration mode on or off instead of asking the viewport.
    pub fn server_rendered(mut self, server_rendered: bool) -> Self {
        self.server_rendered = Some(server_rendered);
        self
    }
}

impl From<ResponsiveConfig> for ResponsiveOptions {
    fn from(config: ResponsiveConfig) -> Self {
        Self {
            breakpoints: config.breakpoints,
            default_width: config.default_width,
            name: config.name,
            respect_scrollbar_width: config.respect_scrollbar_width,
            server_rendered: config.server_rendered,
            ..Default::default()
        }
    }
}
