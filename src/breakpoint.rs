//! Named width thresholds and the boolean predicates derived from them.
//!
//! Each configured key becomes a predicate named `is` + the key with its first
//! character upper-cased, so `mobile` is exposed as `isMobile`.

use indexmap::IndexMap;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Width breakpoint in pixels.
///
/// A bare [`Breakpoint::Threshold`] compares the usable content width, so the
/// measured scrollbar width is added to the width before comparing. Use
/// [`BreakpointSpec::ignore_scrollbar`] to compare the raw width instead.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Breakpoint {
    Threshold(f64),
    Spec(BreakpointSpec),
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BreakpointSpec {
    pub value: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub ignore_scrollbar: bool,
}

impl Breakpoint {
    pub const fn value(&self) -> f64 {
        match self {
            Breakpoint::Threshold(value) => *value,
            Breakpoint::Spec(spec) => spec.value,
        }
    }

    pub const fn ignores_scrollbar(&self) -> bool {
        match self {
            Breakpoint::Threshold(_) => false,
            Breakpoint::Spec(spec) => spec.ignore_scrollbar,
        }
    }
}

impl From<f64> for Breakpoint {
    fn from(value: f64) -> Self {
        Breakpoint::Threshold(value)
    }
}

impl From<BreakpointSpec> for Breakpoint {
    fn from(spec: BreakpointSpec) -> Self {
        Breakpoint::Spec(spec)
    }
}

/// Breakpoints keyed by their configured name, in registration order.
pub type Breakpoints = IndexMap<String, Breakpoint>;

/// Turn a breakpoint key into its predicate name (`tablet` → `isTablet`).
pub fn predicate_name(key: &str) -> String {
    let mut chars = key.chars();
    let mut name = String::with_capacity(key.len() + 2);
    name.push_str("is");
    if let Some(first) = chars.next() {
        name.extend(first.to_uppercase());
        name.push_str(chars.as_str());
    }
    name
}

/// A breakpoint bound to the scrollbar width measured at setup.
///
/// The predicate holds nothing but its threshold; the width is supplied on
/// every evaluation so the result is never stale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Predicate {
    value: f64,
    ignore_scrollbar: bool,
    scrollbar_width: f64,
}

impl Predicate {
    pub fn new(breakpoint: Breakpoint, scrollbar_width: f64) -> Self {
        Self {
            value: breakpoint.value(),
            ignore_scrollbar: breakpoint.ignores_scrollbar(),
            scrollbar_width,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.value
    }

    /// Pixels added to the width before comparing against the threshold.
    pub fn compensation(&self) -> f64 {
        if self.ignore_scrollbar {
            0.0
        } else {
            self.scrollbar_width
        }
    }

    pub fn holds(&self, width: f64) -> bool {
        if self.ignore_scrollbar {
            width <= self.value
        } else {
            width + self.scrollbar_width <= self.value
        }
    }
}

/// Build one predicate per breakpoint.
///
/// Keys that normalize to the same predicate name overwrite each other: the
/// last one registered wins and keeps the position of the first.
pub fn build_predicates(
    breakpoints: &Breakpoints,
    scrollbar_width: f64,
) -> IndexMap<String, Predicate> {
    let mut predicates = IndexMap::with_capacity(breakpoints.len());
    for (key, breakpoint) in breakpoints {
        let name = predicate_name(key);
        let predicate = Predicate::new(*breakpoint, scrollbar_width);
        if predicates.insert(name, predicate).is_some() {
            warn!(key = %key, "breakpoint overrides an earlier predicate with the same name");
        }
    }
    predicates
}
