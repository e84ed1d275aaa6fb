//! The shared responsive value.
//!
//! [`UnwrappedResponsive`] is the plain value assembled at setup; it is what a
//! `before_provide` hook sees. [`ResponsiveState::wrap`] turns it into the
//! reactive handle that gets published. After wrapping only the width can
//! change; every predicate is evaluated against the width on each read.

use std::fmt;
use std::rc::Rc;

use floem_reactive::{RwSignal, SignalGet, SignalUpdate, create_rw_signal};
use indexmap::IndexMap;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::breakpoint::{Breakpoint, Predicate, predicate_name};

/// The responsive value before it becomes reactive.
#[derive(Debug, Clone, PartialEq)]
pub struct UnwrappedResponsive {
    pub width: f64,
    scrollbar_width: f64,
    predicates: IndexMap<String, Predicate>,
}

impl UnwrappedResponsive {
    pub fn new(width: f64, scrollbar_width: f64, predicates: IndexMap<String, Predicate>) -> Self {
        Self {
            width,
            scrollbar_width,
            predicates,
        }
    }

    pub fn scrollbar_width(&self) -> f64 {
        self.scrollbar_width
    }

    /// Evaluate the predicate `name` against the current width.
    pub fn is(&self, name: &str) -> Option<bool> {
        self.predicates
            .get(name)
            .map(|predicate| predicate.holds(self.width))
    }

    pub fn predicates(&self) -> impl Iterator<Item = (&str, &Predicate)> {
        self.predicates
            .iter()
            .map(|(name, predicate)| (name.as_str(), predicate))
    }

    /// Add a breakpoint using the scrollbar width measured at setup. Returns the
    /// predicate it replaced, if any.
    pub fn insert_breakpoint(
        &mut self,
        key: &str,
        breakpoint: impl Into<Breakpoint>,
    ) -> Option<Predicate> {
        let predicate = Predicate::new(breakpoint.into(), self.scrollbar_width);
        self.predicates.insert(predicate_name(key), predicate)
    }

    /// Remove a predicate by its derived name (`isMobile`, not `mobile`).
    pub fn remove(&mut self, name: &str) -> Option<Predicate> {
        self.predicates.shift_remove(name)
    }
}

/// Reactive handle to the viewport width and its breakpoint predicates.
///
/// Cloning is cheap and every clone refers to the same width, so a state
/// published once can be handed to any number of readers. Reads made through
/// [`width`](Self::width) and [`is`](Self::is) are tracked by the running
/// effect, if any.
#[derive(Clone)]
pub struct ResponsiveState {
    width: RwSignal<f64>,
    scrollbar_width: f64,
    predicates: Rc<IndexMap<String, Predicate>>,
}

impl ResponsiveState {
    pub fn wrap(value: UnwrappedResponsive) -> Self {
        let UnwrappedResponsive {
            width,
            scrollbar_width,
            predicates,
        } = value;
        Self {
            width: create_rw_signal(width),
            scrollbar_width,
            predicates: Rc::new(predicates),
        }
    }

    pub fn width(&self) -> f64 {
        self.width.get()
    }

    pub fn width_untracked(&self) -> f64 {
        self.width.get_untracked()
    }

    pub fn set_width(&self, width: f64) {
        self.width.set(width);
    }

    pub fn scrollbar_width(&self) -> f64 {
        self.scrollbar_width
    }

    /// Evaluate the predicate `name` (for example `isMobile`).
    ///
    /// Returns `None` when no breakpoint produced that name.
    pub fn is(&self, name: &str) -> Option<bool> {
        let predicate = self.predicates.get(name)?;
        Some(predicate.holds(self.width()))
    }

    pub fn is_untracked(&self, name: &str) -> Option<bool> {
        let predicate = self.predicates.get(name)?;
        Some(predicate.holds(self.width_untracked()))
    }

    pub fn predicate(&self, name: &str) -> Option<Predicate> {
        self.predicates.get(name).copied()
    }

    pub fn predicate_names(&self) -> impl Iterator<Item = &str> {
        self.predicates.keys().map(String::as_str)
    }

    /// Read the width once and evaluate every predicate against it.
    pub fn snapshot(&self) -> ResponsiveSnapshot {
        let width = self.width();
        let flags = self
            .predicates
            .iter()
            .map(|(name, predicate)| (name.clone(), predicate.holds(width)))
            .collect();
        ResponsiveSnapshot { width, flags }
    }
}

impl fmt::Debug for ResponsiveState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("ResponsiveState");
        s.field("width", &self.width_untracked());
        s.field("scrollbar_width", &self.scrollbar_width);
        s.field("predicates", &self.predicates.keys().collect::<Vec<_>>());
        s.finish()
    }
}

/// Plain copy of the published value, shaped `{ width, isMobile, ... }` when
/// serialized.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResponsiveSnapshot {
    pub width: f64,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub flags: IndexMap<String, bool>,
}
