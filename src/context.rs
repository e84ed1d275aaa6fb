use std::cell::RefCell;
use std::rc::Rc;

use floem_reactive::{provide_context, use_context};
use indexmap::IndexMap;

use crate::state::ResponsiveState;

/// Name the state is published under unless configured otherwise.
pub const DEFAULT_NAME: &str = "responsive";

/// Makes a [`ResponsiveState`] reachable by name from the rest of the app.
pub trait Publish {
    fn publish(&self, name: &str, state: ResponsiveState);
}

/// Publishes into the floem reactive context through a [`ResponsiveRegistry`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ContextPublisher;

impl Publish for ContextPublisher {
    fn publish(&self, name: &str, state: ResponsiveState) {
        ResponsiveRegistry::current().insert(name, state);
    }
}

/// Every published state, keyed by name.
///
/// Stored once in the reactive context; all clones share the same entries.
#[derive(Clone, Default)]
pub struct ResponsiveRegistry {
    entries: Rc<RefCell<IndexMap<String, ResponsiveState>>>,
}

impl ResponsiveRegistry {
    /// The registry in the current context, provided on first use.
    pub fn current() -> Self {
        if let Some(registry) = use_context::<ResponsiveRegistry>() {
            return registry;
        }
        let registry = ResponsiveRegistry::default();
        provide_context(registry.clone());
        registry
    }

    /// Publish `state` under `name`, returning the state it replaced.
    pub fn insert(&self, name: &str, state: ResponsiveState) -> Option<ResponsiveState> {
        self.entries.borrow_mut().insert(name.to_string(), state)
    }

    pub fn get(&self, name: &str) -> Option<ResponsiveState> {
        self.entries.borrow().get(name).cloned()
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.borrow().keys().cloned().collect()
    }
}

/// Look up the state published under `name`.
pub fn use_responsive(name: &str) -> Option<ResponsiveState> {
    use_context::<ResponsiveRegistry>()?.get(name)
}

/// Look up the state published under [`DEFAULT_NAME`].
pub fn use_default_responsive() -> Option<ResponsiveState> {
    use_responsive(DEFAULT_NAME)
}
