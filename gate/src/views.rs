//! Lazily resolved view registry.
//!
//! Maps route names to factories. A factory runs on the first request for its
//! name and the result is cached for every later visit.

#[cfg(test)]
#[path = "views_test.rs"]
mod views_test;

use std::collections::HashMap;
use std::sync::OnceLock;

type Factory<V> = Box<dyn Fn() -> V + Send + Sync>;

struct Slot<V> {
    factory: Factory<V>,
    view: OnceLock<V>,
}

pub struct ViewRegistry<V> {
    slots: HashMap<&'static str, Slot<V>>,
}

impl<V: Clone> ViewRegistry<V> {
    pub fn new() -> Self {
        Self { slots: HashMap::new() }
    }

    /// Register `factory` under `name`, replacing any earlier registration
    /// along with its cached view.
    #[must_use]
    pub fn with<F>(mut self, name: &'static str, factory: F) -> Self
    where
        F: Fn() -> V + Send + Sync + 'static,
    {
        self.slots.insert(name, Slot { factory: Box::new(factory), view: OnceLock::new() });
        self
    }

    /// View for `name`, building it on first use.
    pub fn resolve(&self, name: &str) -> Option<V> {
        let slot = self.slots.get(name)?;
        let view = slot.view.get_or_init(|| {
            log::debug!("resolving view {name}");
            (slot.factory)()
        });
        Some(view.clone())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    pub fn is_resolved(&self, name: &str) -> bool {
        self.slots.get(name).is_some_and(|slot| slot.view.get().is_some())
    }

    /// Names from `names` that have no registered factory.
    pub fn missing<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
        names.into_iter().filter(|name| !self.contains(name)).collect()
    }
}

impl<V: Clone> Default for ViewRegistry<V> {
    fn default() -> Self {
        Self::new()
    }
}
