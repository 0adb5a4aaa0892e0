use std::collections::HashMap;

use crate::{category::Category, handler::ComponentHandler};

/// Immutable-after-startup set of component handlers.
///
/// Keeps discovery order for display, lookups go through a per-category
/// name index.
pub struct Registry<E> {
    handlers: Vec<ComponentHandler<E>>,
    index: HashMap<Category, HashMap<String, usize>>,
}

impl<E> Registry<E> {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn from_handlers(handlers: impl IntoIterator<Item = ComponentHandler<E>>) -> Self {
        let mut registry = Self::new();
        for handler in handlers {
            registry.insert(handler);
        }
        registry
    }

    /// Add a handler, first one registered under a name wins.
    ///
    /// Returns `false` if the handler was dropped as a duplicate.
    pub fn insert(&mut self, handler: ComponentHandler<E>) -> bool {
        let names = self.index.entry(handler.category).or_default();
        if names.contains_key(&handler.name) {
            tracing::warn!(
                "duplicate {} component {}, skipping",
                handler.category.singular(),
                handler.name
            );
            return false;
        }

        names.insert(handler.name.clone(), self.handlers.len());
        self.handlers.push(handler);
        true
    }

    pub fn find(&self, category: Category, name: &str) -> Option<&ComponentHandler<E>> {
        let idx = *self.index.get(&category)?.get(name)?;
        self.handlers.get(idx)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ComponentHandler<E>> {
        self.handlers.iter()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn count(&self, category: Category) -> usize {
        self.handlers
            .iter()
            .filter(|h| h.category == category)
            .count()
    }

    /// Human readable overview, a header followed by one tree line per handler.
    pub fn listing(&self) -> Vec<String> {
        let mut lines = vec![format!(
            "loaded {} components ({} buttons, {} modals, {} selects)",
            self.len(),
            self.count(Category::Buttons),
            self.count(Category::Modals),
            self.count(Category::Selects),
        )];

        let last = self.handlers.len().saturating_sub(1);
        lines.extend(self.handlers.iter().enumerate().map(|(idx, handler)| {
            let connector = match idx {
                _ if last == 0 => '─',
                0 => '┌',
                _ if idx == last => '└',
                _ => '├',
            };

            format!(
                "{} {}/{}{}",
                connector,
                handler.category,
                handler.name,
                if handler.config.is_some() { " (config)" } else { "" }
            )
        }));

        lines
    }

    pub fn log_listing(&self) {
        for line in self.listing() {
            tracing::info!("{}", line);
        }
    }
}

impl<E> Default for Registry<E> {
    fn default() -> Self {
        Self::new()
    }
}
