use std::collections::HashMap;

use crate::{
    error::LoadError,
    handler::{HandlerFunc, ModuleConfig},
    Error,
};

/// What loading a component source yields.
pub struct ComponentModule<E> {
    pub default: HandlerFunc<E>,
    pub config: Option<ModuleConfig>,
}

impl<E> ComponentModule<E> {
    pub fn new(default: HandlerFunc<E>) -> Self {
        Self {
            default,
            config: None,
        }
    }

    pub fn config(mut self, config: ModuleConfig) -> Self {
        self.config = Some(config);
        self
    }
}

impl<E> Clone for ComponentModule<E> {
    fn clone(&self) -> Self {
        Self {
            default: self.default,
            config: self.config.clone(),
        }
    }
}

pub type ModuleFactory<E> = fn() -> Result<ComponentModule<E>, Error>;

enum Entry<E> {
    Ready(ComponentModule<E>),
    Factory(ModuleFactory<E>),
}

/// Component modules compiled into the binary, keyed by their source path
/// relative to the components directory (`buttons/confirm.rs`).
///
/// The directory walk decides what gets discovered, the catalog is how a
/// discovered file gets "imported".
pub struct ModuleCatalog<E> {
    modules: HashMap<String, Entry<E>>,
}

impl<E> ModuleCatalog<E> {
    pub fn new() -> Self {
        Self {
            modules: HashMap::new(),
        }
    }

    /// Register a module with just a handler and no config.
    pub fn component(self, path: &str, func: HandlerFunc<E>) -> Self {
        self.insert(path, Entry::Ready(ComponentModule::new(func)))
    }

    /// Register a module that is built (and may fail) at load time.
    pub fn module(self, path: &str, factory: ModuleFactory<E>) -> Self {
        self.insert(path, Entry::Factory(factory))
    }

    fn insert(mut self, path: &str, entry: Entry<E>) -> Self {
        if self.modules.insert(normalize(path), entry).is_some() {
            tracing::warn!("component module {} registered twice, keeping the last", path);
        }
        self
    }

    pub fn contains(&self, path: &str) -> bool {
        self.modules.contains_key(&normalize(path))
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn load(&self, path: &str) -> Result<ComponentModule<E>, LoadError> {
        match self.modules.get(&normalize(path)) {
            Some(Entry::Ready(module)) => Ok(module.clone()),
            Some(Entry::Factory(factory)) => factory().map_err(|source| LoadError::Module {
                path: path.to_string(),
                source,
            }),
            None => Err(LoadError::NotRegistered(path.to_string())),
        }
    }
}

impl<E> Default for ModuleCatalog<E> {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize(path: &str) -> String {
    path.trim_start_matches("./")
        .split(['/', '\\'])
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}
