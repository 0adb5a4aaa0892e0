use std::{fmt, future::Future, pin::Pin};

use crate::{category::Category, Error};

pub type HandlerFunc<E> = fn(E) -> Pin<Box<dyn Future<Output = Result<(), Error>> + Send>>;

/// Optional per-module configuration, only its presence is tracked for now.
pub type ModuleConfig = serde_json::Map<String, serde_json::Value>;

pub struct ComponentHandler<E> {
    pub name: String,
    pub category: Category,
    pub func: HandlerFunc<E>,
    pub config: Option<ModuleConfig>,
}

impl<E> ComponentHandler<E> {
    pub fn new(name: impl Into<String>, category: Category, func: HandlerFunc<E>) -> Self {
        Self {
            name: name.into(),
            category,
            func,
            config: None,
        }
    }

    pub fn with_config(mut self, config: ModuleConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub async fn run(&self, event: E) -> Result<(), Error> {
        (self.func)(event).await
    }
}

impl<E> fmt::Debug for ComponentHandler<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentHandler")
            .field("name", &self.name)
            .field("category", &self.category)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
