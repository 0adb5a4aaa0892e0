pub use catalog::{ComponentModule, ModuleCatalog};
pub use category::Category;
pub use dispatcher::Dispatcher;
pub use error::{DispatchError, LoadError};
pub use event::ComponentEvent;
pub use handler::{ComponentHandler, HandlerFunc, ModuleConfig};
pub use loader::Loader;
pub use registry::Registry;

pub mod catalog;
pub mod category;
pub mod dispatcher;
pub mod error;
pub mod event;
pub mod handler;
pub mod loader;
pub mod macros;
pub mod registry;

pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Load components from the default `src/components` directory.
pub async fn load<E: ComponentEvent + Send + 'static>(
    catalog: ModuleCatalog<E>,
) -> Result<Dispatcher<E>, LoadError> {
    Loader::new(catalog).load().await
}
