use std::{any::Any, future::Future, panic::AssertUnwindSafe, pin::Pin, sync::Arc};

use futures::FutureExt;

use crate::{category::Category, error::DispatchError, event::ComponentEvent, registry::Registry};

/// Routes interactions to component handlers.
///
/// Cheap to clone, every clone shares the same read-only registry so
/// dispatches can run concurrently without locking.
pub struct Dispatcher<E> {
    registry: Arc<Registry<E>>,
}

impl<E> Clone for Dispatcher<E> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<E> Dispatcher<E> {
    pub fn new(registry: Registry<E>) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    pub fn registry(&self) -> &Registry<E> {
        &self.registry
    }
}

impl<E: ComponentEvent + Send + 'static> Dispatcher<E> {
    /// Run the handler matching `event`, if any.
    ///
    /// Never fails: unknown components and failing handlers are logged and
    /// swallowed here.
    pub async fn dispatch(&self, event: E) {
        match self.try_dispatch(event).await {
            Ok(()) => (),
            Err(err @ DispatchError::NotFound { .. }) => tracing::info!("{}", err),
            Err(err) => tracing::error!("{}", err),
        }
    }

    pub async fn try_dispatch(&self, event: E) -> Result<(), DispatchError> {
        let category = Category::from_component_type(event.component_type());
        let custom_id = event.custom_id().unwrap_or_default().to_string();

        let Some(handler) = self.registry.find(category, &custom_id) else {
            return Err(DispatchError::NotFound {
                category,
                custom_id,
            });
        };

        tracing::debug!("running {} component {}", category.singular(), handler.name);

        // run() only calls the handler on first poll, so a panic before the
        // handler returns its future is caught here too
        match AssertUnwindSafe(handler.run(event)).catch_unwind().await {
            Ok(Ok(())) => Ok(()),
            Ok(Err(source)) => Err(DispatchError::Handler {
                category,
                name: handler.name.clone(),
                source,
            }),
            Err(payload) => Err(DispatchError::Panicked {
                category,
                name: handler.name.clone(),
                message: panic_message(&*payload),
            }),
        }
    }

    /// The dispatcher as a plain function, for hosts that only want a callback.
    pub fn into_fn(
        self,
    ) -> impl Fn(E) -> Pin<Box<dyn Future<Output = ()> + Send>> + Clone + Send + Sync + 'static {
        move |event: E| -> Pin<Box<dyn Future<Output = ()> + Send>> {
            let dispatcher = self.clone();
            Box::pin(async move { dispatcher.dispatch(event).await })
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
