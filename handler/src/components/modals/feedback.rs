use twilight_model::application::interaction::Interaction;

use switchboard_framework::{handler_func, ComponentEvent, ComponentModule, Error, ModuleConfig};

pub fn module() -> Result<ComponentModule<Interaction>, Error> {
    let mut config = ModuleConfig::new();
    config.insert("ephemeral".into(), true.into());

    Ok(ComponentModule::new(handler_func!(handle)).config(config))
}

async fn handle(event: Interaction) -> Result<(), Error> {
    tracing::info!(
        user = ?event.author_id(),
        "feedback submitted via {}",
        event.custom_id().unwrap_or_default()
    );
    Ok(())
}
