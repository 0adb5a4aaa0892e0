use twilight_model::{
    application::interaction::{Interaction, InteractionData},
    channel::message::component::ComponentType,
    gateway::payload::incoming::InteractionCreate,
};

/// The two fields of an inbound interaction the dispatcher reads.
pub trait ComponentEvent {
    /// Kind of component that was interacted with, `None` for modal
    /// submissions and anything else without one.
    fn component_type(&self) -> Option<ComponentType>;

    /// Lookup key for the handler.
    fn custom_id(&self) -> Option<&str>;
}

impl ComponentEvent for InteractionData {
    fn component_type(&self) -> Option<ComponentType> {
        match self {
            InteractionData::MessageComponent(data) => Some(data.component_type),
            _ => None,
        }
    }

    fn custom_id(&self) -> Option<&str> {
        match self {
            InteractionData::MessageComponent(data) => Some(&data.custom_id),
            InteractionData::ModalSubmit(data) => Some(&data.custom_id),
            _ => None,
        }
    }
}

impl ComponentEvent for Interaction {
    fn component_type(&self) -> Option<ComponentType> {
        self.data.as_ref()?.component_type()
    }

    fn custom_id(&self) -> Option<&str> {
        self.data.as_ref()?.custom_id()
    }
}

impl ComponentEvent for InteractionCreate {
    fn component_type(&self) -> Option<ComponentType> {
        self.0.component_type()
    }

    fn custom_id(&self) -> Option<&str> {
        self.0.custom_id()
    }
}
