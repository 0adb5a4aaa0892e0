use twilight_model::application::interaction::{Interaction, InteractionData};

use switchboard_framework::Error;

pub async fn handle(event: Interaction) -> Result<(), Error> {
    let Some(InteractionData::MessageComponent(data)) = &event.data else {
        return Err("colour select without component data".into());
    };

    let Some(colour) = data.values.first() else {
        return Err("no colour selected".into());
    };

    tracing::info!(user = ?event.author_id(), "picked colour {}", colour);
    Ok(())
}
