use twilight_model::application::interaction::Interaction;

use switchboard_framework::Error;

pub async fn handle(event: Interaction) -> Result<(), Error> {
    tracing::info!(user = ?event.author_id(), guild = ?event.guild_id, "pong");
    Ok(())
}
