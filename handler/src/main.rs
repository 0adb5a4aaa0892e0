mod components;
mod config;

use tokio::{
    io::{AsyncBufReadExt, BufReader},
    task::{JoinError, JoinSet},
};
use twilight_model::application::interaction::Interaction;

use switchboard_framework::Loader;

use config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // load .env into environment vars, ignore if not found
    let dotenv = dotenvy::dotenv().map(|_| ());

    // set-up logging, after .env so RUST_LOG can come from there
    tracing_subscriber::fmt::init();

    match dotenv {
        Err(err) if err.not_found() => {
            tracing::warn!("no .env file found");
        }
        result => result?,
    };

    // create config from environment vars
    let config = Config::from_env()?;

    let dispatcher = Loader::new(components::catalog())
        .root(&config.components_dir)
        .extensions(config.extensions())
        .load()
        .await?;

    // one JSON interaction per line on stdin
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut in_flight = JoinSet::new();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let event = match serde_json::from_str::<Interaction>(line) {
            Ok(event) => event,
            Err(err) => {
                tracing::error!(?err, "couldn't parse interaction");
                continue;
            }
        };

        tracing::debug!(id = ?event.id, kind = ?event.kind, "interaction received");

        let dispatcher = dispatcher.clone();
        in_flight.spawn(async move { dispatcher.dispatch(event).await });

        while let Some(result) = in_flight.try_join_next() {
            log_join(result);
        }
    }

    tracing::info!("input closed, waiting for {} dispatches", in_flight.len());
    while let Some(result) = in_flight.join_next().await {
        log_join(result);
    }

    Ok(())
}

fn log_join(result: Result<(), JoinError>) {
    if let Err(err) = result {
        tracing::error!("dispatch task failed: {}", err);
    }
}
