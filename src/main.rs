#![warn(clippy::pedantic)]

mod api_response;
mod config;
mod event;
mod fetcher;
mod notifier;
mod presenter;
mod run;
mod scheduler;
#[cfg(test)]
mod testing;
mod window;

use anyhow::Context;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::FmtSubscriber;

use crate::config::Config;
use crate::fetcher::BookingBugClient;
use crate::notifier::Desktop;
use crate::notifier::Notifier;
use crate::presenter::Terminal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr, stdout belongs to the table.
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    let config = Config::from_env();
    tracing::info!(
        "Watching {} every {}s",
        config.events_url,
        config.poll_interval.as_secs()
    );

    let client = BookingBugClient::new(&config).context("Error creating HTTP client")?;
    let mut terminal = Terminal::stdout(config.booking_url.clone());
    let notifier = Notifier::new(Desktop);

    tokio::select! {
        () = scheduler::run_forever(&client, &mut terminal, &notifier, config.poll_interval) => {}
        signal = tokio::signal::ctrl_c() => {
            signal.context("failed to listen for Ctrl-C")?;
            tracing::info!("Interrupted, stopping");
        }
    }

    Ok(())
}
