use std::time::Duration;

use chrono::Local;
use tokio::time::MissedTickBehavior;

use crate::fetcher::EventSource;
use crate::notifier::Alert;
use crate::notifier::Notifier;
use crate::presenter::Present;
use crate::run::run_cycle;

/// Run a cycle now and then once every `every`, forever.
///
/// Cycles never overlap: a slow cycle delays the next one, which starts as
/// soon as it finishes, and later ticks fall back onto the interval grid.
/// Errors end only the cycle they happened in.
pub async fn run_forever<S, P, A>(
    source: &S,
    presenter: &mut P,
    notifier: &Notifier<A>,
    every: Duration,
) where
    S: EventSource,
    P: Present,
    A: Alert,
{
    let mut ticker = tokio::time::interval(every);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut cycle: u64 = 0;
    loop {
        ticker.tick().await;
        cycle += 1;

        let today = Local::now().date_naive();
        tracing::debug!("Starting cycle {cycle} from {today}");

        match run_cycle(source, presenter, notifier, today).await {
            Ok(report) => tracing::info!(
                "Cycle {cycle} done: {} events over {} windows, up to {}",
                report.events().len(),
                report.fetches(),
                report.until()
            ),
            Err(e) => tracing::error!("Cycle {cycle} aborted: {:?}", anyhow::Error::from(e)),
        }
    }
}
