use std::io;

use chrono::NaiveDate;
use getset::CopyGetters;
use getset::Getters;

use crate::event::Event;
use crate::fetcher::EventSource;
use crate::fetcher::FetchError;
use crate::notifier::Alert;
use crate::notifier::Notifier;
use crate::presenter::Present;
use crate::window::DateRangeWalker;
use crate::window::Window;

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("failed to fetch events for {window}")]
    Fetch {
        window: Window,
        #[source]
        source: FetchError,
    },
    #[error("failed to write to the terminal")]
    Output(#[from] io::Error),
}

/// Everything one cycle found, from its start date to where the walk ended.
#[derive(Debug, CopyGetters, Getters)]
pub struct RunReport {
    #[getset(get_copy = "pub")]
    start: NaiveDate,
    #[getset(get_copy = "pub")]
    until: NaiveDate,
    #[getset(get_copy = "pub")]
    fetches: usize,
    #[getset(get = "pub")]
    events: Vec<Event>,
}

/// Walk windows from `today` until one comes back empty, redrawing after
/// every fetch and alerting on whatever the latest window turned up.
///
/// A failed fetch ends the cycle; whatever was drawn before it stays up.
pub async fn run_cycle<S, P, A>(
    source: &S,
    presenter: &mut P,
    notifier: &Notifier<A>,
    today: NaiveDate,
) -> Result<RunReport, RunError>
where
    S: EventSource,
    P: Present,
    A: Alert,
{
    let mut walker = DateRangeWalker::new(today);
    let mut accumulated = Vec::new();
    let mut until = today;
    let mut fetches = 0;

    presenter.clear()?;
    while let Some(window) = walker.next() {
        presenter.show_progress(window)?;
        let new_events = source
            .fetch(window)
            .await
            .map_err(|source| RunError::Fetch { window, source })?;
        fetches += 1;

        accumulated.extend_from_slice(&new_events);
        until = walker.upcoming().map_or(window.end(), |next| next.end());
        presenter.show(today, until, &accumulated)?;
        notifier.notify_if_available(&new_events).await;

        if new_events.is_empty() {
            break;
        }
    }

    Ok(RunReport {
        start: today,
        until,
        fetches,
        events: accumulated,
    })
}
