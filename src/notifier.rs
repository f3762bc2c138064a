use anyhow::Context;
use anyhow::anyhow;
use notify_rust::Notification;

use crate::event::Event;

pub const TITLE: &str = "Sky Garden: Tickets Available!";
pub const BODY: &str = "Tickets are available, check the terminal for dates and times.";

/// A way of getting the user's attention.
pub trait Alert {
    async fn alert(&self, title: &str, body: &str) -> anyhow::Result<()>;
}

/// Native desktop notification.
pub struct Desktop;

impl Alert for Desktop {
    async fn alert(&self, title: &str, body: &str) -> anyhow::Result<()> {
        let (title, body) = (title.to_string(), body.to_string());
        // Showing a notification is a blocking D-Bus round trip on Linux.
        off_thread(move || {
            Notification::new()
                .summary(&title)
                .body(&body)
                .show()
                .map(drop)
                .map_err(|e| anyhow!("failed to show desktop notification: {e}"))
        })
        .await
    }
}

async fn off_thread<F>(work: F) -> anyhow::Result<()>
where
    F: FnOnce() -> anyhow::Result<()> + Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .context("notification task did not finish")?
}

pub struct Notifier<A> {
    alert: A,
}

impl<A: Alert> Notifier<A> {
    pub fn new(alert: A) -> Self {
        Self { alert }
    }

    /// Alert once if any of `new_events` has tickets left. Nothing is
    /// remembered between calls, so the same slot alerts again next time.
    pub async fn notify_if_available(&self, new_events: &[Event]) -> bool {
        let available = new_events.iter().filter(|e| e.is_available()).count();
        if available == 0 {
            return false;
        }

        tracing::info!("{available} slot(s) with tickets left, alerting");
        if let Err(e) = self.alert.alert(TITLE, BODY).await {
            tracing::warn!("{e:?}");
        }

        true
    }

    #[cfg(test)]
    pub fn alert(&self) -> &A {
        &self.alert
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;
    use std::time::Duration;

    use chrono::Utc;

    use super::*;
    use crate::testing::CountingAlert;

    fn event(tickets_left: i64) -> Event {
        let now = Utc::now();
        Event::new(now, tickets_left, now)
    }

    #[tokio::test]
    async fn one_alert_however_many_available() {
        let notifier = Notifier::new(CountingAlert::default());

        assert!(notifier.notify_if_available(&[event(3), event(0), event(9)]).await);
        assert_eq!(notifier.alert().count(), 1);
        assert_eq!(
            notifier.alert().last(),
            Some((TITLE.to_string(), BODY.to_string()))
        );
    }

    #[tokio::test]
    async fn nothing_available_stays_quiet() {
        let notifier = Notifier::new(CountingAlert::default());

        assert!(!notifier.notify_if_available(&[]).await);
        assert!(!notifier.notify_if_available(&[event(0), event(0)]).await);
        assert_eq!(notifier.alert().count(), 0);
    }

    #[tokio::test]
    async fn repeats_are_not_suppressed() {
        let notifier = Notifier::new(CountingAlert::default());
        let same = [event(2)];

        notifier.notify_if_available(&same).await;
        notifier.notify_if_available(&same).await;

        assert_eq!(notifier.alert().count(), 2);
    }

    #[tokio::test]
    async fn failing_alert_still_counts_as_sent() {
        let notifier = Notifier::new(CountingAlert::failing());

        assert!(notifier.notify_if_available(&[event(1)]).await);
        assert_eq!(notifier.alert().count(), 1);
    }

    #[tokio::test]
    async fn blocking_work_leaves_the_runtime_free() {
        // Single-threaded runtime: the signal can only be sent if the
        // blocking closure is not holding the runtime thread.
        let (tx, rx) = mpsc::channel::<()>();
        let blocking = off_thread(move || {
            rx.recv_timeout(Duration::from_secs(5))
                .map_err(|_| anyhow!("runtime thread was held"))
        });
        let signal = async move {
            tokio::task::yield_now().await;
            tx.send(()).unwrap();
        };

        let (result, ()) = tokio::join!(blocking, signal);

        result.unwrap();
    }

    #[tokio::test]
    async fn blocking_work_errors_come_back() {
        let result = off_thread(|| Err(anyhow!("no daemon"))).await;

        assert!(result.unwrap_err().to_string().contains("no daemon"));
    }
}
