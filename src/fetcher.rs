use chrono::DateTime;
use chrono::Utc;
use reqwest::StatusCode;

use crate::api_response;
use crate::config::Config;
use crate::event::Event;
use crate::event::aggregate;
use crate::window::Window;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request to the events endpoint failed")]
    Transport(#[from] reqwest::Error),
    #[error("events endpoint answered {0}")]
    Status(StatusCode),
    #[error("events response did not have the expected shape")]
    Decode(#[from] serde_json::Error),
}

/// Something that can list the events inside a date window.
pub trait EventSource {
    async fn fetch(&self, window: Window) -> Result<Vec<Event>, FetchError>;
}

pub struct BookingBugClient {
    client: reqwest::Client,
    events_url: String,
    app_id: String,
    app_key: String,
}

impl BookingBugClient {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            events_url: config.events_url.clone(),
            app_id: config.app_id.clone(),
            app_key: config.app_key.clone(),
        })
    }
}

impl EventSource for BookingBugClient {
    async fn fetch(&self, window: Window) -> Result<Vec<Event>, FetchError> {
        tracing::debug!("Requesting events for {window}");

        let response = self
            .client
            .get(&self.events_url)
            .query(&[
                ("start_date", window.query_start()),
                ("end_date", window.query_end()),
            ])
            .header("App-Id", &self.app_id)
            .header("App-Key", &self.app_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        let events = parse_events(&body, Utc::now())?;
        tracing::debug!("{} events for {window}", events.len());

        Ok(events)
    }
}

/// Map a raw events response into [`Event`]s stamped with `now`.
pub fn parse_events(body: &str, now: DateTime<Utc>) -> Result<Vec<Event>, FetchError> {
    let response: api_response::Response = serde_json::from_str(body)?;

    Ok(response
        .into_events()?
        .iter()
        .map(|raw| Event::new(*raw.datetime(), aggregate(raw.ticket_spaces()), now))
        .collect())
}
