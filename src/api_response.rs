use std::collections::HashMap;

use chrono::DateTime;
use chrono::Utc;
use getset::Getters;
use serde::Deserialize;
use serde_json::Value;

#[derive(Clone, Deserialize)]
pub struct Response {
    total_entries: u64,
    /// Left undecoded until `total_entries` says there is something in it.
    #[serde(rename = "_embedded", default)]
    embedded: Option<Value>,
}

impl Response {
    /// The embedded events, or nothing at all when the API reports zero
    /// entries. The embedded payload is not looked at in that case.
    pub fn into_events(self) -> Result<Vec<EventIndex>, serde_json::Error> {
        if self.total_entries == 0 {
            return Ok(Vec::new());
        }

        let embedded: Embedded = serde_json::from_value(self.embedded.unwrap_or_default())?;
        Ok(embedded.events)
    }
}

#[derive(Deserialize)]
struct Embedded {
    events: Vec<EventIndex>,
}

#[derive(Clone, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct EventIndex {
    datetime: DateTime<Utc>,
    ticket_spaces: HashMap<String, TicketSpace>,
}

#[derive(Clone, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct TicketSpace {
    name: String,
    left: i64,
}
