use std::collections::HashMap;

use chrono::DateTime;
use chrono::Utc;
use getset::CopyGetters;

use crate::api_response::TicketSpace;

/// Ticket category that is never counted as available.
pub const WALK_IN: &str = "Walk In";

/// One bookable time slot as seen by a single fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct Event {
    datetime: DateTime<Utc>,
    tickets_left: i64,
    /// When this record was built, not when the API last changed it.
    updated: DateTime<Utc>,
}

impl Event {
    pub fn new(datetime: DateTime<Utc>, tickets_left: i64, updated: DateTime<Utc>) -> Self {
        Self {
            datetime,
            tickets_left,
            updated,
        }
    }

    pub fn is_available(&self) -> bool {
        self.tickets_left > 0
    }
}

/// Seats left across every ticket category except walk-ins.
pub fn aggregate(ticket_spaces: &HashMap<String, TicketSpace>) -> i64 {
    ticket_spaces
        .values()
        .filter(|space| space.name() != WALK_IN)
        .fold(0, |sum, space| sum + space.left())
}
