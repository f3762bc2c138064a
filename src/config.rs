use std::env;
use std::time::Duration;

pub const EVENTS_URL: &str = "https://skygarden.bookingbug.com/api/v1/37002/events";
pub const APP_ID: &str = "f6b16c23";
pub const APP_KEY: &str = "f0bc4f65f4fbfe7b4b3b7264b655f5eb";
pub const BOOKING_URL: &str = "https://skygarden.london/booking/";
pub const POLL_INTERVAL_SECS: u64 = 3 * 60;

#[derive(Clone, Debug)]
pub struct Config {
    pub events_url: String,
    pub app_id: String,
    pub app_key: String,
    pub booking_url: String,
    pub poll_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            events_url: EVENTS_URL.to_string(),
            app_id: APP_ID.to_string(),
            app_key: APP_KEY.to_string(),
            booking_url: BOOKING_URL.to_string(),
            poll_interval: Duration::from_secs(POLL_INTERVAL_SECS),
        }
    }
}

impl Config {
    /// Built-in values, overridable from the environment or a `.env` file.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let interval = lookup("SKYGARDEN_POLL_INTERVAL_SECS")
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(POLL_INTERVAL_SECS);

        Self {
            events_url: lookup("SKYGARDEN_EVENTS_URL").unwrap_or(defaults.events_url),
            app_id: lookup("SKYGARDEN_APP_ID").unwrap_or(defaults.app_id),
            app_key: lookup("SKYGARDEN_APP_KEY").unwrap_or(defaults.app_key),
            booking_url: lookup("SKYGARDEN_BOOKING_URL").unwrap_or(defaults.booking_url),
            poll_interval: Duration::from_secs(interval),
        }
    }
}
