//! Slot extraction.
//!
//! Each extractor is a total, pure function over the raw goal. They do not
//! look at the intent; the compiler decides which slots a template needs.

mod date;
mod email;
mod route;
mod time;
mod title;

pub use date::{extract_date_token, DATE_TODAY, DATE_TOMORROW, DATE_UNKNOWN};
pub use email::extract_email;
pub use route::{extract_route, Route};
pub use time::{extract_time, ClockTime};
pub use title::extract_title;

use serde::{Deserialize, Serialize};

/// Every slot the extractors can produce for one goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotBag {
    /// `YYYY-MM-DD`, `today`, `tomorrow` or `unknown`
    pub date_token: String,
    /// Zero-padded `HH:MM`
    pub time_hhmm: Option<String>,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub title: Option<String>,
    pub email: Option<String>,
}

impl SlotBag {
    /// Origin and destination, only when both are present
    pub fn route(&self) -> Option<(&str, &str)> {
        Some((self.origin.as_deref()?, self.destination.as_deref()?))
    }
}

/// Run every extractor over `goal`
pub fn extract_slots(goal: &str) -> SlotBag {
    let route = extract_route(goal);
    let (origin, destination) = match route {
        Some(Route { origin, destination }) => (Some(origin), Some(destination)),
        None => (None, None),
    };

    SlotBag {
        date_token: extract_date_token(goal),
        time_hhmm: extract_time(goal).map(|t| t.to_string()),
        origin,
        destination,
        title: extract_title(goal),
        email: extract_email(goal),
    }
}
