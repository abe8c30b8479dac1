//! Time-of-day extraction.
//!
//! Three pattern families are tried in order. Only the first structural
//! match of a family is considered; if it fails range validation the next
//! family gets a turn.

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// A validated wall-clock time
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// `None` unless `hour` is 0–23 and `minute` 0–59
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        if hour <= 23 && minute <= 59 {
            Some(Self {
                hour: hour as u8,
                minute: minute as u8,
            })
        } else {
            None
        }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

static CLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{1,2}):(\d{2})\b").expect("valid clock regex"));

static MERIDIEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(오전|오후)\s*(\d{1,2})시(?:\s*(\d{1,2})분)?").expect("valid meridiem regex")
});

static EVENING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(저녁|밤)\s*(\d{1,2})시(?:\s*(\d{1,2})분)?").expect("valid evening regex")
});

type TimeMatcher = fn(&str) -> Option<ClockTime>;

/// Pattern families in priority order
const TIME_MATCHERS: [TimeMatcher; 3] = [clock_time, meridiem_time, evening_time];

/// First time-of-day found by the pattern families, in order
pub fn extract_time(goal: &str) -> Option<ClockTime> {
    let goal = goal.trim();
    TIME_MATCHERS.iter().find_map(|matcher| matcher(goal))
}

fn number(caps: &Captures<'_>, group: usize) -> Option<u32> {
    match caps.get(group) {
        Some(m) => m.as_str().parse().ok(),
        None => Some(0),
    }
}

/// `20:30`, `8:05`
fn clock_time(goal: &str) -> Option<ClockTime> {
    let caps = CLOCK.captures(goal)?;
    ClockTime::new(number(&caps, 1)?, number(&caps, 2)?)
}

/// `오후 8시`, `오전 12시 30분`
fn meridiem_time(goal: &str) -> Option<ClockTime> {
    let caps = MERIDIEM.captures(goal)?;
    let mut hour = number(&caps, 2)?;
    let minute = number(&caps, 3)?;

    match &caps[1] {
        "오후" if hour < 12 => hour += 12,
        "오전" if hour == 12 => hour = 0,
        _ => {}
    }

    ClockTime::new(hour, minute)
}

/// `저녁 8시`, `밤 11시` are read as PM
fn evening_time(goal: &str) -> Option<ClockTime> {
    let caps = EVENING.captures(goal)?;
    let mut hour = number(&caps, 2)?;
    let minute = number(&caps, 3)?;

    if hour < 12 {
        hour += 12;
    }

    ClockTime::new(hour, minute)
}
