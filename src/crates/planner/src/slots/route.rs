//! Origin/destination extraction.
//!
//! "A에서 B으로/까지" takes the LAST non-overlapping occurrence in the goal,
//! so a multi-leg request is planned for its final leg. The arrow
//! form "A -> B" / "A → B" is only tried when no "에서" form matched and
//! takes the FIRST occurrence.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Both endpoints of a route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub origin: String,
    pub destination: String,
}

impl Route {
    /// Trim both endpoints; a blank endpoint discards the whole route
    fn from_parts(origin: &str, destination: &str) -> Option<Self> {
        let origin = origin.trim();
        let destination = destination.trim();
        if origin.is_empty() || destination.is_empty() {
            return None;
        }
        Some(Self {
            origin: origin.to_string(),
            destination: destination.to_string(),
        })
    }
}

static FROM_TO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(.+?)에서\s*(.+?)(?:으로|까지)").expect("valid from-to regex")
});

static ARROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.+?)\s*(?:->|→)\s*(.+)").expect("valid arrow regex"));

/// Route endpoints, or `None` when no pattern matched or an endpoint is blank
pub fn extract_route(goal: &str) -> Option<Route> {
    let goal = goal.trim();

    // A structural "에서" match settles the question even if it is unusable.
    if let Some(caps) = FROM_TO.captures_iter(goal).last() {
        return Route::from_parts(&caps[1], &caps[2]);
    }

    let caps = ARROW.captures(goal)?;
    Route::from_parts(&caps[1], &caps[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints(goal: &str) -> Option<(String, String)> {
        extract_route(goal).map(|r| (r.origin, r.destination))
    }

    fn pair(a: &str, b: &str) -> Option<(String, String)> {
        Some((a.to_string(), b.to_string()))
    }

    #[test]
    fn test_from_to_pattern() {
        assert_eq!(endpoints("판교에서 강남으로 오늘 20:00 가는 길"), pair("판교", "강남"));
        assert_eq!(endpoints("서울역에서 수원까지"), pair("서울역", "수원"));
    }

    #[test]
    fn test_last_from_to_match_wins() {
        assert_eq!(
            endpoints("집에서 회사까지 걷고 판교에서 강남으로 이동"),
            pair("걷고 판교", "강남")
        );
    }

    #[test]
    fn test_arrow_pattern() {
        assert_eq!(endpoints("판교 -> 강남"), pair("판교", "강남"));
        assert_eq!(endpoints("판교→강남 오후 6시"), pair("판교", "강남 오후 6시"));
    }

    #[test]
    fn test_from_to_without_destination_marker() {
        // "로" alone is not a destination marker
        assert_eq!(endpoints("판교에서 강남로"), None);
    }

    #[test]
    fn test_blank_endpoint_discards_route() {
        assert_eq!(endpoints("판교에서 으로 가줘"), None);
    }

    #[test]
    fn test_no_route() {
        assert_eq!(endpoints("내일 회의"), None);
    }
}
