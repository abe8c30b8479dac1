//! Goal parsing entry point: intent plus every slot, flattened.

use serde::{Deserialize, Serialize};

use crate::intent::{classify, IntentTag};
use crate::messages;
use crate::slots::extract_slots;

/// Intent and slots extracted from one goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalParse {
    pub intent_type: IntentTag,
    pub date_token: String,
    pub time_hhmm: Option<String>,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub title: Option<String>,
    pub email: Option<String>,
    /// Hints for slots the intent needs but the goal did not provide
    #[serde(default)]
    pub notes: Vec<String>,
}

/// Classify `goal` and extract its slots
pub fn parse_goal(goal: &str) -> GoalParse {
    let intent_type = classify(goal);
    let slots = extract_slots(goal);

    let mut notes = Vec::new();
    if intent_type == IntentTag::Route && slots.route().is_none() {
        notes.push(messages::ROUTE_NOT_PARSED.to_string());
    }
    if intent_type.is_schedule() && slots.time_hhmm.is_none() {
        notes.push(messages::TIME_NOT_PARSED.to_string());
    }

    GoalParse {
        intent_type,
        date_token: slots.date_token,
        time_hhmm: slots.time_hhmm,
        origin: slots.origin,
        destination: slots.destination,
        title: slots.title,
        email: slots.email,
        notes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_route_goal() {
        let parsed = parse_goal("판교에서 강남으로 오늘 20:00 가는 길");

        assert_eq!(parsed.intent_type, IntentTag::Route);
        assert_eq!(parsed.origin.as_deref(), Some("판교"));
        assert_eq!(parsed.destination.as_deref(), Some("강남"));
        assert_eq!(parsed.date_token, "today");
        assert_eq!(parsed.time_hhmm.as_deref(), Some("20:00"));
        assert!(parsed.notes.is_empty());
    }

    #[test]
    fn test_route_note_when_endpoints_missing() {
        let parsed = parse_goal("어디로 이동하지");
        assert_eq!(parsed.notes, vec![messages::ROUTE_NOT_PARSED.to_string()]);
    }

    #[test]
    fn test_schedule_note_when_time_missing() {
        let parsed = parse_goal("미팅 취소해줘");

        assert_eq!(parsed.intent_type, IntentTag::ScheduleCancel);
        assert_eq!(parsed.notes, vec![messages::TIME_NOT_PARSED.to_string()]);
    }

    #[test]
    fn test_parse_serializes_absent_slots_as_null() {
        let value = serde_json::to_value(parse_goal("안녕하세요")).unwrap();

        assert_eq!(
            value,
            json!({
                "intent_type": "unknown",
                "date_token": "unknown",
                "time_hhmm": null,
                "origin": null,
                "destination": null,
                "title": null,
                "email": null,
                "notes": []
            })
        );
    }
}
