//! Intent classification.
//!
//! A goal gets exactly one [`IntentTag`]. Classification walks
//! [`INTENT_RULES`] top to bottom and the first rule whose keyword groups
//! are all present wins, so when a goal carries cues for several intents
//! (e.g. both "취소" and "변경") the earlier rule takes it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::PlannerError;

/// Closed vocabulary of goal intents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentTag {
    Route,
    ScheduleCreate,
    ScheduleUpdate,
    ScheduleCancel,
    PaperSearchSummarizeEmail,
    NewsAnalyzeKakaoSend,
    Unknown,
}

impl IntentTag {
    pub const ALL: [IntentTag; 7] = [
        IntentTag::Route,
        IntentTag::ScheduleCreate,
        IntentTag::ScheduleUpdate,
        IntentTag::ScheduleCancel,
        IntentTag::PaperSearchSummarizeEmail,
        IntentTag::NewsAnalyzeKakaoSend,
        IntentTag::Unknown,
    ];

    /// Wire name of the tag
    pub fn as_str(&self) -> &'static str {
        match self {
            IntentTag::Route => "route",
            IntentTag::ScheduleCreate => "schedule_create",
            IntentTag::ScheduleUpdate => "schedule_update",
            IntentTag::ScheduleCancel => "schedule_cancel",
            IntentTag::PaperSearchSummarizeEmail => "paper_search_summarize_email",
            IntentTag::NewsAnalyzeKakaoSend => "news_analyze_kakao_send",
            IntentTag::Unknown => "unknown",
        }
    }

    /// Whether the tag is one of the `schedule_*` family
    pub fn is_schedule(&self) -> bool {
        matches!(
            self,
            IntentTag::ScheduleCreate | IntentTag::ScheduleUpdate | IntentTag::ScheduleCancel
        )
    }
}

impl fmt::Display for IntentTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IntentTag {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IntentTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| PlannerError::UnknownIntent(s.to_string()))
    }
}

/// One classification rule: a conjunction of keyword groups, each group a
/// disjunction of substrings
#[derive(Debug, Clone, Copy)]
pub struct IntentRule {
    pub tag: IntentTag,
    pub all_of: &'static [&'static [&'static str]],
}

impl IntentRule {
    /// True when every keyword group has at least one substring in `goal`
    pub fn matches(&self, goal: &str) -> bool {
        self.all_of
            .iter()
            .all(|group| group.iter().any(|keyword| goal.contains(keyword)))
    }
}

const SCHEDULE_NOUNS: &[&str] = &["일정", "스케줄", "미팅", "회의"];

/// Classification rules in priority order.
///
/// The cancel > update > create > route ordering is the only tie-break.
/// Route cues are broad particles ("에서", "으로", "까지"), so they shadow
/// paper/news goals that happen to contain them.
pub static INTENT_RULES: &[IntentRule] = &[
    IntentRule {
        tag: IntentTag::ScheduleCancel,
        all_of: &[&["취소", "삭제"], SCHEDULE_NOUNS],
    },
    IntentRule {
        tag: IntentTag::ScheduleUpdate,
        all_of: &[&["변경", "수정", "옮겨", "재조정"], SCHEDULE_NOUNS],
    },
    IntentRule {
        tag: IntentTag::ScheduleCreate,
        all_of: &[&["잡아", "등록", "추가", "생성"], SCHEDULE_NOUNS],
    },
    IntentRule {
        tag: IntentTag::Route,
        all_of: &[&["에서", "까지", "으로", "→", "->", "이동", "가는", "가야"]],
    },
    IntentRule {
        tag: IntentTag::PaperSearchSummarizeEmail,
        all_of: &[&["논문"], &["검색", "서치", "찾아", "요약"]],
    },
    IntentRule {
        tag: IntentTag::NewsAnalyzeKakaoSend,
        all_of: &[&["뉴스"], &["분석", "요약", "정리"], &["카톡", "카카오", "보내"]],
    },
];

/// Classify a goal. Total: falls back to [`IntentTag::Unknown`].
pub fn classify(goal: &str) -> IntentTag {
    let goal = goal.trim();
    let tag = INTENT_RULES
        .iter()
        .find(|rule| rule.matches(goal))
        .map(|rule| rule.tag)
        .unwrap_or(IntentTag::Unknown);

    tracing::debug!(intent = %tag, "classified goal");
    tag
}
