//! User-facing notes emitted by goal parsing and plan compilation.
//!
//! Goals arrive in Korean, so the notes are Korean too. Each note carries an
//! example of the phrasing the extractors understand.

pub const CONFIRMATION_POLICY: &str =
    "create/update/delete/send 성격의 단계는 사용자 확인(required_confirmations)을 받은 뒤에만 실행합니다.";

pub const TOOLS_NOT_PROVIDED: &str =
    "available_tools가 제공되지 않아 steps에 가정된 도구가 포함될 수 있습니다. 실행 전에 plan 검증으로 누락 도구를 확인하세요.";

pub const ROUTE_NOT_PARSED: &str =
    "출발지/도착지를 찾지 못했습니다. 예: '판교에서 강남으로' 또는 '판교 -> 강남'";

pub const TIME_NOT_PARSED: &str =
    "시간(HH:MM)을 찾지 못했습니다. 예: '오늘 20:00' 또는 '오후 8시'";

pub const TITLE_NOT_PARSED: &str =
    "일정 제목(title)을 찾지 못했습니다. 예: \"제목: 미팅\" 또는 \"'미팅' 일정 잡아줘\"";

pub const UPDATE_NEEDS_EVENT_REF: &str =
    "schedule_update에는 변경할 일정의 식별자(event_ref)와 변경 내용(changes)이 필요합니다.";

pub const CANCEL_NEEDS_EVENT_REF: &str =
    "schedule_cancel에는 취소할 일정의 식별자(event_ref) 또는 제목이 필요합니다.";

pub const EMAIL_NOT_PARSED: &str =
    "받는 사람 이메일(to_email)을 찾지 못했습니다. 예: user@example.com";

pub const PAPER_QUERY_HINT: &str =
    "논문 검색어(query)는 goal에 명확히 적는 것을 권장합니다. 예: '논문 검색: retrieval augmented generation'";

pub const NEWS_TARGET_HINT: &str =
    "뉴스 주제(topic)와 카톡 받을 대상(target)을 goal에 명확히 적는 것을 권장합니다.";

pub const INTENT_NOT_CLASSIFIED: &str =
    "의도를 분류하지 못했습니다. goal을 더 구체적으로 작성해 주세요.";

/// Note for steps dropped because strict mode did not admit their tools
pub fn tools_not_available(tools: &[&str]) -> String {
    format!(
        "available_tools에 없는 도구라서 해당 단계를 생략했습니다: {}",
        tools.join(", ")
    )
}

/// Confirmation entry for one write-like step
pub fn confirmation_required(tool_name: &str) -> String {
    format!("{} requires user confirmation", tool_name)
}
