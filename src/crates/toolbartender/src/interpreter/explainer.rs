//! Korean plan explanations for end users.

use planner::{Plan, PlanStep};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Rationales for individual tools
static EXACT_RATIONALE: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("calendar.read", "목표 날짜의 일정/가용 여부를 확인하기 위해 사용합니다."),
        ("map.route", "출발지→도착지 이동 경로/소요시간을 조회하기 위해 사용합니다."),
    ])
});

/// Rationales by tool namespace, checked in order
const PREFIX_RATIONALE: &[(&str, &str)] = &[
    ("calendar.", "캘린더 관련 작업을 처리하기 위해 사용합니다."),
    ("map.", "이동 경로/시간을 조회하기 위해 사용합니다."),
    ("paper.", "논문 검색/요약을 수행하기 위해 사용합니다."),
    ("news.", "뉴스 검색/요약을 수행하기 위해 사용합니다."),
    ("email.", "이메일 전송을 위해 사용합니다."),
    ("kakao.", "카카오 채널/카톡 전송을 위해 사용합니다."),
];

const FALLBACK_RATIONALE: &str = "이 작업을 수행하기 위해 사용합니다.";

/// Why a tool is part of a plan
pub fn rationale(tool_name: &str) -> &'static str {
    if let Some(reason) = EXACT_RATIONALE.get(tool_name).copied() {
        return reason;
    }
    PREFIX_RATIONALE
        .iter()
        .find(|(prefix, _)| tool_name.starts_with(prefix))
        .map(|(_, reason)| *reason)
        .unwrap_or(FALLBACK_RATIONALE)
}

/// Explains plans in Korean
#[derive(Debug, Clone, Default)]
pub struct PlanExplainer;

impl PlanExplainer {
    pub fn new() -> Self {
        Self
    }

    pub fn explain(&self, plan: &Plan) -> String {
        let mut lines = vec![format!("목표: {}", plan.intent)];

        if plan.steps.is_empty() {
            lines.push(
                "실행할 단계가 없습니다. (goal 해석 실패 또는 도구 제한/미제공 때문일 수 있습니다.)"
                    .to_string(),
            );
        } else {
            lines.push("실행 단계:".to_string());
            for (index, step) in plan.steps.iter().enumerate() {
                lines.push(format!(
                    "{}) {} - {}",
                    index + 1,
                    step.tool_name,
                    rationale(&step.tool_name)
                ));
                lines.push(self.detail(step));
            }
        }

        if !plan.required_confirmations.is_empty() {
            lines.push("확인 필요:".to_string());
            lines.extend(plan.required_confirmations.iter().map(|c| format!("- {}", c)));
        }

        if !plan.assumptions.is_empty() {
            lines.push("가정/전제:".to_string());
            lines.extend(plan.assumptions.iter().map(|a| format!("- {}", a)));
        }

        lines.join("\n")
    }

    fn detail(&self, step: &PlanStep) -> String {
        let arg = |key: &str| step.arg_str(key).unwrap_or("(없음)");

        match step.tool_name.as_str() {
            "calendar.read" => format!("- calendar.read: date={}", arg("date")),
            "map.route" => match step.arg_str("depart_time") {
                Some(depart) => format!(
                    "- map.route: {} → {} (depart_time={})",
                    arg("from"),
                    arg("to"),
                    depart
                ),
                None => format!("- map.route: {} → {}", arg("from"), arg("to")),
            },
            tool => format!(
                "- {}: args={}",
                tool,
                serde_json::to_string(&step.args).unwrap_or_else(|_| "{}".to_string())
            ),
        }
    }
}
