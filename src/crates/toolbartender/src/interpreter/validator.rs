//! Plan validation against an availability list.
//!
//! Unlike compilation, validation is conservative: with no tool list every
//! step tool counts as missing, because nothing confirms it exists.

use planner::Plan;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Outcome of checking a plan against the enabled tools
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanValidation {
    pub ok: bool,
    #[serde(default)]
    pub issues: Vec<String>,
    #[serde(default)]
    pub missing_tools: Vec<String>,
}

/// Sorted, de-duplicated step tools absent from `available_tools`.
/// An empty or omitted list makes every step tool missing.
pub fn missing_tools(plan: &Plan, available_tools: Option<&[String]>) -> Vec<String> {
    let available: BTreeSet<&str> = available_tools
        .unwrap_or_default()
        .iter()
        .map(String::as_str)
        .collect();

    plan.tool_names()
        .filter(|tool| available.is_empty() || !available.contains(tool))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Whether a plan can run: something to run, nothing missing, and a tool
/// list that vouches for it
pub(crate) fn is_runnable(plan: &Plan, available_tools: Option<&[String]>, missing: &[String]) -> bool {
    let has_tools = available_tools.is_some_and(|tools| !tools.is_empty());
    missing.is_empty() && !plan.steps.is_empty() && has_tools
}

/// Checks plans before they are handed to an execution agent
#[derive(Debug, Clone, Default)]
pub struct PlanValidator;

impl PlanValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, plan: &Plan, available_tools: Option<&[String]>) -> PlanValidation {
        let missing = missing_tools(plan, available_tools);
        let mut issues = Vec::new();

        if available_tools.map_or(true, <[String]>::is_empty) {
            issues.push(
                "available_tools가 비어 있습니다: 실행 환경의 활성 도구 목록을 받지 못해 모든 도구를 누락(미확인)으로 판단했습니다."
                    .to_string(),
            );
        }
        if !missing.is_empty() {
            issues.push(format!("누락된 도구(또는 미확인): {}", missing.join(", ")));
        }
        if plan.steps.is_empty() {
            issues.push(
                "plan.steps가 비어 있습니다: 실행할 단계가 없습니다 (goal 해석 실패 또는 도구 제한 때문일 수 있습니다)."
                    .to_string(),
            );
        }

        let ok = is_runnable(plan, available_tools, &missing);
        tracing::debug!(plan_id = %plan.plan_id, ok, missing = missing.len(), "validated plan");

        PlanValidation {
            ok,
            issues,
            missing_tools: missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner::create_plan;

    const ROUTE_GOAL: &str = "판교에서 강남으로 오늘 20:00 가는 길";

    fn tools(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_all_tools_available() {
        let plan = create_plan(ROUTE_GOAL, None, false);
        let available = tools(&["map.route", "calendar.read", "email.send"]);
        let result = PlanValidator::new().validate(&plan, Some(&available));

        assert!(result.ok);
        assert!(result.issues.is_empty());
        assert!(result.missing_tools.is_empty());
    }

    #[test]
    fn test_missing_tool_is_reported() {
        let plan = create_plan(ROUTE_GOAL, None, false);
        let result = PlanValidator::new().validate(&plan, Some(&tools(&["calendar.read"])));

        assert!(!result.ok);
        assert_eq!(result.missing_tools, vec!["map.route"]);
        assert!(result.issues[0].contains("map.route"));
    }

    #[test]
    fn test_empty_list_marks_everything_missing() {
        let plan = create_plan(ROUTE_GOAL, None, false);
        let result = PlanValidator::new().validate(&plan, None);

        assert!(!result.ok);
        assert_eq!(result.missing_tools, vec!["calendar.read", "map.route"]);
        assert_eq!(result.issues.len(), 2);
    }

    #[test]
    fn test_plan_without_steps_is_not_ok() {
        let plan = create_plan("미팅 취소해줘", None, false);
        let result = PlanValidator::new().validate(&plan, Some(&tools(&["calendar.read"])));

        assert!(!result.ok);
        assert!(result.missing_tools.is_empty());
        assert_eq!(result.issues.len(), 1);
        assert!(result.issues[0].contains("plan.steps"));
    }

    #[test]
    fn test_missing_tools_are_unique_and_sorted() {
        let mut plan = create_plan(ROUTE_GOAL, None, false);
        plan.steps.push(plan.steps[0].clone());

        assert_eq!(missing_tools(&plan, Some(&[])), vec!["calendar.read", "map.route"]);
    }
}
