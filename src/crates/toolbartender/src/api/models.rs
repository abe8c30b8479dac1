//! Request and response models for the HTTP API

use planner::Plan;
use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// Configured server name
    pub service: String,
    pub version: String,
}

impl HealthResponse {
    pub fn new(status: impl Into<String>, service: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            service: service.into(),
            version: crate::version().to_string(),
        }
    }
}

/// Body of `POST /api/v1/goals/parse`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseGoalRequest {
    pub goal: String,
}

/// Body of `POST /api/v1/plans`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlanRequest {
    pub goal: String,
    /// Tools enabled in the caller's runtime. Non-empty turns on strict
    /// filtering.
    #[serde(default)]
    pub available_tools: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlanResponse {
    pub plan: Plan,
}

/// Body of the validate and render-prompt endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanToolsRequest {
    pub plan: Plan,
    #[serde(default)]
    pub available_tools: Option<Vec<String>>,
}

/// Body of `POST /api/v1/plans/explain`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplainPlanRequest {
    pub plan: Plan,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplainPlanResponse {
    pub summary: String,
}

/// Discovery entry for one operation an agent can call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub method: String,
    pub path: String,
    pub description: String,
}

impl ToolDescriptor {
    fn new(name: &str, method: &str, path: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            method: method.to_string(),
            path: path.to_string(),
            description: description.to_string(),
        }
    }

    /// Every planning operation the service exposes
    pub fn catalog() -> Vec<Self> {
        vec![
            Self::new(
                "tb_parse_goal",
                "POST",
                "/api/v1/goals/parse",
                "자연어 goal에서 intent/slot(출발/도착/시간/날짜 등)을 추출합니다.",
            ),
            Self::new(
                "tb_plan_create",
                "POST",
                "/api/v1/plans",
                "goal을 실행 가능한 도구 호출 계획(plan)으로 변환합니다. available_tools를 주면 그 목록에 있는 도구만 사용합니다.",
            ),
            Self::new(
                "tb_plan_validate",
                "POST",
                "/api/v1/plans/validate",
                "생성된 plan이 현재 available_tools로 실행 가능한지 검증합니다. available_tools가 비어 있으면 plan.steps의 도구 전체를 missing으로 반환합니다.",
            ),
            Self::new(
                "tb_plan_render_prompt",
                "POST",
                "/api/v1/plans/render-prompt",
                "실행 에이전트가 plan을 안전하게 실행하도록 도구 사용 규칙, 실행 순서, 오류 대응, 사용자 확인 게이트를 담은 프롬프트를 생성합니다.",
            ),
            Self::new(
                "tb_plan_explain",
                "POST",
                "/api/v1/plans/explain",
                "plan을 사용자에게 한국어로 설명합니다: 어떤 도구를 왜 사용하는지, 필요한 확인 사항은 무엇인지 안내합니다.",
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response() {
        let health = HealthResponse::new("ok", "toolbartender");
        assert_eq!(health.status, "ok");
        assert!(!health.version.is_empty());
    }

    #[test]
    fn test_catalog_names_are_unique() {
        let catalog = ToolDescriptor::catalog();
        let mut names: Vec<&str> = catalog.iter().map(|t| t.name.as_str()).collect();
        names.sort();
        names.dedup();

        assert_eq!(names.len(), 5);
        assert!(catalog.iter().all(|t| t.path.starts_with("/api/v1/")));
    }

    #[test]
    fn test_create_plan_request_tools_optional() {
        let request: CreatePlanRequest = serde_json::from_str(r#"{"goal": "미팅 취소해줘"}"#).unwrap();
        assert!(request.available_tools.is_none());
    }
}
