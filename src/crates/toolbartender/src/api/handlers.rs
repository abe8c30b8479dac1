//! HTTP request handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::Uri,
    response::IntoResponse,
    Json,
};
use tooling::logging::sanitize_for_logging;

use super::error::{ApiError, ApiResult};
use super::models::{
    CreatePlanRequest, CreatePlanResponse, ExplainPlanRequest, ExplainPlanResponse, HealthResponse,
    ParseGoalRequest, PlanToolsRequest, ToolDescriptor,
};
use super::response;
use super::routes::AppState;

/// Reject goals that are empty after trimming
fn require_goal(goal: &str) -> ApiResult<&str> {
    if goal.trim().is_empty() {
        return Err(ApiError::BadRequest("goal must not be blank".to_string()));
    }
    Ok(goal)
}

/// Handler for GET /health
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    response::ok(HealthResponse::new("ok", &*state.service_name))
}

/// Handler for GET /api/v1/tools
pub async fn list_tools() -> impl IntoResponse {
    response::ok(ToolDescriptor::catalog())
}

/// Handler for POST /api/v1/goals/parse
pub async fn parse_goal(
    State(state): State<AppState>,
    payload: Result<Json<ParseGoalRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(request) = payload?;
    let goal = require_goal(&request.goal)?;

    tracing::info!(goal = %sanitize_for_logging(goal), "parsing goal");
    Ok(response::ok(state.interpreter.parse_goal(goal)))
}

/// Handler for POST /api/v1/plans
pub async fn create_plan(
    State(state): State<AppState>,
    payload: Result<Json<CreatePlanRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(request) = payload?;
    let goal = require_goal(&request.goal)?;

    let plan = state
        .interpreter
        .create_plan(goal, request.available_tools.as_deref());
    tracing::info!(
        goal = %sanitize_for_logging(goal),
        plan_id = %plan.plan_id,
        steps = plan.steps.len(),
        "created plan"
    );

    Ok(response::ok(CreatePlanResponse { plan }))
}

/// Handler for POST /api/v1/plans/validate
pub async fn validate_plan(
    State(state): State<AppState>,
    payload: Result<Json<PlanToolsRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(request) = payload?;
    let validation = state
        .interpreter
        .validate(&request.plan, request.available_tools.as_deref());

    tracing::info!(plan_id = %request.plan.plan_id, ok = validation.ok, "validated plan");
    Ok(response::ok(validation))
}

/// Handler for POST /api/v1/plans/render-prompt
pub async fn render_prompt(
    State(state): State<AppState>,
    payload: Result<Json<PlanToolsRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(request) = payload?;
    let rendered = state
        .interpreter
        .render_prompt(&request.plan, request.available_tools.as_deref());

    tracing::info!(plan_id = %request.plan.plan_id, ok = rendered.ok, "rendered prompt");
    Ok(response::ok(rendered))
}

/// Handler for POST /api/v1/plans/explain
pub async fn explain_plan(
    State(state): State<AppState>,
    payload: Result<Json<ExplainPlanRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(request) = payload?;
    let summary = state.interpreter.explain(&request.plan);

    Ok(response::ok(ExplainPlanResponse { summary }))
}

/// Fallback for unmatched routes
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_goal() {
        assert_eq!(require_goal(" 미팅 취소해줘 ").unwrap(), " 미팅 취소해줘 ");
        assert!(matches!(require_goal("   "), Err(ApiError::BadRequest(_))));
        assert!(require_goal("").is_err());
    }
}
