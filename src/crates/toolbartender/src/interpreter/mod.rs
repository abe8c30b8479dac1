//! Plan interpreter for the formatting layer around the planner core.
//!
//! This module provides components for:
//! - Checking a plan against the tools a runtime actually has enabled
//! - Rendering the prompt an execution agent follows
//! - Explaining a plan to the user in Korean

pub mod explainer;
pub mod prompt;
pub mod validator;

pub use explainer::PlanExplainer;
pub use prompt::{PromptRenderer, RenderedPrompt};
pub use validator::{missing_tools, PlanValidation, PlanValidator};

use planner::{GoalParse, Plan, PlanCompiler};

/// Coordinates the planner core with the formatting components
#[derive(Debug, Clone, Default)]
pub struct PlanInterpreter {
    compiler: PlanCompiler,
    validator: PlanValidator,
    renderer: PromptRenderer,
    explainer: PlanExplainer,
}

impl PlanInterpreter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a compiler with a custom execution hint
    pub fn with_compiler(mut self, compiler: PlanCompiler) -> Self {
        self.compiler = compiler;
        self
    }

    pub fn parse_goal(&self, goal: &str) -> GoalParse {
        planner::parse_goal(goal)
    }

    /// Plan a goal. Strict filtering is on exactly when the caller
    /// enumerated at least one tool.
    pub fn create_plan(&self, goal: &str, available_tools: Option<&[String]>) -> Plan {
        let strict = available_tools.is_some_and(|tools| !tools.is_empty());
        self.compiler.compile(goal, available_tools, strict)
    }

    pub fn validate(&self, plan: &Plan, available_tools: Option<&[String]>) -> PlanValidation {
        self.validator.validate(plan, available_tools)
    }

    pub fn render_prompt(&self, plan: &Plan, available_tools: Option<&[String]>) -> RenderedPrompt {
        self.renderer.render(plan, available_tools)
    }

    pub fn explain(&self, plan: &Plan) -> String {
        self.explainer.explain(plan)
    }
}
