//! Execution prompt rendering.
//!
//! Produces the instructions an execution agent follows to run a plan:
//! - The goal and the enabled tools
//! - Numbered steps with their arguments and fallbacks
//! - Confirmation gates for write-like tools
//! - Execution rules, including what to do about missing tools

use planner::{is_write_like, Plan, PlanStep};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::Write;

use super::validator::{is_runnable, missing_tools};

/// Rendered prompt plus the readiness verdict it was rendered with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedPrompt {
    pub ok: bool,
    #[serde(default)]
    pub missing_tools: Vec<String>,
    pub prompt: String,
}

/// Renders plans into execution prompts
#[derive(Debug, Clone, Default)]
pub struct PromptRenderer;

impl PromptRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, plan: &Plan, available_tools: Option<&[String]>) -> RenderedPrompt {
        let missing = missing_tools(plan, available_tools);
        let ok = is_runnable(plan, available_tools, &missing);

        let available: BTreeSet<&str> = available_tools
            .unwrap_or_default()
            .iter()
            .map(String::as_str)
            .collect();
        let available_text = if available.is_empty() {
            "(unknown/empty)".to_string()
        } else {
            join(available)
        };
        let missing_text = if missing.is_empty() {
            "(none)".to_string()
        } else {
            missing.join(", ")
        };
        let hint = if plan.execution_hint.is_empty() {
            "(none)"
        } else {
            plan.execution_hint.as_str()
        };

        let prompt = format!(
            "You are an execution agent that follows a provided MCP plan.

## Goal
{goal}

## Available Tools (enabled)
{available_text}

## Plan Steps (execute sequentially)
{steps}

## Safety / Confirmation Gates
- Before calling any step that can modify data (create/write/update/delete/send) OR appears in required_confirmations:
  1) STOP and ask the user for explicit confirmation.
  2) Only proceed if the user confirms.
required_confirmations:
{confirmations}

## Execution Rules
1) Do NOT invent tools. Only call the exact tool_name listed in each step.
2) Use args exactly as provided. Do not add new required fields unless the tool returns a schema error.
3) Execute steps in order. After each tool call, summarize the result in 1-3 bullets.
4) If a tool call fails:
   - If on_fail is provided, execute on_fail as the fallback.
   - Otherwise, stop and report the error + what you need from the user.
5) If any step tool is missing from available tools:
   - Stop. Tell the user which tools to enable: {missing_text}.
6) Final output:
   - Provide a concise summary of all step results
   - Provide next action suggestions

Execution hint (from plan):
{hint}
",
            goal = plan.intent,
            steps = self.format_steps(&plan.steps),
            confirmations = self.format_confirmations(plan),
        );

        RenderedPrompt {
            ok,
            missing_tools: missing,
            prompt,
        }
    }

    fn format_steps(&self, steps: &[PlanStep]) -> String {
        if steps.is_empty() {
            return "(no steps)".to_string();
        }

        let mut formatted = String::new();
        for (index, step) in steps.iter().enumerate() {
            if index > 0 {
                formatted.push('\n');
            }
            let args = serde_json::to_string(&step.args).unwrap_or_else(|_| "{}".to_string());
            let _ = write!(formatted, "{}. {}  args={}", index + 1, step.tool_name, args);
            if let Some(on_fail) = &step.on_fail {
                let _ = write!(formatted, "  on_fail={}", on_fail);
            }
        }
        formatted
    }

    /// Sorted union of the plan's confirmations and a write-like tool notice
    fn format_confirmations(&self, plan: &Plan) -> String {
        let mut gates: BTreeSet<String> = plan.required_confirmations.iter().cloned().collect();

        let write_tools: BTreeSet<&str> = plan.tool_names().filter(|t| is_write_like(t)).collect();
        if !write_tools.is_empty() {
            gates.insert(format!("Write-like tools detected: {}", join(write_tools)));
        }

        if gates.is_empty() {
            return "(none)".to_string();
        }
        gates
            .iter()
            .map(|gate| format!("- {}", gate))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn join(names: BTreeSet<&str>) -> String {
    names.into_iter().collect::<Vec<_>>().join(", ")
}
