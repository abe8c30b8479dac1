//! Plan data model shared by the compiler and the formatting layer.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::Result;

/// Arguments of one tool call. Keys are ordered so that identical plans
/// serialize identically.
pub type StepArgs = BTreeMap<String, Value>;

/// One proposed tool invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanStep {
    /// `step-N`, contiguous from 1 within a plan
    pub step_id: String,
    /// Dotted `namespace.action` name, e.g. `calendar.read`
    pub tool_name: String,
    #[serde(default)]
    pub args: StepArgs,
    /// Fallback the execution agent should run if this step fails
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_fail: Option<String>,
}

impl PlanStep {
    /// Create a step without a fallback
    pub fn new(step_id: impl Into<String>, tool_name: impl Into<String>, args: StepArgs) -> Self {
        Self {
            step_id: step_id.into(),
            tool_name: tool_name.into(),
            args,
            on_fail: None,
        }
    }

    /// Attach a fallback description
    pub fn with_on_fail(mut self, on_fail: impl Into<String>) -> Self {
        self.on_fail = Some(on_fail.into());
        self
    }

    /// `args[key]` as a string slice, if it is a JSON string
    pub fn arg_str(&self, key: &str) -> Option<&str> {
        self.args.get(key).and_then(Value::as_str)
    }
}

/// An ordered tool-call plan for one goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub plan_id: String,
    /// The goal text verbatim (not the intent tag)
    pub intent: String,
    #[serde(default)]
    pub steps: Vec<PlanStep>,
    #[serde(default)]
    pub assumptions: Vec<String>,
    #[serde(default)]
    pub required_confirmations: Vec<String>,
    #[serde(default)]
    pub execution_hint: String,
}

impl Plan {
    /// Fresh `plan-<32 hex>` identifier
    pub fn new_id() -> String {
        format!("plan-{}", uuid::Uuid::new_v4().simple())
    }

    /// Tool names in step order, duplicates kept
    pub fn tool_names(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().map(|s| s.tool_name.as_str())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
