//! Rule-based goal planning
//!
//! Turns a natural-language goal into an intent/slot extraction and an
//! ordered tool-call [`Plan`] for a downstream execution agent.
//!
//! ```text
//! goal ─┬─> intent::classify ──────> IntentTag ─┐
//!       └─> slots::extract_slots ──> SlotBag ───┼─> PlanCompiler ─> Plan
//!                       available_tools, strict ┘
//! ```
//!
//! Everything here is deterministic and side-effect free apart from the
//! random `plan_id`. Classification, extraction and compilation never fail;
//! degraded inputs surface as `notes` / `assumptions` instead.
//!
//! # Example
//!
//! ```rust
//! use planner::{create_plan, parse_goal, IntentTag};
//!
//! let parsed = parse_goal("판교에서 강남으로 오늘 20:00 가는 길");
//! assert_eq!(parsed.intent_type, IntentTag::Route);
//! assert_eq!(parsed.origin.as_deref(), Some("판교"));
//!
//! let plan = create_plan("판교에서 강남으로 오늘 20:00 가는 길", None, false);
//! assert_eq!(plan.steps.len(), 2);
//! assert_eq!(plan.steps[1].tool_name, "map.route");
//! ```

pub mod compiler;
pub mod goal;
pub mod intent;
pub mod messages;
pub mod plan;
pub mod slots;

pub use compiler::{create_plan, is_write_like, PlanCompiler, ToolAdmission};
pub use goal::{parse_goal, GoalParse};
pub use intent::{classify, IntentRule, IntentTag, INTENT_RULES};
pub use plan::{Plan, PlanStep, StepArgs};
pub use slots::{extract_slots, ClockTime, Route, SlotBag};

use thiserror::Error;

/// Errors at the fallible edges of the planner (string and JSON boundaries)
#[derive(Debug, Error)]
pub enum PlannerError {
    /// String does not name an intent tag
    #[error("Unknown intent tag: {0}")]
    UnknownIntent(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for planner operations
pub type Result<T> = std::result::Result<T, PlannerError>;

/// Get version information
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
