//! Plan compilation.
//!
//! Each intent has a fixed step template. A step is emitted only when its
//! required slots were extracted and its tool is admitted by the
//! [`ToolAdmission`] policy. Nothing here fails: a missing slot or a
//! rejected tool suppresses the step and leaves a note in `assumptions`.

use serde_json::Value;
use std::collections::BTreeSet;

use crate::intent::{classify, IntentTag};
use crate::messages;
use crate::plan::{Plan, PlanStep, StepArgs};
use crate::slots::{extract_slots, SlotBag};

/// Tool names the step templates refer to
pub mod tools {
    pub const CALENDAR_READ: &str = "calendar.read";
    pub const CALENDAR_CREATE: &str = "calendar.create";
    pub const MAP_ROUTE: &str = "map.route";
    pub const PAPER_SEARCH: &str = "paper.search";
    pub const PAPER_SUMMARIZE: &str = "paper.summarize";
    pub const EMAIL_SEND: &str = "email.send";
    pub const NEWS_SEARCH: &str = "news.search";
    pub const NEWS_SUMMARIZE: &str = "news.summarize";
    pub const KAKAO_SEND: &str = "kakao.send";
}

const WRITE_SUFFIXES: [&str; 5] = [".create", ".write", ".update", ".delete", ".send"];

pub const DEFAULT_EXECUTION_HINT: &str =
    "Execute steps sequentially using tool_name and args as-is. Summarize each step result.";

/// Whether a tool mutates state and therefore needs user confirmation
pub fn is_write_like(tool_name: &str) -> bool {
    WRITE_SUFFIXES.iter().any(|suffix| tool_name.ends_with(suffix))
}

/// Which tools the compiler may emit steps for.
///
/// Filtering applies only in strict mode with a non-empty tool list. An
/// empty list always admits everything, so callers that cannot enumerate
/// their tools still get a plan; missing tools are reported later by plan
/// validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolAdmission {
    available: BTreeSet<String>,
    strict: bool,
}

impl ToolAdmission {
    pub fn new<I, S>(available: I, strict: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            available: available.into_iter().map(Into::into).collect(),
            strict,
        }
    }

    /// Admit every tool
    pub fn permissive() -> Self {
        Self::default()
    }

    /// True when the caller supplied at least one tool name
    pub fn has_tool_list(&self) -> bool {
        !self.available.is_empty()
    }

    /// True when admission actually filters
    pub fn is_enforced(&self) -> bool {
        self.strict && self.has_tool_list()
    }

    pub fn allows(&self, tool_name: &str) -> bool {
        !self.is_enforced() || self.available.contains(tool_name)
    }

    fn rejected<'t>(&self, tool_names: &[&'t str]) -> Vec<&'t str> {
        tool_names
            .iter()
            .copied()
            .filter(|name| !self.allows(name))
            .collect()
    }
}

/// Compiles goals into plans
#[derive(Debug, Clone)]
pub struct PlanCompiler {
    execution_hint: String,
}

impl PlanCompiler {
    pub fn new() -> Self {
        Self {
            execution_hint: DEFAULT_EXECUTION_HINT.to_string(),
        }
    }

    /// Override the instruction handed to the execution agent
    pub fn with_execution_hint(mut self, hint: impl Into<String>) -> Self {
        self.execution_hint = hint.into();
        self
    }

    /// Classify, extract and compile in one go
    pub fn compile(&self, goal: &str, available_tools: Option<&[String]>, strict: bool) -> Plan {
        let admission = ToolAdmission::new(available_tools.unwrap_or_default().iter().cloned(), strict);
        self.compile_with(goal, classify(goal), &extract_slots(goal), &admission)
    }

    /// Compile from an already classified intent and extracted slots
    pub fn compile_with(
        &self,
        goal: &str,
        intent: IntentTag,
        slots: &SlotBag,
        admission: &ToolAdmission,
    ) -> Plan {
        let mut draft = Draft::new(admission);

        if !admission.has_tool_list() {
            draft.assume(messages::TOOLS_NOT_PROVIDED);
        }

        match intent {
            IntentTag::Route => draft.route(slots),
            IntentTag::ScheduleCreate => draft.schedule_create(slots),
            IntentTag::ScheduleUpdate => draft.assume(messages::UPDATE_NEEDS_EVENT_REF),
            IntentTag::ScheduleCancel => draft.assume(messages::CANCEL_NEEDS_EVENT_REF),
            IntentTag::PaperSearchSummarizeEmail => draft.paper(goal, slots),
            IntentTag::NewsAnalyzeKakaoSend => draft.news(goal),
            IntentTag::Unknown => draft.assume(messages::INTENT_NOT_CLASSIFIED),
        }

        let required_confirmations = draft
            .steps
            .iter()
            .filter(|step| is_write_like(&step.tool_name))
            .map(|step| messages::confirmation_required(&step.tool_name))
            .collect();

        let plan = Plan {
            plan_id: Plan::new_id(),
            intent: goal.to_string(),
            steps: draft.steps,
            assumptions: draft.assumptions,
            required_confirmations,
            execution_hint: self.execution_hint.clone(),
        };

        tracing::debug!(
            plan_id = %plan.plan_id,
            intent = %intent,
            steps = plan.steps.len(),
            assumptions = plan.assumptions.len(),
            strict = admission.is_enforced(),
            "compiled plan"
        );
        plan
    }
}

impl Default for PlanCompiler {
    fn default() -> Self {
        Self::new()
    }
}

/// Compile a plan with the default compiler
pub fn create_plan(goal: &str, available_tools: Option<&[String]>, strict_available_tools: bool) -> Plan {
    PlanCompiler::new().compile(goal, available_tools, strict_available_tools)
}

/// Steps and notes accumulated while compiling one plan
struct Draft<'a> {
    admission: &'a ToolAdmission,
    steps: Vec<PlanStep>,
    assumptions: Vec<String>,
}

impl<'a> Draft<'a> {
    fn new(admission: &'a ToolAdmission) -> Self {
        Self {
            admission,
            steps: Vec::new(),
            assumptions: vec![messages::CONFIRMATION_POLICY.to_string()],
        }
    }

    fn assume(&mut self, note: impl Into<String>) {
        self.assumptions.push(note.into());
    }

    fn push(&mut self, tool_name: &str, args: StepArgs) {
        let step_id = format!("step-{}", self.steps.len() + 1);
        self.steps.push(PlanStep::new(step_id, tool_name, args));
    }

    /// Emit a single step if its tool is admitted
    fn step(&mut self, tool_name: &str, args: StepArgs) {
        if self.admission.allows(tool_name) {
            self.push(tool_name, args);
        } else {
            self.assume(messages::tools_not_available(&[tool_name]));
        }
    }

    /// Emit every step or none of them
    fn chain<const N: usize>(&mut self, chain: [(&str, StepArgs); N]) {
        let names: Vec<&str> = chain.iter().map(|(name, _)| *name).collect();
        let rejected = self.admission.rejected(&names);
        if !rejected.is_empty() {
            self.assume(messages::tools_not_available(&rejected));
            return;
        }
        for (tool_name, args) in chain {
            self.push(tool_name, args);
        }
    }

    fn route(&mut self, slots: &SlotBag) {
        let Some((origin, destination)) = slots.route() else {
            self.assume(messages::ROUTE_NOT_PARSED);
            return;
        };

        self.step(tools::CALENDAR_READ, args([("date", slots.date_token.as_str())]));

        let mut route_args = args([("from", origin), ("to", destination)]);
        if let Some(time) = &slots.time_hhmm {
            route_args.insert("depart_time".to_string(), Value::String(time.clone()));
        }
        self.step(tools::MAP_ROUTE, route_args);
    }

    fn schedule_create(&mut self, slots: &SlotBag) {
        if slots.title.is_none() {
            self.assume(messages::TITLE_NOT_PARSED);
        }
        if slots.time_hhmm.is_none() {
            self.assume(messages::TIME_NOT_PARSED);
        }
        let (Some(title), Some(time)) = (&slots.title, &slots.time_hhmm) else {
            return;
        };

        let date = slots.date_token.as_str();
        self.step(tools::CALENDAR_READ, args([("date", date)]));
        self.step(
            tools::CALENDAR_CREATE,
            args([("title", title.as_str()), ("date", date), ("time", time.as_str())]),
        );
    }

    fn paper(&mut self, goal: &str, slots: &SlotBag) {
        if slots.email.is_none() {
            self.assume(messages::EMAIL_NOT_PARSED);
        }
        self.assume(messages::PAPER_QUERY_HINT);

        let Some(email) = &slots.email else {
            return;
        };
        self.chain([
            (tools::PAPER_SEARCH, args([("query", goal)])),
            (tools::PAPER_SUMMARIZE, args([("query", goal)])),
            (tools::EMAIL_SEND, args([("to", email.as_str())])),
        ]);
    }

    fn news(&mut self, goal: &str) {
        self.assume(messages::NEWS_TARGET_HINT);
        self.chain([
            (tools::NEWS_SEARCH, args([("topic", goal)])),
            (tools::NEWS_SUMMARIZE, args([("topic", goal)])),
            (tools::KAKAO_SEND, args([("target", "me")])),
        ]);
    }
}

fn args<const N: usize>(pairs: [(&str, &str); N]) -> StepArgs {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_string(), Value::String(value.to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tools_of(plan: &Plan) -> Vec<&str> {
        plan.tool_names().collect()
    }

    fn strict(tools: &[&str]) -> Vec<String> {
        tools.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_is_write_like() {
        assert!(is_write_like("calendar.create"));
        assert!(is_write_like("email.send"));
        assert!(is_write_like("file.write"));
        assert!(is_write_like("calendar.update"));
        assert!(is_write_like("calendar.delete"));
        assert!(!is_write_like("calendar.read"));
        assert!(!is_write_like("email.sender"));
    }

    #[test]
    fn test_admission_policy() {
        let empty = ToolAdmission::new(Vec::<String>::new(), true);
        assert!(!empty.is_enforced());
        assert!(empty.allows("anything.at_all"));

        let loose = ToolAdmission::new(["calendar.read"], false);
        assert!(loose.allows("map.route"));

        let enforced = ToolAdmission::new(["calendar.read"], true);
        assert!(enforced.allows("calendar.read"));
        assert!(!enforced.allows("map.route"));
    }

    #[test]
    fn test_route_without_time_omits_depart_time() {
        let plan = create_plan("판교에서 강남까지 가는 길", None, false);
        let route = &plan.steps[1];

        assert_eq!(route.tool_name, "map.route");
        assert_eq!(route.arg_str("to"), Some("강남"));
        assert!(route.args.get("depart_time").is_none());
    }

    #[test]
    fn test_route_missing_endpoints() {
        let plan = create_plan("어디로 이동하지", None, false);

        assert!(plan.steps.is_empty());
        assert!(plan.assumptions.iter().any(|a| a == messages::ROUTE_NOT_PARSED));
    }

    #[test]
    fn test_step_ids_stay_contiguous_when_first_step_is_rejected() {
        let plan = create_plan(
            "판교에서 강남으로 오늘 20:00 가는 길",
            Some(&strict(&["map.route"])),
            true,
        );

        assert_eq!(tools_of(&plan), vec!["map.route"]);
        assert_eq!(plan.steps[0].step_id, "step-1");
        assert!(plan
            .assumptions
            .iter()
            .any(|a| a.contains("calendar.read")));
    }

    #[test]
    fn test_schedule_create_needs_title_and_time() {
        let no_time = create_plan("'팀미팅' 일정 잡아줘", None, false);
        assert!(no_time.steps.is_empty());
        assert!(no_time.assumptions.iter().any(|a| a == messages::TIME_NOT_PARSED));
        assert!(!no_time.assumptions.iter().any(|a| a == messages::TITLE_NOT_PARSED));

        let neither = create_plan("회의 일정 등록해줘", None, false);
        assert!(neither.steps.is_empty());
        assert!(neither.assumptions.iter().any(|a| a == messages::TIME_NOT_PARSED));
        assert!(neither.assumptions.iter().any(|a| a == messages::TITLE_NOT_PARSED));
    }

    #[test]
    fn test_schedule_update_never_emits_steps() {
        let plan = create_plan("내일 오후 3시 '주간 회의' 일정 변경해줘", None, false);

        assert!(plan.steps.is_empty());
        assert!(plan.assumptions.iter().any(|a| a.contains("event_ref")));
    }

    #[test]
    fn test_paper_chain() {
        let goal = "RAG 논문 검색해서 요약 후 me@example.com 메일 보내줘";
        let plan = create_plan(goal, None, false);

        assert_eq!(tools_of(&plan), vec!["paper.search", "paper.summarize", "email.send"]);
        assert_eq!(plan.steps[0].arg_str("query"), Some(goal));
        assert_eq!(plan.steps[2].arg_str("to"), Some("me@example.com"));
        assert_eq!(plan.required_confirmations, vec!["email.send requires user confirmation"]);
        assert!(plan.assumptions.iter().any(|a| a == messages::PAPER_QUERY_HINT));
    }

    #[test]
    fn test_paper_chain_is_all_or_nothing() {
        let goal = "RAG 논문 검색해서 요약 후 me@example.com 메일 보내줘";
        let plan = create_plan(goal, Some(&strict(&["paper.search", "paper.summarize"])), true);

        assert!(plan.steps.is_empty());
        assert!(plan.assumptions.iter().any(|a| a.contains("email.send")));

        let no_email = create_plan("RAG 논문 검색해서 요약해줘", None, false);
        assert!(no_email.steps.is_empty());
        assert!(no_email.assumptions.iter().any(|a| a == messages::EMAIL_NOT_PARSED));
    }

    #[test]
    fn test_news_chain() {
        let plan = create_plan("오늘 AI 뉴스 요약해서 카톡 보내줘", None, false);

        assert_eq!(tools_of(&plan), vec!["news.search", "news.summarize", "kakao.send"]);
        assert_eq!(plan.steps[2].arg_str("target"), Some("me"));
        assert_eq!(plan.required_confirmations, vec!["kakao.send requires user confirmation"]);

        let blocked = create_plan(
            "오늘 AI 뉴스 요약해서 카톡 보내줘",
            Some(&strict(&["news.search", "news.summarize"])),
            true,
        );
        assert!(blocked.steps.is_empty());
    }

    #[test]
    fn test_unknown_intent() {
        let plan = create_plan("안녕하세요", None, false);

        assert!(plan.steps.is_empty());
        assert!(plan.required_confirmations.is_empty());
        assert_eq!(
            plan.assumptions,
            vec![
                messages::CONFIRMATION_POLICY.to_string(),
                messages::TOOLS_NOT_PROVIDED.to_string(),
                messages::INTENT_NOT_CLASSIFIED.to_string(),
            ]
        );
    }

    #[test]
    fn test_tool_list_suppresses_assumed_tools_note() {
        let plan = create_plan("안녕하세요", Some(&strict(&["calendar.read"])), false);
        assert!(!plan.assumptions.iter().any(|a| a == messages::TOOLS_NOT_PROVIDED));
    }

    #[test]
    fn test_custom_execution_hint() {
        let plan = PlanCompiler::new()
            .with_execution_hint("stop after each step")
            .compile("안녕하세요", None, false);
        assert_eq!(plan.execution_hint, "stop after each step");
    }

    #[test]
    fn test_compile_with_uses_given_intent() {
        let slots = extract_slots("판교에서 강남으로");
        let plan = PlanCompiler::new().compile_with(
            "판교에서 강남으로",
            IntentTag::Unknown,
            &slots,
            &ToolAdmission::permissive(),
        );
        assert!(plan.steps.is_empty());
    }
}
