//! # tb-cli
//!
//! Command-line front end for goal parsing and plan compilation. Plans are
//! read from and written to JSON so they can be piped between subcommands:
//!
//! ```text
//! tb plan "판교에서 강남으로 오늘 20:00 가는 길" > plan.json
//! tb validate plan.json --tool calendar.read --tool map.route
//! tb render - < plan.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};

use planner::Plan;
use toolbartender::PlanInterpreter;
use tooling::logging::LogGuard;

#[derive(Debug, Parser)]
#[command(name = "tb")]
#[command(about = "toolbartender - turn goals into tool-call plans", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format for structured results
    #[arg(long, value_enum, default_value_t = OutputFormat::Json, global = true)]
    pub format: OutputFormat,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract the intent and slots of a goal
    Parse {
        goal: String,
    },

    /// Compile a goal into a plan
    Plan {
        goal: String,

        /// Tool enabled in the runtime (repeatable)
        #[arg(short, long = "tool")]
        tools: Vec<String>,

        /// Keep steps whose tools are not listed
        #[arg(long)]
        loose: bool,
    },

    /// Check a plan against the enabled tools
    Validate {
        /// Plan JSON file, or `-` for stdin
        plan: PathBuf,

        #[arg(short, long = "tool")]
        tools: Vec<String>,
    },

    /// Render the execution-agent prompt for a plan
    Render {
        /// Plan JSON file, or `-` for stdin
        plan: PathBuf,

        #[arg(short, long = "tool")]
        tools: Vec<String>,
    },

    /// Explain a plan in Korean
    Explain {
        /// Plan JSON file, or `-` for stdin
        plan: PathBuf,
    },

    /// Run the HTTP server
    Serve {
        /// Configuration file (defaults to TB_CONFIG or ./toolbartender.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Parse { .. } => "parse",
            Commands::Plan { .. } => "plan",
            Commands::Validate { .. } => "validate",
            Commands::Render { .. } => "render",
            Commands::Explain { .. } => "explain",
            Commands::Serve { .. } => "serve",
        }
    }
}

impl Cli {
    /// Log level implied by `-v` flags, if any
    pub fn log_level(&self) -> Option<tooling::logging::LogLevel> {
        use tooling::logging::LogLevel;
        match self.verbose {
            0 => None,
            1 => Some(LogLevel::Debug),
            _ => Some(LogLevel::Trace),
        }
    }
}

/// Serialize a result in the requested format
pub fn render_output<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    let text = match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
    };
    Ok(text.trim_end().to_string())
}

/// Load a plan from a JSON file, or stdin when the path is `-`
pub fn read_plan(path: &Path) -> Result<Plan> {
    let json = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read plan from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read plan file {}", path.display()))?
    };

    Plan::from_json(&json).with_context(|| format!("invalid plan JSON in {}", path.display()))
}

fn tool_list(tools: &[String]) -> Option<&[String]> {
    (!tools.is_empty()).then_some(tools)
}

/// Execute every subcommand except `serve`, returning what to print
pub fn execute(command: &Commands, format: OutputFormat) -> Result<String> {
    let interpreter = PlanInterpreter::new();
    let _guard = LogGuard::new(format!("tb {}", command.name()));

    match command {
        Commands::Parse { goal } => render_output(&interpreter.parse_goal(goal), format),
        Commands::Plan { goal, tools, loose } => {
            let strict = !loose && !tools.is_empty();
            let plan = planner::create_plan(goal, tool_list(tools), strict);
            tracing::debug!(plan_id = %plan.plan_id, strict, "compiled plan");
            render_output(&plan, format)
        }
        Commands::Validate { plan, tools } => {
            let plan = read_plan(plan)?;
            render_output(&interpreter.validate(&plan, tool_list(tools)), format)
        }
        Commands::Render { plan, tools } => {
            let plan = read_plan(plan)?;
            Ok(interpreter.render_prompt(&plan, tool_list(tools)).prompt)
        }
        Commands::Explain { plan } => Ok(interpreter.explain(&read_plan(plan)?)),
        Commands::Serve { .. } => anyhow::bail!("serve runs the server and produces no output"),
    }
}
