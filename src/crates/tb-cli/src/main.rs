use clap::Parser;
use std::process::ExitCode;

use tb_cli::{execute, Cli, Commands};
use toolbartender::ServerConfig;
use tooling::error::format_error_chain;
use tooling::logging::{init_tracing, LogLevel};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", format_error_chain(&*err));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if let Commands::Serve { config } = &cli.command {
        let mut config = ServerConfig::load(config.as_deref())?;
        if let Some(level) = cli.log_level() {
            config.logging.level = Some(level);
        }
        init_tracing(config.log_level())?;

        let runtime = tokio::runtime::Runtime::new()?;
        runtime.block_on(toolbartender::serve(config))?;
        return Ok(());
    }

    init_tracing(cli.log_level().unwrap_or(LogLevel::Warn))?;
    println!("{}", execute(&cli.command, cli.format)?);
    Ok(())
}
