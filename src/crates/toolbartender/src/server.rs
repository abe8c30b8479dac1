//! Server lifecycle: bind, serve, shut down on signal

use tokio::net::TcpListener;

use crate::api::{create_router, AppState};
use crate::config::ServerConfig;
use crate::interpreter::PlanInterpreter;
use crate::Result;
use planner::PlanCompiler;

/// Build the interpreter a configuration describes
pub fn build_interpreter(config: &ServerConfig) -> PlanInterpreter {
    let compiler = match &config.planner.execution_hint {
        Some(hint) => PlanCompiler::new().with_execution_hint(hint.clone()),
        None => PlanCompiler::new(),
    };
    PlanInterpreter::new().with_compiler(compiler)
}

/// Serve the API until Ctrl-C or SIGTERM
pub async fn serve(config: ServerConfig) -> Result<()> {
    let state = AppState::new(build_interpreter(&config), config.server.name.as_str());
    let app = create_router(state);

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(
        name = %config.server.name,
        addr = %listener.local_addr()?,
        version = crate::version(),
        "toolbartender server listening"
    );

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("toolbartender server shut down gracefully");
    Ok(())
}

/// Signal for graceful shutdown (Ctrl-C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for CTRL-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received CTRL-C signal, shutting down");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, shutting down");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_interpreter_uses_configured_hint() {
        let config = ServerConfig::from_toml("[planner]\nexecution_hint = \"one at a time\"\n").unwrap();
        let plan = build_interpreter(&config).create_plan("미팅 취소해줘", None);
        assert_eq!(plan.execution_hint, "one at a time");
    }

    #[test]
    fn test_build_interpreter_default_hint() {
        let plan = build_interpreter(&ServerConfig::default()).create_plan("미팅 취소해줘", None);
        assert_eq!(plan.execution_hint, planner::compiler::DEFAULT_EXECUTION_HINT);
    }
}
