use std::io;
use std::process::ExitCode;

use anyhow::Context;

use tankbot_app::config::AgentConfig;
use tankbot_app::game_loop::run_match;
use tankbot_app::logging::init_tracing;

fn main() -> ExitCode {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("agent aborted: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let config = AgentConfig::from_env().context("invalid configuration")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let summary = run_match(&config, stdin.lock(), stdout.lock()).context("match failed")?;

    tracing::info!(
        turns = summary.turns,
        actions_sent = summary.actions_sent,
        "match finished"
    );
    Ok(())
}
