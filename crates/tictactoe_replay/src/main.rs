//! Tic-tac-toe replay - command-line entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use tictactoe_replay::{ReplayConfig, ReplayScript, run_script};
use tracing::{error, info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let (config, load_error) = ReplayConfig::load_with_fallback(&cli.config);
    initialize_tracing(&config);

    if let Some(e) = load_error {
        error!(path = %cli.config.display(), error = %e, "Failed to load config");
        return Err(e.into());
    }
    info!(
        path = %cli.config.display(),
        log_filter = %config.log_filter(),
        show_board = config.show_board(),
        "Config ready"
    );

    run(&cli, &config)
}

#[instrument(skip_all, fields(script = %cli.script.display()))]
fn run(cli: &Cli, config: &ReplayConfig) -> Result<()> {
    let script = ReplayScript::from_file(&cli.script)?;
    let transcript = run_script(&script, config)?;

    for line in &transcript.lines {
        println!("{}", line);
    }
    info!(
        lines = transcript.lines.len(),
        game_over = transcript.final_state.is_game_over(),
        "Transcript printed"
    );
    Ok(())
}

fn initialize_tracing(config: &ReplayConfig) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
