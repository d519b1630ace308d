//! Strictly Bingo - command-line player.

use anyhow::{Context, Result, bail};
use clap::Parser;
use rand::SeedableRng;
use strictly_bingo::{CardPhase, ShowId, StdRng};
use strictly_bingo_tui::{
    BingoConfig, Cli, Command, failure_message, provider_from_config, render_text, run_tui,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli.command)?;

    let args = cli.command.show_args();
    let config = BingoConfig::load_or_default(&cli.config)
        .context("Failed to load config")?
        .with_overrides(args.shows_dir.clone(), args.server_url.clone(), args.seed);
    info!(?config, "Resolved configuration");

    let provider = provider_from_config(&config);
    let rng = match config.seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_entropy(),
    };

    let show_id = ShowId::new(args.show_id.clone());
    let card = match CardPhase::load(&provider, &show_id, rng).await {
        CardPhase::Ready(card) => card,
        CardPhase::Failed(e) => {
            warn!(error = %e, "Could not deal a card");
            bail!(failure_message(&e));
        }
        CardPhase::Loading => bail!("Show load did not settle"),
    };

    match cli.command {
        Command::Play(_) => run_tui(card),
        Command::Print(_) => {
            print!("{}", render_text(&card));
            Ok(())
        }
    }
}

/// Interactive play logs to a file so output does not corrupt the terminal;
/// printing logs to stderr.
fn init_tracing(command: &Command) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match command {
        Command::Play(_) => {
            let log_file = std::fs::File::create("strictly_bingo.log")
                .context("Failed to create log file")?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false)
                .init();
        }
        Command::Print(_) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}
