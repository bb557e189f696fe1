use anyhow::{Context, Result};
use clap::Parser;
use tokio::{io::BufReader, select};
use tracing::warn;

use kata_social_network::{cli::Cli, clock::SystemClock, engine::Engine, repl};

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt};

    // Keep stdout for the transcript; diagnostics go to stderr.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let mut engine = Engine::new(cli.users, SystemClock).context("invalid --users roster")?;

    let mut stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();

    select! {
        result = repl::run(&mut engine, &mut stdin, &mut stdout, cli.format) => result?,
        ctrl_c = tokio::signal::ctrl_c() => {
            if let Err(error) = ctrl_c {
                warn!(?error, "ctrl-c handler failed");
            }
        }
    }

    Ok(())
}
