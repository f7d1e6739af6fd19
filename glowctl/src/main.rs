//! Interactive BLE controller for LED glow glasses
//!
//! Waits for the glasses to show up on the local adapter, connects, and
//! drops into a prompt:
//!
//! ```text
//! $ glowctl
//! GlowGlasses> on
//! GlowGlasses> off
//! GlowGlasses> help
//! ```

mod commands;
mod repl;

use anyhow::Context as _;
use clap::Parser;
use glowctl_ble::{discovery, Glasses};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "glowctl")]
#[command(about = "Interactive BLE controller for LED glow glasses")]
struct Cli {
    /// Log everything
    #[arg(short, long)]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let adapter = discovery::default_adapter()
        .await
        .context("couldn't get default adapter")?;

    info!("finding glasses...");
    let device = discovery::find_glasses(&adapter)
        .await
        .context("couldn't find glasses")?;
    let glasses = Glasses::connect(device).await?;

    let registry = commands::Registry::builtin();
    repl::run(&glasses, &registry).await
}

fn init_logging(cli: &Cli) {
    // Verbose wins if both flags are given. RUST_LOG overrides either.
    let level = if cli.verbose {
        "trace"
    } else if cli.quiet {
        "warn"
    } else {
        "debug"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
