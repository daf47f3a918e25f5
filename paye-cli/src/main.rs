use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use paye_cli::cmd::{GrossCommand, NetCommand};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Ghana monthly income tax (PAYE) estimator.
///
/// Computes progressive income tax on the GRA 2024 monthly schedule, the
/// 5.5% SSNIT contribution, net pay and a bracket breakdown; or solves the
/// inverse problem of finding the basic salary for a desired net pay.
#[derive(Debug, Parser)]
#[command(name = "paye", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute net pay from a gross monthly basic salary.
    Net(NetCommand),

    /// Solve the basic salary required for a desired net pay.
    Gross(GrossCommand),
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Command::Net(cmd) => cmd.exec(),
        Command::Gross(cmd) => cmd.exec(),
    }
}
