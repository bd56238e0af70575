//! Trazo CLI - figures and animations from DSP measurement CSVs.

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "trazo")]
#[command(author, version, about = "Analysis figures and animations for DSP measurement data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fractional-delay figures, statistics and animation from measurement CSVs
    Fractional(commands::fractional::FractionalArgs),

    /// STFT window analysis figures
    Stft(commands::stft::StftArgs),

    /// Interpolation performance figures
    Perf(commands::perf::PerfArgs),

    /// Synchronize the library version number across source files
    Version(commands::version::VersionArgs),
}

fn main() -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Fractional(args) => commands::fractional::run(args),
        Commands::Stft(args) => commands::stft::run(args),
        Commands::Perf(args) => commands::perf::run(args),
        Commands::Version(args) => commands::version::run(args),
    }
}
