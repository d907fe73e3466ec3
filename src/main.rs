/// henon-lyapunov: exponent spectra, sweeps and attractor types from the command line.
use clap::Parser; // trait import enables LyapunovCli::parse()

use henon_lyapunov::cli::{Command, LyapunovCli};
use henon_lyapunov::commands;
use henon_lyapunov::config::LyapunovConfig;
use henon_lyapunov::core::debug;

fn main() -> anyhow::Result<()> {
    let args = LyapunovCli::parse();

    if args.debug {
        debug::set_enabled(true);
    }

    let config = LyapunovConfig::load(&args.config)?;

    match args.cmd {
        Command::Spectrum { a, b, opts } => commands::spectrum::main(a, b, &opts, &config),
        Command::Sweep { a, b, opts } => commands::sweep::main(a, b, &opts, &config),
        Command::Classify { lya1, lya2, tolerance } => commands::classify::main(lya1, lya2, tolerance, &config),
    }
}
