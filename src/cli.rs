use anyhow::{bail, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::LyapunovConfig;
use crate::core::titan::spectrum::SpectrumSettings;

#[derive(Debug, Parser)]
#[command(
    name = "henon-lyapunov",
    about = "Lyapunov spectra and attractor types for the Hénon map",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct LyapunovCli {
    /// Global: path to config (TOML); default: ~/.henon-lyapunov/config.toml
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Global: per-cell debug output on stderr (same as HENON_DEBUG=1)
    #[arg(long = "debug", action = ArgAction::SetTrue, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

/// Options shared by the spectrum-producing subcommands. Unset values
/// fall back to the config file.
#[derive(Debug, Clone, Default, Args)]
pub struct RunOpts {
    /// Orbit length per parameter cell
    #[arg(long = "n-init", value_name = "N")]
    pub n_init: Option<usize>,

    /// Transient samples dropped before iterating
    #[arg(long = "cutoff", value_name = "N")]
    pub cutoff: Option<usize>,

    /// Start point as X,Y
    #[arg(long = "start", value_name = "X,Y", value_delimiter = ',', allow_negative_numbers = true)]
    pub start: Option<Vec<f64>>,

    /// Keep iterating escaping orbits instead of reporting divergence
    #[arg(long = "no-diverge", action = ArgAction::SetTrue)]
    pub no_diverge: bool,

    /// Zero-equality band for classification
    #[arg(long = "tolerance", value_name = "T")]
    pub tolerance: Option<f64>,

    /// Emit JSON instead of text
    #[arg(long = "json", action = ArgAction::SetTrue)]
    pub json: bool,
}

impl RunOpts {
    pub fn settings(&self, config: &LyapunovConfig) -> Result<SpectrumSettings> {
        let mut s = config.settings();
        if let Some(n) = self.n_init {
            s.n_init = n;
        }
        if let Some(c) = self.cutoff {
            s.cutoff = c;
        }
        match self.start.as_deref() {
            None => {}
            Some(&[x, y]) => s.start = (x, y),
            Some(other) => bail!("--start takes exactly two values X,Y (got {})", other.len()),
        }
        if self.no_diverge {
            s.diverge = false;
        }
        Ok(s)
    }

    pub fn tolerance(&self, config: &LyapunovConfig) -> f64 {
        self.tolerance.unwrap_or_else(|| config.tolerance())
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Exponent pair and attractor type for one (a, b)
    ///
    /// Examples:
    ///   henon-lyapunov spectrum --a 1.4 --b 0.3
    ///   henon-lyapunov spectrum --a 0.2 --b 0.3 --json
    Spectrum {
        #[arg(long = "a", value_name = "A", allow_negative_numbers = true)]
        a: f64,
        #[arg(long = "b", value_name = "B", allow_negative_numbers = true)]
        b: f64,
        #[command(flatten)]
        opts: RunOpts,
    },

    /// Sweep a and/or b over comma-separated lists
    ///
    /// Examples:
    ///   henon-lyapunov sweep --a 0.2,0.9,1.4 --b 0.3
    ///   henon-lyapunov sweep --a 1.0,1.2,1.4 --b 0.1,0.2,0.3
    Sweep {
        #[arg(long = "a", value_name = "A,..", value_delimiter = ',', required = true, allow_negative_numbers = true)]
        a: Vec<f64>,
        #[arg(long = "b", value_name = "B,..", value_delimiter = ',', required = true, allow_negative_numbers = true)]
        b: Vec<f64>,
        #[command(flatten)]
        opts: RunOpts,
    },

    /// Attractor type for a given exponent pair (LYA1 >= LYA2)
    Classify {
        #[arg(value_name = "LYA1", allow_negative_numbers = true)]
        lya1: f64,
        #[arg(value_name = "LYA2", allow_negative_numbers = true)]
        lya2: f64,
        #[arg(long = "tolerance", value_name = "T")]
        tolerance: Option<f64>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_opts(args: &[&str]) -> RunOpts {
        let argv = ["henon-lyapunov", "spectrum", "--a", "1.4", "--b", "0.3"].iter().chain(args);
        match LyapunovCli::try_parse_from(argv).expect("parse").cmd {
            Command::Spectrum { opts, .. } => opts,
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn start_accepts_comma_pair() {
        let opts = run_opts(&["--start", "0.1,-0.2"]);
        let s = opts.settings(&LyapunovConfig::default()).expect("two values");
        assert_eq!(s.start, (0.1, -0.2));
    }

    #[test]
    fn start_rejects_wrong_arity() {
        let opts = run_opts(&["--start", "0.1,-0.2,0.3"]);
        let err = opts.settings(&LyapunovConfig::default()).unwrap_err();
        assert!(err.to_string().contains("exactly two values"));
    }

    #[test]
    fn flags_override_config() {
        let opts = run_opts(&["--n-init", "500", "--cutoff", "50", "--no-diverge"]);
        let s = opts.settings(&LyapunovConfig::default()).expect("settings");
        assert_eq!((s.n_init, s.cutoff, s.diverge, s.start), (500, 50, false, (0.0, 0.0)));
    }
}
