pub mod classify;
pub mod spectrum;
pub mod sweep;

use anyhow::{Context, Result};
use colored::{ColoredString, Colorize};

use crate::cli::RunOpts;
use crate::config::LyapunovConfig;
use crate::core::titan::attractor::AttractorLabel;
use crate::core::titan::henon::HenonMap;
use crate::core::titan::orbit_analysis::RecurrenceDetector;
use crate::core::titan::spectrum::SpectrumEngine;

pub(crate) fn engine(opts: &RunOpts, config: &LyapunovConfig) -> Result<SpectrumEngine<HenonMap, RecurrenceDetector, HenonMap>> {
    let settings = opts.settings(config)?;
    SpectrumEngine::new(config.henon(), config.detector(), config.henon(), settings)
        .context("Invalid run settings")
}

pub(crate) fn paint(label: AttractorLabel) -> ColoredString {
    let text = label.to_string();
    match label {
        AttractorLabel::PointAttractor(_) => text.green(),
        AttractorLabel::InvariantCircle => text.cyan(),
        AttractorLabel::ChaoticAttractor(_) => text.red().bold(),
        AttractorLabel::NoAttractor => text.dimmed(),
    }
}

pub(crate) fn fmt_exponent(v: Option<f64>) -> String {
    match v {
        Some(x) => format!("{x:.4}"),
        None => "-".to_string(),
    }
}
