//! src/commands/classify.rs
//! Attractor type for a user-supplied exponent pair.

use anyhow::Result;
use colored::Colorize;

use crate::config::LyapunovConfig;
use crate::core::titan::attractor::classify;

pub fn main(lya1: f64, lya2: f64, tolerance: Option<f64>, config: &LyapunovConfig) -> Result<()> {
    let tolerance = tolerance.unwrap_or_else(|| config.tolerance());
    if lya1 < lya2 {
        eprintln!("{}", "warn: LYA1 < LYA2; exponents are expected largest first".yellow());
    }
    let label = classify(Some(lya1), Some(lya2), tolerance);
    println!("{} (code {})", super::paint(label), label.code());
    Ok(())
}
