//! src/commands/spectrum.rs
//! Exponent pair + attractor type for a single (a, b).

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use crate::cli::RunOpts;
use crate::config::LyapunovConfig;
use crate::core::titan::attractor::{classify_pair, AttractorLabel};
use crate::core::titan::spectrum::CellEstimate;

#[derive(Serialize)]
struct SpectrumReport {
    #[serde(flatten)]
    cell: CellEstimate,
    label: AttractorLabel,
    code: u8,
}

pub fn main(a: f64, b: f64, opts: &RunOpts, config: &LyapunovConfig) -> Result<()> {
    let engine = super::engine(opts, config)?;
    let cell = engine
        .estimate_cell(a, b)
        .with_context(|| format!("Estimate exponents at a={a}, b={b}"))?;
    let label = classify_pair(cell.pair, opts.tolerance(config));

    if opts.json {
        let report = SpectrumReport { cell, label, code: label.code() };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{} a = {a}, b = {b}  ({})", "Hénon".bold(), cell.path);
    match cell.pair {
        Some(p) => {
            println!("  lya_max = {}", super::fmt_exponent(Some(p.max)));
            println!("  lya_min = {}", super::fmt_exponent(Some(p.min)));
        }
        None => println!("  {}", "no stable exponent estimate".yellow()),
    }
    println!("  {} (code {})", super::paint(label), label.code());
    Ok(())
}
