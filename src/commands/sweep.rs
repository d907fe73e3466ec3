//! src/commands/sweep.rs
//! Parameter sweeps: a table for one swept parameter, a label grid for two.

use anyhow::{Context, Result};

use crate::cli::RunOpts;
use crate::config::LyapunovConfig;
use crate::core::titan::attractor::{classify, AttractorLabel};
use crate::core::titan::spectrum::{ScalarOrSweep, SpectrumOutput};

use super::fmt_exponent;

fn to_param(values: &[f64]) -> ScalarOrSweep {
    match values {
        [v] => ScalarOrSweep::Scalar(*v),
        vs => ScalarOrSweep::Sweep(vs.to_vec()),
    }
}

pub fn main(a: Vec<f64>, b: Vec<f64>, opts: &RunOpts, config: &LyapunovConfig) -> Result<()> {
    let tolerance = opts.tolerance(config);
    let engine = super::engine(opts, config)?;
    let output = engine
        .compute_for_map(&to_param(&a), &to_param(&b))
        .context("Sweep parameters")?;

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    match &output {
        SpectrumOutput::Single(pair) => {
            let (max, min) = (pair.map(|p| p.max), pair.map(|p| p.min));
            print!("{}", render_line("a", &a, &[max], &[min], tolerance));
        }
        SpectrumOutput::Line { max, min } => {
            let (name, values) = if a.len() > 1 { ("a", &a) } else { ("b", &b) };
            print!("{}", render_line(name, values, max, min, tolerance));
        }
        SpectrumOutput::Grid { max, min } => {
            let labels: Vec<Vec<AttractorLabel>> = max
                .iter()
                .zip(min)
                .map(|(rmax, rmin)| rmax.iter().zip(rmin).map(|(&l1, &l2)| classify(l1, l2, tolerance)).collect())
                .collect();
            print!("{}", render_grid(&a, &b, &labels));
        }
    }
    Ok(())
}

/// One row per swept value: exponents and attractor type.
pub fn render_line(name: &str, values: &[f64], max: &[Option<f64>], min: &[Option<f64>], tolerance: f64) -> String {
    let mut out = format!("{:>8}  {:>10}  {:>10}  {}\n", name, "lya_max", "lya_min", "attractor");
    for ((v, &l1), &l2) in values.iter().zip(max).zip(min) {
        let label = classify(l1, l2, tolerance);
        out.push_str(&format!("{:>8}  {:>10}  {:>10}  {}\n", v, fmt_exponent(l1), fmt_exponent(l2), label));
    }
    out
}

/// Label codes laid out `[a][b]`, followed by the code legend.
pub fn render_grid(a_values: &[f64], b_values: &[f64], labels: &[Vec<AttractorLabel>]) -> String {
    let mut out = format!("{:>8}", "a \\ b");
    for b in b_values {
        out.push_str(&format!(" {:>6}", b));
    }
    out.push('\n');
    for (a, row) in a_values.iter().zip(labels) {
        out.push_str(&format!("{:>8}", a));
        for label in row {
            out.push_str(&format!(" {:>6}", label.code()));
        }
        out.push('\n');
    }
    for label in AttractorLabel::ALL {
        out.push_str(&format!("  {} = {}\n", label.code(), label));
    }
    out
}
