//! Run configuration: built-in defaults + optional TOML file.
//!
//! - `LyapunovConfig::default()` → the classical settings (10k samples, 1k transient)
//! - `LyapunovConfig::from_toml_file(path)` → load a user file (must exist)
//! - `LyapunovConfig::from_user_default_or_builtin()` → ~/.henon-lyapunov/config.toml if present

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::core::error::LyapunovError;
use crate::core::titan::attractor::DEFAULT_TOLERANCE;
use crate::core::titan::henon::{HenonMap, DEFAULT_DIVERGENCE_THRESHOLD};
use crate::core::titan::orbit_analysis::{RecurrenceDetector, DEFAULT_MAX_PERIOD, DEFAULT_RECURRENCE_TOLERANCE};
use crate::core::titan::spectrum::SpectrumSettings;

pub fn default_config_path() -> Option<PathBuf> {
    // ~/.henon-lyapunov/config.toml
    dirs_next::home_dir().map(|h| h.join(".henon-lyapunov").join("config.toml"))
}

// ----- Config TOML -----

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SpectrumSection {
    pub n_init: usize,
    pub cutoff: usize,
    pub start: (f64, f64),
    pub diverge: bool,
}

impl Default for SpectrumSection {
    fn default() -> Self {
        let s = SpectrumSettings::default();
        Self { n_init: s.n_init, cutoff: s.cutoff, start: s.start, diverge: s.diverge }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OrbitSection {
    pub divergence_threshold: f64,
    pub recurrence_tolerance: f64,
    pub max_period: usize,
}

impl Default for OrbitSection {
    fn default() -> Self {
        Self {
            divergence_threshold: DEFAULT_DIVERGENCE_THRESHOLD,
            recurrence_tolerance: DEFAULT_RECURRENCE_TOLERANCE,
            max_period: DEFAULT_MAX_PERIOD,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ClassifySection {
    pub tolerance: f64,
}

impl Default for ClassifySection {
    fn default() -> Self {
        Self { tolerance: DEFAULT_TOLERANCE }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LyapunovConfig {
    pub spectrum: SpectrumSection,
    pub orbit: OrbitSection,
    pub classify: ClassifySection,
}

impl LyapunovConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, LyapunovError> {
        let cfg: LyapunovConfig = toml::from_str(text).map_err(|e| LyapunovError::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).with_context(|| format!("Read config {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("Parse config {}", path.display()))
    }

    /// An explicit path must exist; the default location is optional.
    pub fn load(cli_path: &Option<PathBuf>) -> Result<Self> {
        match cli_path {
            Some(p) => Self::from_toml_file(p),
            None => Self::from_user_default_or_builtin(),
        }
    }

    pub fn from_user_default_or_builtin() -> Result<Self> {
        match default_config_path() {
            Some(p) if p.exists() => Self::from_toml_file(&p),
            _ => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<(), LyapunovError> {
        self.settings().validate()?;
        if !(self.orbit.divergence_threshold > 0.0) {
            return Err(LyapunovError::config("orbit.divergence_threshold must be positive"));
        }
        if !(self.orbit.recurrence_tolerance > 0.0) {
            return Err(LyapunovError::config("orbit.recurrence_tolerance must be positive"));
        }
        if !(self.classify.tolerance >= 0.0) {
            return Err(LyapunovError::config("classify.tolerance must be non-negative"));
        }
        Ok(())
    }

    pub fn settings(&self) -> SpectrumSettings {
        let s = &self.spectrum;
        SpectrumSettings { n_init: s.n_init, cutoff: s.cutoff, start: s.start, diverge: s.diverge }
    }

    pub fn henon(&self) -> HenonMap {
        HenonMap::new(self.orbit.divergence_threshold)
    }

    pub fn detector(&self) -> RecurrenceDetector {
        RecurrenceDetector::new(self.orbit.recurrence_tolerance, self.orbit.max_period)
    }

    pub fn tolerance(&self) -> f64 {
        self.classify.tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let cfg = LyapunovConfig::from_toml_str("").expect("empty config");
        assert_eq!(cfg, LyapunovConfig::default());
        assert_eq!(cfg.settings(), SpectrumSettings::default());
        assert_eq!(cfg.tolerance(), 0.1);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let cfg = LyapunovConfig::from_toml_str(
            "[spectrum]\nn_init = 2000\nstart = [0.1, -0.1]\n\n[orbit]\nmax_period = 16\n",
        )
        .expect("partial config");
        assert_eq!(cfg.spectrum.n_init, 2000);
        assert_eq!(cfg.spectrum.cutoff, 1000);
        assert_eq!(cfg.spectrum.start, (0.1, -0.1));
        assert_eq!(cfg.detector().max_period, 16);
        assert_eq!(cfg.henon().divergence_threshold, 1e5);
    }

    #[test]
    fn inconsistent_cutoff_rejected() {
        let err = LyapunovConfig::from_toml_str("[spectrum]\nn_init = 100\ncutoff = 100\n").unwrap_err();
        assert!(matches!(err, LyapunovError::InvalidParameter(_)));
    }

    #[test]
    fn unknown_keys_rejected() {
        let err = LyapunovConfig::from_toml_str("[classify]\ntolerence = 0.2\n").unwrap_err();
        assert!(matches!(err, LyapunovError::Config(_)));
    }

    #[test]
    fn file_roundtrip_and_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[classify]\ntolerance = 0.05\n").unwrap();
        let cfg = LyapunovConfig::load(&Some(path)).expect("config file");
        assert_eq!(cfg.tolerance(), 0.05);

        let missing = dir.path().join("nope.toml");
        assert!(LyapunovConfig::load(&Some(missing)).is_err());
    }
}
