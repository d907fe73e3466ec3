use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum LyapunovError {
    /// A propagated tangent vector collapsed (zero or non-finite squared norm).
    DegenerateCocycle { step: usize },
    InvalidParameter(String),
    Config(String),
}

impl fmt::Display for LyapunovError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LyapunovError::DegenerateCocycle { step } => {
                write!(f, "Degenerate cocycle: tangent vector collapsed at step {}", step)
            }
            LyapunovError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            LyapunovError::Config(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for LyapunovError {}

impl LyapunovError {
    pub fn degenerate(step: usize) -> Self { LyapunovError::DegenerateCocycle { step } }
    pub fn invalid_parameter(message: &str) -> Self { LyapunovError::InvalidParameter(message.to_string()) }
    pub fn config(message: &str) -> Self { LyapunovError::Config(message.to_string()) }
}
