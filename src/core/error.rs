//! Centralised error types used across the crate.

use std::{error::Error, fmt, io};

use crate::core::table::LoadError;

/// Precise configuration faults.
#[derive(Debug)]
pub enum ConfigError {
    CanvasTooSmall {
        want_w: usize,
        want_h: usize,
        got_w: usize,
        got_h: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::CanvasTooSmall {
                want_w,
                want_h,
                got_w,
                got_h,
            } => write!(
                f,
                "canvas too small: need ≥{want_w}×{want_h}, got {got_w}×{got_h}"
            ),
        }
    }
}
impl Error for ConfigError {}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug)]
pub enum PlotError {
    Io(io::Error),
    /// A file failed to load; `label` is the file as named on the command
    /// line.
    Load {
        label: String,
        err: LoadError,
    },
    Config(ConfigError),
    /// The table lacks the two columns needed to derive any series.
    /// Fatal for the whole batch, not merely the offending file.
    CorruptedData {
        label: String,
    },
    MissingInput,
}

impl fmt::Display for PlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlotError::Io(e) => write!(f, "{e}"),
            PlotError::Load { label, err } => write!(f, "{label}: {err}"),
            PlotError::Config(e) => write!(f, "{e}"),
            PlotError::CorruptedData { label } => write!(f, "corrupted data in {label}"),
            PlotError::MissingInput => write!(f, "Missing input file(s)!"),
        }
    }
}
impl Error for PlotError {}

// automatic conversions
impl From<io::Error> for PlotError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<ConfigError> for PlotError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
