use std::fmt;
use thiserror::Error;

/// The abstract steps a data miner has to supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinerStep {
    Open,
    Extract,
    Close,
}

impl fmt::Display for MinerStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinerStep::Open => write!(f, "open_file"),
            MinerStep::Extract => write!(f, "extract_data"),
            MinerStep::Close => write!(f, "close_file"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("Miner '{variant}' does not implement required step '{step}'")]
    NotImplemented { variant: String, step: MinerStep },

    #[error("Cannot open an empty source path")]
    EmptySource,
}

impl PatternError {
    pub fn not_implemented(variant: impl Into<String>, step: MinerStep) -> Self {
        Self::NotImplemented {
            variant: variant.into(),
            step,
        }
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;
