use thiserror::Error;
use tokenswap_core::{ConversionError, FeedError, SumError, ValidationError};

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error("{0}; please try again later")]
    Feed(#[from] FeedError),

    #[error(transparent)]
    Sum(#[from] SumError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Conversion(ConversionError::InvalidAmount { .. }) => 2,
            Self::Conversion(ConversionError::UnknownInstrument { .. }) => 3,
            Self::Conversion(ConversionError::InvalidPrice { .. })
            | Self::Conversion(ConversionError::Overflow { .. }) => 7,
            Self::Sum(SumError::NotPositive) => 2,
            Self::Sum(SumError::Disagreement { .. }) => 7,
            Self::Serialization(_) => 4,
            Self::Feed(_) => 6,
            Self::Io(_) => 10,
        }
    }
}
