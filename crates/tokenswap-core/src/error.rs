use std::fmt::{Display, Formatter};

use thiserror::Error;

/// Validation errors raised while constructing domain values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("instrument cannot be empty")]
    EmptyInstrument,

    #[error("timestamp must be RFC3339/ISO-8601 with an offset: '{value}'")]
    InvalidTimestamp { value: String },

    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },

    #[error("field '{field}' must be greater than zero")]
    NonPositiveValue { field: &'static str },
}

/// Why a single feed record was rejected.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DecodeReason {
    #[error("record does not match the feed shape: {message}")]
    Shape { message: String },
    #[error("currency is empty")]
    EmptyInstrument,
    #[error("date '{value}' is not an ISO-8601 timestamp")]
    InvalidTimestamp { value: String },
    #[error("price is not a finite number")]
    NonFinitePrice,
    #[error("price {price} is not greater than zero")]
    NonPositivePrice { price: f64 },
}

/// Malformed feed record. Dropped at ingestion; never aborts a decode.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("feed record #{index} rejected: {reason}")]
pub struct DecodeError {
    pub index: usize,
    pub reason: DecodeReason,
}

impl DecodeError {
    pub fn new(index: usize, reason: DecodeReason) -> Self {
        Self { index, reason }
    }
}

/// Feed-level failure classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedErrorKind {
    Transport,
    Status,
    Timeout,
    Parse,
}

/// The price feed could not be fetched or read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedError {
    kind: FeedErrorKind,
    message: String,
}

impl FeedError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: FeedErrorKind::Transport,
            message: message.into(),
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            kind: FeedErrorKind::Status,
            message: format!("feed returned status {status}"),
        }
    }

    pub fn timeout(timeout_ms: u64) -> Self {
        Self {
            kind: FeedErrorKind::Timeout,
            message: format!("feed did not respond within {timeout_ms}ms"),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self {
            kind: FeedErrorKind::Parse,
            message: message.into(),
        }
    }

    pub const fn kind(&self) -> FeedErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Every feed failure may succeed on a later attempt. Retrying is up to the caller.
    pub const fn retryable(&self) -> bool {
        true
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            FeedErrorKind::Transport => "feed.transport",
            FeedErrorKind::Status => "feed.status",
            FeedErrorKind::Timeout => "feed.timeout",
            FeedErrorKind::Parse => "feed.parse",
        }
    }
}

impl Display for FeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "feed unavailable: {} ({})", self.message, self.code())
    }
}

impl std::error::Error for FeedError {}

/// Outcome of a conversion that could not be computed.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConversionError {
    #[error("unknown instrument '{instrument}'")]
    UnknownInstrument { instrument: String },

    #[error("invalid amount {amount}: must be a finite number greater than zero")]
    InvalidAmount { amount: f64 },

    #[error("invalid price {price} stored for '{instrument}'")]
    InvalidPrice { instrument: String, price: f64 },

    #[error("converting {amount} '{from}' to '{to}' does not produce a finite amount")]
    Overflow {
        from: String,
        to: String,
        amount: f64,
    },
}

/// Failures of the sum-to-n exercise.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SumError {
    #[error("n must be a positive integer")]
    NotPositive,
    #[error("sum implementations disagree: formula={formula}, fold={fold}, loop={looped}")]
    Disagreement { formula: u64, fold: u64, looped: u64 },
}
