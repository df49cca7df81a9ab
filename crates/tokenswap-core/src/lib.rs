//! # Tokenswap Core
//!
//! Price-deduplication and currency-conversion pipeline.
//!
//! ## Overview
//!
//! ```text
//! ┌─────────────┐   ┌──────────────┐   ┌───────────────┐   ┌──────────────┐
//! │ Price feed  │──▶│ decode_feed  │──▶│ PriceCatalog  │──▶│   convert    │
//! │ (HTTP GET)  │   │ (per record) │   │ (latest/inst) │   │ (price ratio)│
//! └─────────────┘   └──────┬───────┘   └───────────────┘   └──────┬───────┘
//!                          │                                      │
//!                          ▼                                      ▼
//!                   DecodeError (dropped)            ConversionResult / ConversionError
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`catalog`] | Deduplicated most-recent price per instrument |
//! | [`conversion`] | Conversion through the reference denomination |
//! | [`domain`] | Instrument, timestamp and observation types |
//! | [`error`] | Error taxonomy |
//! | [`feed`] | Feed configuration, fetch and decoding |
//! | [`http_client`] | HTTP transport seam |
//! | [`sum_to_n`] | Three implementations of `1 + 2 + ... + n` |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tokenswap_core::{convert, FeedConfig, PriceFeed};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let feed = PriceFeed::new(FeedConfig::from_env());
//!     let catalog = feed.fetch_catalog().await?;
//!
//!     let result = convert(&catalog, "ETH", "USDC", 2.0)?;
//!     println!("{} {}", result.format_amount(6), result.to);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! ```rust
//! use tokenswap_core::ConversionError;
//!
//! fn describe(error: &ConversionError) -> &'static str {
//!     match error {
//!         ConversionError::UnknownInstrument { .. } => "unknown instrument",
//!         ConversionError::InvalidAmount { .. } => "invalid amount",
//!         ConversionError::InvalidPrice { .. } | ConversionError::Overflow { .. } => {
//!             "price data cannot be used"
//!         }
//!     }
//! }
//! ```

pub mod catalog;
pub mod conversion;
pub mod domain;
pub mod error;
pub mod feed;
pub mod http_client;
pub mod sum_to_n;

pub use catalog::{PriceCatalog, DEFAULT_DENOMINATION};

pub use conversion::{convert, ConversionRequest, ConversionResult};

pub use domain::{Instrument, PriceObservation, RawPriceRecord, UtcDateTime};

pub use error::{
    ConversionError, DecodeError, DecodeReason, FeedError, FeedErrorKind, SumError,
    ValidationError,
};

pub use feed::{
    decode_feed, DecodedFeed, FeedConfig, PriceFeed, DEFAULT_FEED_URL, DEFAULT_TIMEOUT_MS,
    FEED_URL_ENV,
};

pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient, StaticHttpClient,
};

pub use sum_to_n::{sum_to_n, sum_to_n_fold, sum_to_n_formula, sum_to_n_loop, SumToN};
