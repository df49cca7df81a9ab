//! Price feed fetch and decoding.
//!
//! The feed is a JSON array of records shaped like
//! `{"currency": "ETH", "date": "2023-08-29T07:10:40.000Z", "price": 1645.93}`.
//! Each record is decoded on its own: a malformed record becomes a
//! [`DecodeError`] and is dropped, the rest of the feed still loads.
//!
//! # Outcomes of a fetch
//!
//! | Outcome | Result |
//! |---------|--------|
//! | 2xx with a JSON array | [`DecodedFeed`] |
//! | transport failure | [`FeedError`] (`feed.transport`) |
//! | non-2xx status | [`FeedError`] (`feed.status`) |
//! | deadline exceeded | [`FeedError`] (`feed.timeout`) |
//! | body is not a JSON array | [`FeedError`] (`feed.parse`) |
//!
//! The core never retries; every [`FeedError`] is handed to the caller.

use std::sync::Arc;
use std::time::Duration;

use serde_json::value::RawValue;

use crate::catalog::DEFAULT_DENOMINATION;
use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient};
use crate::{DecodeError, DecodeReason, FeedError, PriceCatalog, PriceObservation, RawPriceRecord};

/// Default location of the price feed.
pub const DEFAULT_FEED_URL: &str = "https://interview.switcheo.com/prices.json";
/// Environment variable overriding [`DEFAULT_FEED_URL`].
pub const FEED_URL_ENV: &str = "TOKENSWAP_FEED_URL";
pub const DEFAULT_TIMEOUT_MS: u64 = 3_000;

/// Where and how to read the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    pub url: String,
    pub timeout_ms: u64,
    /// Unit the feed's prices are quoted in.
    pub denomination: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: String::from(DEFAULT_FEED_URL),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            denomination: String::from(DEFAULT_DENOMINATION),
        }
    }
}

impl FeedConfig {
    /// Defaults, with the URL taken from `TOKENSWAP_FEED_URL` when it is set and non-empty.
    pub fn from_env() -> Self {
        let url = std::env::var(FEED_URL_ENV)
            .ok()
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| String::from(DEFAULT_FEED_URL));

        Self {
            url,
            ..Self::default()
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_denomination(mut self, denomination: impl Into<String>) -> Self {
        self.denomination = denomination.into();
        self
    }
}

/// Records that survived decoding, plus the ones that did not.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DecodedFeed {
    pub observations: Vec<PriceObservation>,
    pub rejected: Vec<DecodeError>,
}

impl DecodedFeed {
    pub fn into_catalog(self, denomination: impl Into<String>) -> PriceCatalog {
        PriceCatalog::build_with_denomination(denomination, self.observations)
    }
}

/// Decode a feed body. Fails only when the body is not a JSON array.
pub fn decode_feed(body: &str) -> Result<DecodedFeed, FeedError> {
    let records: Vec<Box<RawValue>> = serde_json::from_str(body)
        .map_err(|error| FeedError::parse(format!("feed body is not a JSON array: {error}")))?;

    let mut decoded = DecodedFeed {
        observations: Vec::with_capacity(records.len()),
        rejected: Vec::new(),
    };

    for (index, record) in records.into_iter().enumerate() {
        match decode_record(&record) {
            Ok(observation) => decoded.observations.push(observation),
            Err(reason) => decoded.rejected.push(DecodeError::new(index, reason)),
        }
    }

    Ok(decoded)
}

fn decode_record(record: &RawValue) -> Result<PriceObservation, DecodeReason> {
    let raw: RawPriceRecord =
        serde_json::from_str(record.get()).map_err(|error| DecodeReason::Shape {
            message: error.to_string(),
        })?;
    raw.into_observation()
}

/// One-shot reader of the price feed.
#[derive(Clone)]
pub struct PriceFeed {
    config: FeedConfig,
    http_client: Arc<dyn HttpClient>,
}

impl PriceFeed {
    pub fn new(config: FeedConfig) -> Self {
        Self::with_http_client(config, Arc::new(ReqwestHttpClient::default()))
    }

    pub fn with_http_client(config: FeedConfig, http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            config,
            http_client,
        }
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    /// Fetch and decode the feed once.
    pub async fn fetch(&self) -> Result<DecodedFeed, FeedError> {
        let timeout_ms = self.config.timeout_ms;
        let request = HttpRequest::get(&self.config.url)
            .with_header("accept", "application/json")
            .with_timeout_ms(timeout_ms);

        tracing::debug!(url = %self.config.url, timeout_ms, "fetching price feed");

        let response = tokio::time::timeout(
            Duration::from_millis(timeout_ms),
            self.http_client.execute(request),
        )
        .await
        .map_err(|_| FeedError::timeout(timeout_ms))?
        .map_err(|error| {
            if error.is_timeout() {
                FeedError::timeout(timeout_ms)
            } else {
                FeedError::transport(error.message())
            }
        })?;

        if !response.is_success() {
            return Err(FeedError::status(response.status));
        }

        decode_feed(&response.body)
    }

    /// Fetch the feed and build a fresh catalog from it.
    ///
    /// Rejected records are logged and otherwise dropped.
    pub async fn fetch_catalog(&self) -> Result<PriceCatalog, FeedError> {
        let decoded = match self.fetch().await {
            Ok(decoded) => decoded,
            Err(error) => {
                tracing::warn!(url = %self.config.url, code = error.code(), "{}", error.message());
                return Err(error);
            }
        };

        for rejected in &decoded.rejected {
            tracing::warn!(index = rejected.index, "dropping feed record: {}", rejected.reason);
        }
        tracing::info!(
            accepted = decoded.observations.len(),
            rejected = decoded.rejected.len(),
            "price feed loaded"
        );

        Ok(decoded.into_catalog(self.config.denomination.clone()))
    }
}
