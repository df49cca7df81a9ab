//! Deduplicated most-recent-price-per-instrument lookup table.
//!
//! A [`PriceCatalog`] is built once from a batch of observations and never
//! patched afterwards; a newer feed produces a new catalog.
//!
//! ```rust
//! use tokenswap_core::{Instrument, PriceCatalog, PriceObservation, UtcDateTime};
//!
//! let observe = |symbol: &str, date: &str, price: f64| {
//!     PriceObservation::new(
//!         Instrument::parse(symbol).unwrap(),
//!         UtcDateTime::parse(date).unwrap(),
//!         price,
//!     )
//!     .unwrap()
//! };
//!
//! let catalog = PriceCatalog::build(vec![
//!     observe("BTC", "2024-01-02T00:00:00Z", 110.0),
//!     observe("BTC", "2024-01-01T00:00:00Z", 100.0),
//! ]);
//!
//! assert_eq!(catalog.lookup("BTC"), Some(110.0));
//! assert_eq!(catalog.lookup("DOGE"), None);
//! ```

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::{Instrument, PriceObservation};

/// Reference denomination used when none is given.
pub const DEFAULT_DENOMINATION: &str = "USD";

/// One observation per instrument, each the most recent one received.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceCatalog {
    denomination: String,
    entries: HashMap<Instrument, PriceObservation>,
}

impl PriceCatalog {
    /// Build a catalog whose prices are denominated in [`DEFAULT_DENOMINATION`].
    pub fn build<I>(observations: I) -> Self
    where
        I: IntoIterator<Item = PriceObservation>,
    {
        Self::build_with_denomination(DEFAULT_DENOMINATION, observations)
    }

    /// Build a catalog in a single pass over `observations`.
    ///
    /// A later observation replaces the stored one when its timestamp is
    /// greater than or equal to it, so exact ties go to the last one seen.
    pub fn build_with_denomination<I>(denomination: impl Into<String>, observations: I) -> Self
    where
        I: IntoIterator<Item = PriceObservation>,
    {
        let mut entries: HashMap<Instrument, PriceObservation> = HashMap::new();
        let mut seen = 0usize;

        for observation in observations {
            seen += 1;
            match entries.entry(observation.instrument.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(observation);
                }
                Entry::Occupied(mut slot) => {
                    if observation.observed_at >= slot.get().observed_at {
                        slot.insert(observation);
                    }
                }
            }
        }

        let catalog = Self {
            denomination: denomination.into(),
            entries,
        };
        tracing::debug!(
            observations = seen,
            instruments = catalog.len(),
            denomination = %catalog.denomination,
            "price catalog built"
        );
        catalog
    }

    /// Stored price for `instrument`, or `None` when the instrument is unknown.
    pub fn lookup(&self, instrument: &str) -> Option<f64> {
        self.entries.get(instrument).map(PriceObservation::price)
    }

    pub fn get(&self, instrument: &str) -> Option<&PriceObservation> {
        self.entries.get(instrument)
    }

    pub fn contains(&self, instrument: &str) -> bool {
        self.entries.contains_key(instrument)
    }

    /// Unit every stored price is expressed in.
    pub fn denomination(&self) -> &str {
        &self.denomination
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Known instruments, sorted.
    pub fn instruments(&self) -> Vec<&Instrument> {
        let mut instruments: Vec<_> = self.entries.keys().collect();
        instruments.sort();
        instruments
    }

    /// Retained observations sorted by instrument.
    pub fn observations(&self) -> Vec<&PriceObservation> {
        let mut observations: Vec<_> = self.entries.values().collect();
        observations.sort_by(|left, right| left.instrument.cmp(&right.instrument));
        observations
    }
}

impl FromIterator<PriceObservation> for PriceCatalog {
    fn from_iter<T: IntoIterator<Item = PriceObservation>>(iter: T) -> Self {
        Self::build(iter)
    }
}
