use serde::{Deserialize, Serialize};

use crate::{DecodeReason, Instrument, UtcDateTime, ValidationError};

/// One reported price for an instrument at a point in time.
///
/// Prices are expressed in the catalog's reference denomination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceObservation {
    pub(crate) instrument: Instrument,
    pub(crate) observed_at: UtcDateTime,
    pub(crate) price: f64,
}

impl PriceObservation {
    pub fn new(
        instrument: Instrument,
        observed_at: UtcDateTime,
        price: f64,
    ) -> Result<Self, ValidationError> {
        validate_positive("price", price)?;

        Ok(Self {
            instrument,
            observed_at,
            price,
        })
    }

    pub fn instrument(&self) -> &Instrument {
        &self.instrument
    }

    pub const fn observed_at(&self) -> UtcDateTime {
        self.observed_at
    }

    pub const fn price(&self) -> f64 {
        self.price
    }
}

/// Wire shape of a single feed record: `{"currency", "date", "price"}`.
///
/// Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawPriceRecord {
    pub currency: String,
    pub date: String,
    pub price: f64,
}

impl RawPriceRecord {
    pub fn into_observation(self) -> Result<PriceObservation, DecodeReason> {
        let instrument =
            Instrument::parse(&self.currency).map_err(|_| DecodeReason::EmptyInstrument)?;
        let observed_at = UtcDateTime::parse(&self.date)
            .map_err(|_| DecodeReason::InvalidTimestamp { value: self.date })?;

        PriceObservation::new(instrument, observed_at, self.price).map_err(|error| match error {
            ValidationError::NonFiniteValue { .. } => DecodeReason::NonFinitePrice,
            _ => DecodeReason::NonPositivePrice { price: self.price },
        })
    }
}

pub(crate) fn validate_positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    if value <= 0.0 {
        return Err(ValidationError::NonPositiveValue { field });
    }
    Ok(())
}
