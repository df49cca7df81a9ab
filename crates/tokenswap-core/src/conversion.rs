//! Cross-instrument conversion through the catalog's reference denomination.
//!
//! Every catalog price is quoted in the same unit, so converting `from` into
//! `to` only needs the ratio of their two prices; no pairwise rate table exists.

use serde::Serialize;

use crate::domain::validate_positive;
use crate::{ConversionError, Instrument, PriceCatalog};

/// Validated conversion input.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub from: Instrument,
    pub to: Instrument,
    pub amount: f64,
}

impl ConversionRequest {
    pub fn new(from: Instrument, to: Instrument, amount: f64) -> Result<Self, ConversionError> {
        validate_amount(amount)?;
        Ok(Self { from, to, amount })
    }

    pub fn convert(&self, catalog: &PriceCatalog) -> Result<ConversionResult, ConversionError> {
        convert(catalog, self.from.as_str(), self.to.as_str(), self.amount)
    }
}

/// Converted amount plus the inputs needed to explain it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionResult {
    pub from: Instrument,
    pub to: Instrument,
    pub amount_in: f64,
    /// Units of `to` per unit of `from`.
    pub rate: f64,
    pub amount: f64,
}

impl ConversionResult {
    /// Amount rendered with a fixed number of decimal places.
    pub fn format_amount(&self, decimals: usize) -> String {
        format!("{:.*}", decimals, self.amount)
    }
}

/// How much of `to` one receives for `amount` of `from`.
///
/// The amount is validated before either instrument is looked up, and `from`
/// is looked up before `to`.
pub fn convert(
    catalog: &PriceCatalog,
    from: &str,
    to: &str,
    amount: f64,
) -> Result<ConversionResult, ConversionError> {
    validate_amount(amount)?;

    let from_observation = catalog
        .get(from)
        .ok_or_else(|| ConversionError::UnknownInstrument {
            instrument: from.to_owned(),
        })?;
    let to_observation = catalog
        .get(to)
        .ok_or_else(|| ConversionError::UnknownInstrument {
            instrument: to.to_owned(),
        })?;

    let from_price = checked_price(from_observation.instrument(), from_observation.price())?;
    let to_price = checked_price(to_observation.instrument(), to_observation.price())?;

    // Ratio first: identical prices give a rate of exactly 1.
    let rate = from_price / to_price;
    let converted = amount * rate;
    if !rate.is_finite() || !converted.is_finite() {
        return Err(ConversionError::Overflow {
            from: from.to_owned(),
            to: to.to_owned(),
            amount,
        });
    }

    Ok(ConversionResult {
        from: from_observation.instrument().clone(),
        to: to_observation.instrument().clone(),
        amount_in: amount,
        rate,
        amount: converted,
    })
}

fn validate_amount(amount: f64) -> Result<(), ConversionError> {
    validate_positive("amount", amount).map_err(|_| ConversionError::InvalidAmount { amount })
}

fn checked_price(instrument: &Instrument, price: f64) -> Result<f64, ConversionError> {
    validate_positive("price", price).map_err(|_| ConversionError::InvalidPrice {
        instrument: instrument.to_string(),
        price,
    })?;
    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PriceObservation, UtcDateTime};

    fn catalog(prices: &[(&str, f64)]) -> PriceCatalog {
        let ts = UtcDateTime::parse("2024-01-01T00:00:00Z").expect("timestamp");
        PriceCatalog::build(prices.iter().map(|(instrument, price)| {
            PriceObservation::new(Instrument::parse(instrument).expect("instrument"), ts, *price)
                .expect("observation")
        }))
    }

    // Bypasses validation to model a corrupted catalog entry.
    fn catalog_with_raw_price(instrument: &str, price: f64) -> PriceCatalog {
        let ts = UtcDateTime::parse("2024-01-01T00:00:00Z").expect("timestamp");
        let good = PriceObservation::new(Instrument::parse("USD").expect("instrument"), ts, 1.0)
            .expect("observation");
        let bad = PriceObservation {
            instrument: Instrument::parse(instrument).expect("instrument"),
            observed_at: ts,
            price,
        };
        PriceCatalog::build(vec![good, bad])
    }

    #[test]
    fn converts_through_reference_prices() {
        let catalog = catalog(&[("USD", 1.0), ("ETH", 3000.0)]);

        let result = convert(&catalog, "ETH", "USD", 2.0).expect("conversion");
        assert_eq!(result.amount, 6000.0);
        assert_eq!(result.rate, 3000.0);
        assert_eq!(result.to.as_str(), "USD");
        assert_eq!(result.format_amount(6), "6000.000000");
    }

    #[test]
    fn amount_is_checked_before_instruments() {
        let catalog = catalog(&[("USD", 1.0)]);

        let err = convert(&catalog, "XYZ", "USD", f64::NAN).expect_err("must fail");
        assert!(matches!(err, ConversionError::InvalidAmount { .. }));
    }

    #[test]
    fn reports_source_before_target_when_both_unknown() {
        let catalog = catalog(&[("USD", 1.0)]);

        let err = convert(&catalog, "AAA", "BBB", 1.0).expect_err("must fail");
        assert_eq!(
            err,
            ConversionError::UnknownInstrument {
                instrument: String::from("AAA")
            }
        );
    }

    #[test]
    fn zero_target_price_is_rejected_instead_of_dividing() {
        let catalog = catalog_with_raw_price("BAD", 0.0);

        let err = convert(&catalog, "USD", "BAD", 1.0).expect_err("must fail");
        assert_eq!(
            err,
            ConversionError::InvalidPrice {
                instrument: String::from("BAD"),
                price: 0.0
            }
        );
    }

    #[test]
    fn negative_source_price_is_rejected() {
        let catalog = catalog_with_raw_price("BAD", -2.0);

        let err = convert(&catalog, "BAD", "USD", 1.0).expect_err("must fail");
        assert!(matches!(err, ConversionError::InvalidPrice { .. }));
    }

    #[test]
    fn non_finite_result_is_an_overflow() {
        let catalog = catalog(&[("BIG", 1e300), ("TINY", 1e-300)]);

        let err = convert(&catalog, "BIG", "TINY", 1e10).expect_err("must fail");
        assert!(matches!(err, ConversionError::Overflow { .. }));
    }

    #[test]
    fn request_validates_on_construction() {
        let eth = Instrument::parse("ETH").expect("instrument");
        let usd = Instrument::parse("USD").expect("instrument");

        let err = ConversionRequest::new(eth.clone(), usd.clone(), 0.0).expect_err("must fail");
        assert_eq!(err, ConversionError::InvalidAmount { amount: 0.0 });

        let request = ConversionRequest::new(eth, usd, 0.5).expect("request");
        let result = request
            .convert(&catalog(&[("USD", 1.0), ("ETH", 3000.0)]))
            .expect("conversion");
        assert_eq!(result.amount, 1500.0);
    }
}
