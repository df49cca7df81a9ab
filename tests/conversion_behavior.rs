//! Behavior-driven tests for currency conversion
//!
//! These tests verify HOW conversions behave from the caller's point of view:
//! concrete amounts, the algebraic properties callers rely on, and which
//! failure is reported for which bad input.

use tokenswap_core::{
    convert, ConversionError, ConversionRequest, Instrument, PriceCatalog, PriceObservation,
    UtcDateTime,
};

fn catalog(prices: &[(&str, f64)]) -> PriceCatalog {
    let ts = UtcDateTime::parse("2024-01-01T00:00:00Z").expect("valid timestamp");
    PriceCatalog::build(prices.iter().map(|(instrument, price)| {
        PriceObservation::new(Instrument::parse(instrument).expect("valid instrument"), ts, *price)
            .expect("valid observation")
    }))
}

fn usd_eth() -> PriceCatalog {
    catalog(&[("USD", 1.0), ("ETH", 3000.0)])
}

// =============================================================================
// Conversion: Successful Swaps
// =============================================================================

#[test]
fn when_user_swaps_two_eth_to_usd_they_receive_six_thousand() {
    // Given: USD at 1.0 and ETH at 3000.0
    let catalog = usd_eth();

    // When: 2 ETH are converted to USD
    let result = convert(&catalog, "ETH", "USD", 2.0).expect("conversion succeeds");

    // Then: The user receives 6000 USD
    assert_eq!(result.amount, 6000.0);
    assert_eq!(result.to.as_str(), "USD");
    assert_eq!(result.format_amount(6), "6000.000000");
}

#[test]
fn when_user_swaps_usd_to_eth_they_receive_the_inverse_rate() {
    let catalog = usd_eth();

    let result = convert(&catalog, "USD", "ETH", 1500.0).expect("conversion succeeds");

    assert!((result.amount - 0.5).abs() < 1e-12);
    assert!((result.rate - 1.0 / 3000.0).abs() < 1e-15);
}

#[test]
fn when_amount_doubles_converted_amount_doubles() {
    // Given: A catalog with awkward prices
    let catalog = catalog(&[("ATOM", 7.186_822_5), ("OSMO", 0.377_972_7), ("USDC", 0.999_9)]);
    let pairs = [("ATOM", "OSMO"), ("OSMO", "USDC"), ("USDC", "ATOM")];
    let amounts = [0.001, 1.0, 3.3, 12_345.678];

    for (from, to) in pairs {
        for amount in amounts {
            // When: The same pair is converted at x and 2x
            let single = convert(&catalog, from, to, amount).expect("conversion");
            let double = convert(&catalog, from, to, 2.0 * amount).expect("conversion");

            // Then: The result scales linearly
            let expected = 2.0 * single.amount;
            let tolerance = expected.abs() * 1e-12;
            assert!(
                (double.amount - expected).abs() <= tolerance,
                "{from}->{to} at {amount}: {} vs {expected}",
                double.amount
            );
        }
    }
}

#[test]
fn when_instrument_is_converted_to_itself_amount_is_unchanged() {
    let catalog = catalog(&[("ATOM", 7.186_822_5), ("BLUR", 0.208_115_254_237_288_13)]);

    for instrument in ["ATOM", "BLUR"] {
        for amount in [0.1, 1.0, 42.0, 1e9] {
            let result = convert(&catalog, instrument, instrument, amount).expect("conversion");
            assert_eq!(result.amount, amount, "{instrument} at {amount}");
            assert_eq!(result.rate, 1.0);
        }
    }
}

// =============================================================================
// Conversion: Failures
// =============================================================================

#[test]
fn when_target_instrument_is_unknown_user_sees_unknown_instrument() {
    let catalog = usd_eth();

    let err = convert(&catalog, "ETH", "XYZ", 2.0).expect_err("must fail");

    assert_eq!(
        err,
        ConversionError::UnknownInstrument {
            instrument: String::from("XYZ")
        }
    );
}

#[test]
fn when_source_instrument_is_unknown_user_sees_unknown_instrument() {
    let catalog = usd_eth();

    let err = convert(&catalog, "XYZ", "USD", 2.0).expect_err("must fail");

    assert!(matches!(err, ConversionError::UnknownInstrument { instrument } if instrument == "XYZ"));
}

#[test]
fn when_amount_is_negative_user_sees_invalid_amount() {
    let catalog = usd_eth();

    let err = convert(&catalog, "ETH", "USD", -1.0).expect_err("must fail");

    assert_eq!(err, ConversionError::InvalidAmount { amount: -1.0 });
}

#[test]
fn when_amount_is_zero_or_not_finite_user_sees_invalid_amount() {
    let catalog = usd_eth();

    for amount in [0.0, -0.0, f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
        let err = convert(&catalog, "ETH", "USD", amount).expect_err("must fail");
        assert!(
            matches!(err, ConversionError::InvalidAmount { .. }),
            "amount {amount} gave {err:?}"
        );
    }
}

#[test]
fn when_request_is_built_from_user_input_it_converts_the_same_way() {
    // Given: A validated request
    let request = ConversionRequest::new(
        Instrument::parse("ETH").expect("valid"),
        Instrument::parse("USD").expect("valid"),
        2.0,
    )
    .expect("valid request");

    // When: The request is applied to the catalog
    let result = request.convert(&usd_eth()).expect("conversion");

    // Then: It matches the free function
    assert_eq!(result, convert(&usd_eth(), "ETH", "USD", 2.0).expect("conversion"));
}
