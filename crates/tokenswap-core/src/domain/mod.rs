//! # Domain Models
//!
//! Strongly-typed values flowing through the price pipeline.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Instrument`] | Case-sensitive asset identifier |
//! | [`UtcDateTime`] | Observation timestamp, normalized to UTC |
//! | [`PriceObservation`] | Validated price of one instrument at one instant |
//! | [`RawPriceRecord`] | Undecoded feed record (`currency`, `date`, `price`) |
//!
//! Construction validates every invariant, so a [`PriceObservation`] always
//! carries a finite price greater than zero.

mod instrument;
mod observation;
mod timestamp;

pub use instrument::Instrument;
pub use observation::{PriceObservation, RawPriceRecord};
pub use timestamp::UtcDateTime;

pub(crate) use observation::validate_positive;
