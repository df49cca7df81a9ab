//! Three equivalent ways to sum the integers `1..=n`.
//!
//! `u32` input keeps every intermediate inside `u64`: the largest result,
//! `u32::MAX * (u32::MAX + 1) / 2`, is below `u64::MAX`.

use serde::Serialize;

use crate::SumError;

/// Closed form `n * (n + 1) / 2`. O(1).
pub fn sum_to_n_formula(n: u32) -> u64 {
    let n = u64::from(n);
    n * (n + 1) / 2
}

/// Iterator fold over `1..=n`. O(n).
pub fn sum_to_n_fold(n: u32) -> u64 {
    (1..=u64::from(n)).fold(0, |sum, value| sum + value)
}

/// Explicit accumulation loop. O(n).
pub fn sum_to_n_loop(n: u32) -> u64 {
    let mut sum = 0u64;
    let mut value = 1u64;
    while value <= u64::from(n) {
        sum += value;
        value += 1;
    }
    sum
}

/// Results of the three implementations for one `n`, known to agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SumToN {
    pub n: u32,
    pub formula: u64,
    pub fold: u64,
    #[serde(rename = "loop")]
    pub looped: u64,
}

impl SumToN {
    pub const fn value(&self) -> u64 {
        self.formula
    }
}

/// Run all three implementations once each and check that they agree.
pub fn sum_to_n(n: u32) -> Result<SumToN, SumError> {
    if n == 0 {
        return Err(SumError::NotPositive);
    }

    let formula = sum_to_n_formula(n);
    let fold = sum_to_n_fold(n);
    let looped = sum_to_n_loop(n);

    if formula != fold || fold != looped {
        return Err(SumError::Disagreement {
            formula,
            fold,
            looped,
        });
    }

    Ok(SumToN {
        n,
        formula,
        fold,
        looped,
    })
}
