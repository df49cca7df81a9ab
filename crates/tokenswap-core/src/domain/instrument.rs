use std::borrow::Borrow;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Tradable asset identifier, e.g. `ETH` or `stATOM`.
///
/// Case is significant: `bNEO` and `BNEO` are different instruments.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Instrument(String);

impl Instrument {
    /// Parse an identifier, trimming surrounding whitespace only.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyInstrument);
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Instrument {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Borrow<str> for Instrument {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<String> for Instrument {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Instrument> for String {
    fn from(value: Instrument) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_case_and_trims() {
        let parsed = Instrument::parse(" stATOM ").expect("instrument should parse");
        assert_eq!(parsed.as_str(), "stATOM");
        assert_ne!(parsed, Instrument::parse("STATOM").expect("instrument should parse"));
    }

    #[test]
    fn rejects_blank() {
        let err = Instrument::parse("   ").expect_err("must fail");
        assert_eq!(err, ValidationError::EmptyInstrument);
    }

    #[test]
    fn deserializes_through_validation() {
        let err = serde_json::from_str::<Instrument>("\"\"").expect_err("must fail");
        assert!(err.to_string().contains("instrument cannot be empty"));
    }
}
