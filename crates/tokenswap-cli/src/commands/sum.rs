use serde::Serialize;
use tokenswap_core::{sum_to_n, SumToN};

use crate::cli::SumArgs;
use crate::error::CliError;

use super::CommandOutput;

#[derive(Debug, Serialize)]
struct SumResponseData {
    sum: u64,
    #[serde(flatten)]
    results: SumToN,
}

pub fn run(args: &SumArgs) -> Result<CommandOutput, CliError> {
    let results = sum_to_n(args.n)?;
    let sum = results.value();

    let data = serde_json::to_value(SumResponseData { sum, results })?;

    Ok(CommandOutput::new(format!("Sum to {}: {sum}", args.n), data))
}
