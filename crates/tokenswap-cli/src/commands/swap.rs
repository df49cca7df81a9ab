use serde::Serialize;
use tokenswap_core::{ConversionRequest, ConversionResult, Instrument, PriceFeed};

use crate::cli::SwapArgs;
use crate::error::CliError;

use super::CommandOutput;

#[derive(Debug, Serialize)]
struct SwapResponseData {
    #[serde(flatten)]
    result: ConversionResult,
    denomination: String,
    formatted: String,
}

pub async fn run(args: &SwapArgs, feed: &PriceFeed) -> Result<CommandOutput, CliError> {
    // Validate input before touching the network.
    let request = ConversionRequest::new(
        Instrument::parse(&args.from)?,
        Instrument::parse(&args.to)?,
        args.amount,
    )?;

    let catalog = feed.fetch_catalog().await?;
    let result = request.convert(&catalog)?;

    let formatted = result.format_amount(args.decimals);
    let text = format!("{formatted} {}", result.to);
    let data = serde_json::to_value(SwapResponseData {
        result,
        denomination: catalog.denomination().to_owned(),
        formatted,
    })?;

    Ok(CommandOutput::new(text, data))
}
