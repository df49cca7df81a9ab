mod prices;
mod sum;
mod swap;

use serde_json::Value;
use tokenswap_core::{FeedConfig, PriceFeed};

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// What a command produced, in both renderings.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutput {
    pub text: String,
    pub data: Value,
}

impl CommandOutput {
    pub fn new(text: impl Into<String>, data: Value) -> Self {
        Self {
            text: text.into(),
            data,
        }
    }
}

pub async fn run(cli: &Cli) -> Result<CommandOutput, CliError> {
    match &cli.command {
        Command::Swap(args) => swap::run(args, &price_feed(cli)).await,
        Command::Prices => prices::run(&price_feed(cli)).await,
        Command::Sum(args) => sum::run(args),
    }
}

fn price_feed(cli: &Cli) -> PriceFeed {
    let mut config = FeedConfig::from_env().with_timeout_ms(cli.timeout_ms);
    if let Some(url) = &cli.feed_url {
        config = config.with_url(url.clone());
    }
    PriceFeed::new(config)
}
