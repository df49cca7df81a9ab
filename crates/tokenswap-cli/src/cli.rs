//! CLI argument definitions for tokenswap.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `swap` | Convert an amount of one instrument into another |
//! | `prices` | List the latest price per instrument |
//! | `sum` | Sum the integers 1..=n three different ways |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `text` | Output format (text, json) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--feed-url` | `$TOKENSWAP_FEED_URL` or the public feed | Price feed location |
//! | `--timeout-ms` | `3000` | Feed request budget in ms |
//!
//! # Examples
//!
//! ```bash
//! tokenswap swap ETH USDC 2
//! tokenswap prices --format json --pretty
//! tokenswap sum 100
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use tokenswap_core::DEFAULT_TIMEOUT_MS;

/// Token price lookup and currency conversion.
#[derive(Debug, Parser)]
#[command(
    name = "tokenswap",
    author,
    version,
    about = "Convert between tokens using the latest feed prices"
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Price feed URL. Overrides TOKENSWAP_FEED_URL.
    #[arg(long, global = true)]
    pub feed_url: Option<String>,

    /// Feed request timeout budget in milliseconds.
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    Text,
    /// Single JSON document.
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert AMOUNT of FROM into TO at the latest feed prices.
    Swap(SwapArgs),
    /// List the latest price of every instrument in the feed.
    Prices,
    /// Sum the integers 1..=N with three equivalent implementations.
    Sum(SumArgs),
}

#[derive(Debug, Args)]
pub struct SwapArgs {
    /// Instrument to swap from (case-sensitive).
    pub from: String,
    /// Instrument to swap to (case-sensitive).
    pub to: String,
    /// Amount of FROM to swap.
    #[arg(allow_negative_numbers = true)]
    pub amount: f64,
    /// Decimal places in the rendered amount.
    #[arg(long, default_value_t = 6)]
    pub decimals: usize,
}

#[derive(Debug, Args)]
pub struct SumArgs {
    /// Upper bound of the sum.
    pub n: u32,
}
