use serde::Serialize;
use tokenswap_core::{PriceFeed, UtcDateTime};

use crate::error::CliError;

use super::CommandOutput;

const TOKEN_ICON_BASE: &str = "https://raw.githubusercontent.com/Switcheo/token-icons/main/tokens";

#[derive(Debug, Serialize)]
struct PriceRow {
    instrument: String,
    price: f64,
    observed_at: UtcDateTime,
    icon_url: String,
}

#[derive(Debug, Serialize)]
struct PricesResponseData {
    denomination: String,
    prices: Vec<PriceRow>,
}

pub async fn run(feed: &PriceFeed) -> Result<CommandOutput, CliError> {
    let catalog = feed.fetch_catalog().await?;

    let prices: Vec<PriceRow> = catalog
        .observations()
        .into_iter()
        .map(|observation| PriceRow {
            instrument: observation.instrument().to_string(),
            price: observation.price(),
            observed_at: observation.observed_at(),
            icon_url: format!("{TOKEN_ICON_BASE}/{}.svg", observation.instrument()),
        })
        .collect();

    let width = prices
        .iter()
        .map(|row| row.instrument.len())
        .max()
        .unwrap_or(0);
    let text = prices
        .iter()
        .map(|row| {
            format!(
                "{:<width$}  {:>20.6} {}  {}",
                row.instrument,
                row.price,
                catalog.denomination(),
                row.observed_at
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let data = serde_json::to_value(PricesResponseData {
        denomination: catalog.denomination().to_owned(),
        prices,
    })?;

    Ok(CommandOutput::new(text, data))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tokenswap_core::{FeedConfig, StaticHttpClient};

    use super::*;

    #[tokio::test]
    async fn lists_latest_price_per_instrument_sorted() {
        let feed = PriceFeed::with_http_client(
            FeedConfig::default(),
            Arc::new(StaticHttpClient::ok_json(
                r#"[
                    {"currency": "USDC", "date": "2024-01-01T00:00:00Z", "price": 1},
                    {"currency": "BTC", "date": "2024-01-01T00:00:00Z", "price": 100},
                    {"currency": "BTC", "date": "2024-01-02T00:00:00Z", "price": 110},
                    {"currency": "ETH", "date": "2024-01-01T00:00:00Z", "price": 50}
                ]"#,
            )),
        );

        let output = run(&feed).await.expect("prices");

        let rows = output.data["prices"].as_array().expect("price rows");
        let names: Vec<&str> = rows
            .iter()
            .filter_map(|row| row["instrument"].as_str())
            .collect();
        assert_eq!(names, vec!["BTC", "ETH", "USDC"]);
        assert_eq!(rows[0]["price"], 110.0);
        assert_eq!(rows[0]["observed_at"], "2024-01-02T00:00:00Z");
        assert_eq!(
            rows[0]["icon_url"],
            "https://raw.githubusercontent.com/Switcheo/token-icons/main/tokens/BTC.svg"
        );

        let lines: Vec<&str> = output.text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(!output.text.ends_with('\n'));
        assert!(lines[0].starts_with("BTC "));
        assert!(lines[0].contains("110.000000 USD"));
    }
}
