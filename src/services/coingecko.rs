//! CoinGecko BTC/USD price client

use crate::config::ProviderConfig;
use crate::models::PricePoint;
use crate::services::error::{check_status, ProviderError};
use crate::services::market_data::PriceHistoryProvider;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

const PROVIDER: &str = "CoinGecko";

#[derive(Debug, Deserialize)]
struct MarketChartResponse {
    #[serde(default)]
    prices: Vec<(f64, f64)>,
}

#[derive(Debug, Deserialize)]
struct SimplePriceResponse {
    bitcoin: Option<CoinPrice>,
}

#[derive(Debug, Deserialize)]
struct CoinPrice {
    usd: Option<f64>,
}

pub struct CoinGeckoClient {
    base_url: String,
    client: reqwest::Client,
}

impl CoinGeckoClient {
    pub fn new(config: &ProviderConfig) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()?;
        Ok(Self::with_client(config.coingecko_base_url.clone(), client))
    }

    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }
}

#[async_trait]
impl PriceHistoryProvider for CoinGeckoClient {
    async fn fetch_price_range(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<PricePoint>, ProviderError> {
        let url = format!("{}/api/v3/coins/bitcoin/market_chart/range", self.base_url);
        debug!(from = %from, to = %to, "Requesting BTC price range");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("vs_currency", "usd".to_string()),
                ("from", from.timestamp().to_string()),
                ("to", to.timestamp().to_string()),
            ])
            .send()
            .await?;
        let body: MarketChartResponse = check_status(response).await?.json().await?;

        if body.prices.is_empty() {
            return Err(ProviderError::Empty(PROVIDER));
        }

        let mut points = body
            .prices
            .into_iter()
            .map(|(millis, price)| {
                DateTime::from_timestamp_millis(millis as i64)
                    .map(|timestamp| PricePoint::new(timestamp, price))
                    .ok_or_else(|| {
                        ProviderError::Payload(format!("invalid price timestamp {}", millis))
                    })
            })
            .collect::<Result<Vec<_>, ProviderError>>()?;

        points.sort_by_key(|p| p.timestamp);
        debug!(count = points.len(), "Received BTC price samples");

        Ok(points)
    }

    async fn fetch_spot_price(&self) -> Result<f64, ProviderError> {
        let url = format!("{}/api/v3/simple/price", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("ids", "bitcoin"), ("vs_currencies", "usd")])
            .send()
            .await?;
        let body: SimplePriceResponse = check_status(response).await?.json().await?;

        body.bitcoin
            .and_then(|coin| coin.usd)
            .ok_or_else(|| ProviderError::Payload("missing bitcoin.usd".to_string()))
    }
}
