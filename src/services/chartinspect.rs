//! ChartInspect on-chain metrics client

use crate::config::ProviderConfig;
use crate::models::{Indicator, MetricPoint, MetricSeries};
use crate::services::error::{check_status, ProviderError};
use crate::services::market_data::ChartMetricsProvider;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

const API_KEY_VAR: &str = "CHARTINSPECT_API_KEY";
const PROVIDER: &str = "ChartInspect";

#[derive(Debug, Deserialize)]
struct ChartResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    data: Option<Vec<Value>>,
}

pub struct ChartInspectClient {
    base_url: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl ChartInspectClient {
    pub fn new(config: &ProviderConfig) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()?;
        Ok(Self::with_client(
            config.chartinspect_base_url.clone(),
            config.chartinspect_api_key.clone(),
            client,
        ))
    }

    pub fn with_client(
        base_url: impl Into<String>,
        api_key: Option<String>,
        client: reqwest::Client,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
            client,
        }
    }

    /// (URL slug, value field) for an indicator
    fn endpoint(indicator: Indicator) -> Result<(&'static str, &'static str), ProviderError> {
        match indicator {
            Indicator::PuellMultiple => Ok(("puell-multiple", "puell_multiple")),
            Indicator::MvrvZScore => Ok(("mvrv-z-score", "z_score")),
            Indicator::Ahr999 => Err(ProviderError::Unsupported(indicator)),
        }
    }
}

#[async_trait]
impl ChartMetricsProvider for ChartInspectClient {
    async fn fetch_metric(
        &self,
        indicator: Indicator,
        days: u32,
    ) -> Result<MetricSeries, ProviderError> {
        let (slug, field) = Self::endpoint(indicator)?;
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ProviderError::MissingApiKey(API_KEY_VAR))?;

        let url = format!("{}/api/v1/onchain/{}", self.base_url, slug);
        debug!(indicator = %indicator, url = %url, days, "Requesting chart metric");

        let response = self
            .client
            .get(&url)
            .query(&[("days", days)])
            .header("X-API-Key", api_key)
            .send()
            .await?;
        let body: ChartResponse = check_status(response).await?.json().await?;

        parse_series(indicator, field, body)
    }
}

fn parse_series(
    indicator: Indicator,
    field: &str,
    body: ChartResponse,
) -> Result<MetricSeries, ProviderError> {
    let items = match body.data {
        Some(items) if body.success && !items.is_empty() => items,
        _ => return Err(ProviderError::Empty(PROVIDER)),
    };

    let mut points = items
        .iter()
        .map(|item| {
            let value = item.get(field).and_then(Value::as_f64).ok_or_else(|| {
                ProviderError::Payload(format!("missing numeric '{}' in {}", field, item))
            })?;
            let date = item_date(item)?;
            Ok(MetricPoint::new(date, value))
        })
        .collect::<Result<Vec<_>, ProviderError>>()?;

    points.sort_by_key(|p| p.date);

    Ok(MetricSeries::new(indicator, points))
}

/// `formattedDate` when present and non-empty, otherwise `date`
fn item_date(item: &Value) -> Result<NaiveDate, ProviderError> {
    let formatted = item
        .get("formattedDate")
        .filter(|v| !v.is_null() && v.as_str() != Some(""));
    let raw = formatted
        .or_else(|| item.get("date"))
        .ok_or_else(|| ProviderError::Payload(format!("missing date in {}", item)))?;

    parse_date(raw).ok_or_else(|| ProviderError::Payload(format!("unparseable date {}", raw)))
}

/// Accepts `YYYY-MM-DD`, RFC 3339 strings, or epoch milliseconds
pub fn parse_date(raw: &Value) -> Option<NaiveDate> {
    match raw {
        Value::String(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .or_else(|| {
                DateTime::parse_from_rfc3339(s)
                    .ok()
                    .map(|dt| dt.with_timezone(&Utc).date_naive())
            })
            .or_else(|| {
                s.get(..10)
                    .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
            }),
        Value::Number(n) => n
            .as_i64()
            .and_then(DateTime::from_timestamp_millis)
            .map(|dt| dt.date_naive()),
        _ => None,
    }
}
