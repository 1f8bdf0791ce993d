//! Provider interfaces consumed by the report pipeline.

use crate::models::{Indicator, MetricSeries, PricePoint};
use crate::services::error::ProviderError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Daily indicator values published by a chart-metrics service
#[async_trait]
pub trait ChartMetricsProvider: Send + Sync {
    /// Get the last `days` daily values of an indicator, oldest first
    async fn fetch_metric(
        &self,
        indicator: Indicator,
        days: u32,
    ) -> Result<MetricSeries, ProviderError>;
}

/// Raw BTC/USD price history
#[async_trait]
pub trait PriceHistoryProvider: Send + Sync {
    /// Get every price sample between `from` and `to`, oldest first
    async fn fetch_price_range(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<PricePoint>, ProviderError>;

    /// Get the current spot price
    async fn fetch_spot_price(&self) -> Result<f64, ProviderError>;
}
