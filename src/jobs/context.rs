//! Job context for dependency injection

use crate::config::ProviderConfig;
use crate::services::chartinspect::ChartInspectClient;
use crate::services::coingecko::CoinGeckoClient;
use crate::services::error::ProviderError;
use crate::services::mailer::{Mailer, SmtpMailer};
use crate::services::market_data::{ChartMetricsProvider, PriceHistoryProvider};
use std::sync::Arc;

/// Collaborators used by the report pipeline
///
/// Production wiring uses ChartInspect, CoinGecko and SMTP; tests swap in
/// in-memory providers and a recording mailer.
pub struct JobContext {
    pub chart_metrics: Arc<dyn ChartMetricsProvider>,
    pub price_history: Arc<dyn PriceHistoryProvider>,
    pub mailer: Arc<dyn Mailer>,
}

impl JobContext {
    pub fn new(
        chart_metrics: Arc<dyn ChartMetricsProvider>,
        price_history: Arc<dyn PriceHistoryProvider>,
        mailer: Arc<dyn Mailer>,
    ) -> Self {
        Self {
            chart_metrics,
            price_history,
            mailer,
        }
    }

    pub fn from_config(config: &ProviderConfig) -> Result<Self, ProviderError> {
        Ok(Self::new(
            Arc::new(ChartInspectClient::new(config)?),
            Arc::new(CoinGeckoClient::new(config)?),
            Arc::new(SmtpMailer::new(config.http_timeout)),
        ))
    }
}
