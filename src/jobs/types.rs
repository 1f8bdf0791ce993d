//! Result types for the report workflow

use crate::config::ConfigError;
use crate::services::mailer::MailError;
use crate::signals::evaluator::IndicatorEvaluation;
use thiserror::Error;

/// Days of chart metrics requested per indicator
pub const METRIC_WINDOW_DAYS: u32 = 7;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("all indicators failed to fetch, aborting email send")]
    AllIndicatorsUnavailable,

    #[error("mail configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Mail(#[from] MailError),
}

/// A report that was delivered
#[derive(Debug, Clone)]
pub struct ReportOutcome {
    pub evaluation: IndicatorEvaluation,
    pub btc_price: Option<f64>,
    pub recipient: String,
    pub subject: String,
}
