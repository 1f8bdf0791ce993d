//! Single report run

use crate::config::AppConfig;
use crate::jobs::context::JobContext;
use crate::jobs::handlers;
use crate::jobs::types::{ReportError, ReportOutcome};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{error, info};

/// Runs the report workflow against a fixed configuration
pub struct ReportRuntime {
    config: AppConfig,
    context: Arc<JobContext>,
}

impl ReportRuntime {
    pub fn new(config: AppConfig, context: Arc<JobContext>) -> Self {
        Self { config, context }
    }

    /// Run the workflow for the current time
    pub async fn run_once(&self) -> Result<ReportOutcome, ReportError> {
        self.run_at(Utc::now()).await
    }

    /// Run the workflow as of `now`
    pub async fn run_at(&self, now: DateTime<Utc>) -> Result<ReportOutcome, ReportError> {
        match handlers::run_report(&self.context, &self.config, now).await {
            Ok(outcome) => {
                info!(
                    recipient = %outcome.recipient,
                    flash_count = outcome.evaluation.flash.count,
                    amount = outcome.evaluation.investment_amount,
                    "Process completed successfully!"
                );
                Ok(outcome)
            }
            Err(e) => {
                error!(error = %e, "Process completed with errors");
                Err(e)
            }
        }
    }
}
