//! BTC DCA Mailer
//!
//! Runs the indicator report once and exits. Scheduling is left to the
//! caller (cron, CI schedule) or to the `worker` binary.

use btc_dca_mailer::config::AppConfig;
use btc_dca_mailer::core::runtime::ReportRuntime;
use btc_dca_mailer::jobs::context::JobContext;
use btc_dca_mailer::logging;
use dotenvy::dotenv;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let config = AppConfig::from_env()?;
    info!(environment = %config.environment, "Starting BTC DCA Mailer");

    let context = Arc::new(JobContext::from_config(&config.providers)?);
    let runtime = ReportRuntime::new(config, context);

    runtime.run_once().await?;

    Ok(())
}
