//! BTC DCA Mailer Worker
//!
//! Long-running process that sends the indicator report on a cron schedule.

use btc_dca_mailer::config::AppConfig;
use btc_dca_mailer::core::runtime::ReportRuntime;
use btc_dca_mailer::core::scheduler::ReportScheduler;
use btc_dca_mailer::jobs::context::JobContext;
use btc_dca_mailer::logging;
use dotenvy::dotenv;
use std::sync::Arc;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    logging::init_logging();

    let config = AppConfig::from_env()?;
    let cron_expr = config
        .report
        .require_cron()
        .map_err(|e| format!("{} (e.g. \"0 0 8 * * Mon\")", e))?
        .to_string();

    info!("Starting BTC DCA Mailer Worker");
    info!(environment = %config.environment, "Environment");

    let context = Arc::new(JobContext::from_config(&config.providers)?);
    let runtime = Arc::new(ReportRuntime::new(config, context));

    let scheduler = ReportScheduler::new(runtime, &cron_expr)
        .map_err(|e| format!("Failed to create scheduler: {}", e))?;
    if let Some(next) = scheduler.next_tick() {
        info!(next = %next, "Next report at {}", next);
    }
    scheduler.start().await;

    info!("Worker started, waiting for shutdown signal...");
    signal::ctrl_c().await?;
    info!("Shutting down worker...");
    scheduler.stop().await;
    info!("Worker stopped");

    Ok(())
}
