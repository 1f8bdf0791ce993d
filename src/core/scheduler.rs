//! Cron-based scheduler for recurring reports

use crate::core::runtime::ReportRuntime;
use cron::Schedule;
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

/// Scheduler that runs the report on every cron tick
pub struct ReportScheduler {
    runtime: Arc<ReportRuntime>,
    schedule: Schedule,
    handle: Arc<RwLock<Option<tokio::task::JoinHandle<()>>>>,
}

impl ReportScheduler {
    /// Create a new scheduler
    ///
    /// # Arguments
    /// * `runtime` - Runtime executed on each tick
    /// * `cron_expr` - Cron expression with seconds (`sec min hour day month weekday`)
    pub fn new(
        runtime: Arc<ReportRuntime>,
        cron_expr: &str,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let schedule = Schedule::from_str(cron_expr).map_err(|e| {
            Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Invalid cron expression '{}': {}", cron_expr, e),
            )) as Box<dyn std::error::Error + Send + Sync>
        })?;

        info!(cron = %cron_expr, "ReportScheduler: created (cron: {})", cron_expr);

        Ok(Self {
            runtime,
            schedule,
            handle: Arc::new(RwLock::new(None)),
        })
    }

    /// Next tick after now, if the schedule has one
    pub fn next_tick(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.schedule.upcoming(chrono::Utc).next()
    }

    /// Start the scheduler
    pub async fn start(&self) {
        let runtime = self.runtime.clone();
        let schedule = self.schedule.clone();

        let handle = tokio::spawn(async move {
            info!("ReportScheduler: started, waiting for cron schedule...");

            loop {
                let Some(next_tick) = schedule.upcoming(chrono::Utc).next() else {
                    warn!("ReportScheduler: schedule has no upcoming ticks, stopping");
                    break;
                };

                let now = chrono::Utc::now();
                if next_tick > now {
                    let duration = (next_tick - now).to_std().unwrap_or_default();
                    tokio::time::sleep(duration).await;
                }

                info!(tick = %next_tick, "ReportScheduler: cron tick, running report");
                // Failures are logged by the runtime; the next tick still runs
                let _ = runtime.run_at(next_tick).await;
            }
        });

        let mut h = self.handle.write().await;
        *h = Some(handle);
        info!("ReportScheduler: started successfully");
    }

    /// Stop the scheduler
    pub async fn stop(&self) {
        let mut handle = self.handle.write().await;
        if let Some(h) = handle.take() {
            h.abort();
            info!("ReportScheduler: stopped");
        }
    }

    /// Check if the scheduler is running
    ///
    /// False once stopped or once the schedule has no upcoming ticks.
    pub async fn is_running(&self) -> bool {
        let handle = self.handle.read().await;
        handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}
