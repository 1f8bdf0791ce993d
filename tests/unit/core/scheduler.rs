//! Unit tests for the report scheduler

use btc_dca_mailer::config::{AppConfig, ProviderConfig};
use btc_dca_mailer::core::runtime::ReportRuntime;
use btc_dca_mailer::core::scheduler::ReportScheduler;
use btc_dca_mailer::jobs::context::JobContext;
use std::sync::Arc;

fn runtime() -> Arc<ReportRuntime> {
    let config = AppConfig::from_source(|_| None).unwrap();
    let context = JobContext::from_config(&ProviderConfig::default()).unwrap();
    Arc::new(ReportRuntime::new(config, Arc::new(context)))
}

#[tokio::test]
async fn test_scheduler_rejects_invalid_cron() {
    let result = ReportScheduler::new(runtime(), "every monday");
    assert!(result.is_err());
}

#[tokio::test]
async fn test_scheduler_next_tick_is_in_future() {
    let scheduler = ReportScheduler::new(runtime(), "0 0 8 * * Mon").unwrap();
    let next = scheduler.next_tick().expect("weekly schedule has a next tick");
    assert!(next > chrono::Utc::now());
}

#[tokio::test]
async fn test_scheduler_start_stop() {
    let scheduler = ReportScheduler::new(runtime(), "0 0 8 * * Mon").unwrap();
    assert!(!scheduler.is_running().await);

    scheduler.start().await;
    assert!(scheduler.is_running().await);

    scheduler.stop().await;
    assert!(!scheduler.is_running().await);
}

#[tokio::test]
async fn test_scheduler_stops_when_schedule_is_exhausted() {
    // Only ticks on 2000-01-01
    let scheduler = ReportScheduler::new(runtime(), "0 0 0 1 1 * 2000").unwrap();
    assert!(scheduler.next_tick().is_none());

    scheduler.start().await;
    tokio::time::sleep(std::time::Duration::from_millis(200)).await;

    assert!(!scheduler.is_running().await);
}
