//! Unit tests for logging setup helpers

use btc_dca_mailer::logging::{is_production, DEFAULT_LOG_FILTER};
use tracing_subscriber::EnvFilter;

#[test]
fn test_production_environments() {
    assert!(is_production("production"));
    assert!(is_production("prod"));
    assert!(!is_production("sandbox"));
    assert!(!is_production("Production"));
}

#[test]
fn test_default_filter_parses() {
    assert!(EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
}
