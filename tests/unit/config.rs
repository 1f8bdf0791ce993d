//! Unit tests for configuration loading

use btc_dca_mailer::config::{AppConfig, ConfigError, DEFAULT_SMTP_PORT, DEFAULT_SMTP_SERVER};
use std::collections::HashMap;
use std::time::Duration;

fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    AppConfig::from_source(|key| map.get(key).cloned())
}

#[test]
fn test_defaults() {
    let config = load(&[]).unwrap();

    assert_eq!(config.environment, "sandbox");
    assert_eq!(config.providers.http_timeout, Duration::from_secs(30));
    assert!(config.providers.chartinspect_api_key.is_none());
    assert_eq!(config.report.subject, "BTC DCA TIME");
    assert_eq!(config.report.tiers.amounts(), [0, 750, 1500, 3000]);
}

#[test]
fn test_missing_mail_settings_only_fail_on_require() {
    let config = load(&[("SENDER_EMAIL", "me@example.com")]).unwrap();

    let err = config.mail.require().unwrap_err();
    assert_eq!(
        err,
        ConfigError::Missing(vec!["SENDER_PASSWORD", "RECIPIENT_EMAIL"])
    );
}

#[test]
fn test_blank_values_count_as_missing() {
    let config = load(&[
        ("SENDER_EMAIL", "me@example.com"),
        ("SENDER_PASSWORD", "   "),
        ("RECIPIENT_EMAIL", "you@example.com"),
    ])
    .unwrap();

    assert_eq!(
        config.mail.require().unwrap_err(),
        ConfigError::Missing(vec!["SENDER_PASSWORD"])
    );
}

#[test]
fn test_complete_mail_settings() {
    let config = load(&[
        ("SENDER_EMAIL", "me@example.com"),
        ("SENDER_PASSWORD", "app-password"),
        ("RECIPIENT_EMAIL", "you@example.com"),
    ])
    .unwrap();

    let mail = config.mail.require().unwrap();
    assert_eq!(mail.smtp_server, DEFAULT_SMTP_SERVER);
    assert_eq!(mail.smtp_port, DEFAULT_SMTP_PORT);
    assert_eq!(mail.recipient_email, "you@example.com");
}

#[test]
fn test_invalid_smtp_port() {
    let config = load(&[
        ("SENDER_EMAIL", "me@example.com"),
        ("SENDER_PASSWORD", "app-password"),
        ("RECIPIENT_EMAIL", "you@example.com"),
        ("SMTP_PORT", "not-a-port"),
    ])
    .unwrap();

    assert!(matches!(
        config.mail.require(),
        Err(ConfigError::Invalid { var: "SMTP_PORT", .. })
    ));

    let config = load(&[
        ("SENDER_EMAIL", "me@example.com"),
        ("SENDER_PASSWORD", "app-password"),
        ("RECIPIENT_EMAIL", "you@example.com"),
        ("SMTP_PORT", "0"),
    ])
    .unwrap();

    assert!(matches!(
        config.mail.require(),
        Err(ConfigError::Invalid { var: "SMTP_PORT", .. })
    ));
}

#[test]
fn test_overrides() {
    let config = load(&[
        ("APP_ENV", "production"),
        ("CHARTINSPECT_API_KEY", "key"),
        ("COINGECKO_BASE_URL", "http://localhost:9999"),
        ("HTTP_TIMEOUT_SECONDS", "5"),
        ("EMAIL_SUBJECT", "Weekly BTC"),
        ("INVESTMENT_TIERS", "0,550,1100,2100"),
        ("SMTP_SERVER", "smtp-mail.outlook.com"),
        ("SMTP_PORT", "25"),
    ])
    .unwrap();

    assert_eq!(config.environment, "production");
    assert_eq!(config.providers.chartinspect_api_key.as_deref(), Some("key"));
    assert_eq!(config.providers.coingecko_base_url, "http://localhost:9999");
    assert_eq!(config.providers.http_timeout, Duration::from_secs(5));
    assert_eq!(config.report.subject, "Weekly BTC");
    assert_eq!(config.report.tiers.amount_for(3), 2100);
    assert_eq!(config.mail.smtp_server.as_deref(), Some("smtp-mail.outlook.com"));
    assert_eq!(config.mail.smtp_port.as_deref(), Some("25"));
}

#[test]
fn test_invalid_numeric_settings() {
    assert!(matches!(
        load(&[("HTTP_TIMEOUT_SECONDS", "0")]),
        Err(ConfigError::Invalid { var: "HTTP_TIMEOUT_SECONDS", .. })
    ));
    assert!(matches!(
        load(&[("INVESTMENT_TIERS", "1,2")]),
        Err(ConfigError::Invalid { var: "INVESTMENT_TIERS", .. })
    ));
}

#[test]
fn test_report_cron_is_optional_until_required() {
    let config = load(&[("REPORT_CRON", "  ")]).unwrap();
    assert!(config.report.cron.is_none());
    assert_eq!(
        config.report.require_cron(),
        Err(ConfigError::Missing(vec!["REPORT_CRON"]))
    );

    let config = load(&[("REPORT_CRON", " 0 0 8 * * Mon ")]).unwrap();
    assert_eq!(config.report.require_cron(), Ok("0 0 8 * * Mon"));
}
