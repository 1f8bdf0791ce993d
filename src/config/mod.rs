//! Environment-driven configuration
//!
//! Everything is read once into [`AppConfig`] and passed explicitly to the
//! runtime. Mail credentials are kept as loose [`MailSettings`] until the send
//! step calls [`MailSettings::require`], so a missing credential never blocks
//! indicator retrieval.

use crate::signals::tiers::InvestmentTiers;
use std::env;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_ENVIRONMENT: &str = "sandbox";
pub const DEFAULT_CHARTINSPECT_BASE_URL: &str = "https://chartinspect.com";
pub const DEFAULT_COINGECKO_BASE_URL: &str = "https://api.coingecko.com";
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_SMTP_SERVER: &str = "smtp.gmail.com";
pub const DEFAULT_SMTP_PORT: u16 = 587;
pub const DEFAULT_EMAIL_SUBJECT: &str = "BTC DCA TIME";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing required configuration: {}", .0.join(", "))]
    Missing(Vec<&'static str>),

    #[error("invalid value for {var}: '{value}' ({reason})")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Get the current deployment environment (`APP_ENV`, defaults to sandbox)
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string())
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub providers: ProviderConfig,
    pub mail: MailSettings,
    pub report: ReportConfig,
}

/// Remote data provider settings
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub chartinspect_api_key: Option<String>,
    pub chartinspect_base_url: String,
    pub coingecko_base_url: String,
    pub http_timeout: Duration,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            chartinspect_api_key: None,
            chartinspect_base_url: DEFAULT_CHARTINSPECT_BASE_URL.to_string(),
            coingecko_base_url: DEFAULT_COINGECKO_BASE_URL.to_string(),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECONDS),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub subject: String,
    pub tiers: InvestmentTiers,
    /// Cron expression for the `worker` binary
    pub cron: Option<String>,
}

impl ReportConfig {
    /// Cron expression for scheduled runs; only the `worker` binary needs one
    pub fn require_cron(&self) -> Result<&str, ConfigError> {
        self.cron
            .as_deref()
            .ok_or_else(|| ConfigError::Missing(vec!["REPORT_CRON"]))
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            subject: DEFAULT_EMAIL_SUBJECT.to_string(),
            tiers: InvestmentTiers::default(),
            cron: None,
        }
    }
}

/// Mail settings as found in the environment, possibly incomplete
#[derive(Debug, Clone, Default)]
pub struct MailSettings {
    pub sender_email: Option<String>,
    pub sender_password: Option<String>,
    pub recipient_email: Option<String>,
    pub smtp_server: Option<String>,
    pub smtp_port: Option<String>,
}

/// Validated mail transport configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailConfig {
    pub sender_email: String,
    pub sender_password: String,
    pub recipient_email: String,
    pub smtp_server: String,
    pub smtp_port: u16,
}

impl MailSettings {
    /// Resolve the settings into a [`MailConfig`].
    ///
    /// Sender address, sender password and recipient address are required.
    /// Server and port fall back to Gmail's STARTTLS relay.
    pub fn require(&self) -> Result<MailConfig, ConfigError> {
        let mut missing = Vec::new();
        if self.sender_email.is_none() {
            missing.push("SENDER_EMAIL");
        }
        if self.sender_password.is_none() {
            missing.push("SENDER_PASSWORD");
        }
        if self.recipient_email.is_none() {
            missing.push("RECIPIENT_EMAIL");
        }
        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }

        let smtp_port = match self.smtp_port.as_deref() {
            Some(raw) => {
                let port = raw.parse::<u16>().map_err(|e| ConfigError::Invalid {
                    var: "SMTP_PORT",
                    value: raw.to_string(),
                    reason: e.to_string(),
                })?;
                if port == 0 {
                    return Err(ConfigError::Invalid {
                        var: "SMTP_PORT",
                        value: raw.to_string(),
                        reason: "must be greater than zero".to_string(),
                    });
                }
                port
            }
            None => DEFAULT_SMTP_PORT,
        };

        Ok(MailConfig {
            sender_email: self.sender_email.clone().unwrap_or_default(),
            sender_password: self.sender_password.clone().unwrap_or_default(),
            recipient_email: self.recipient_email.clone().unwrap_or_default(),
            smtp_server: self
                .smtp_server
                .clone()
                .unwrap_or_else(|| DEFAULT_SMTP_SERVER.to_string()),
            smtp_port,
        })
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// Blank values are treated as unset.
    pub fn from_source<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let http_timeout = match get("HTTP_TIMEOUT_SECONDS") {
            Some(raw) => {
                let secs = raw.parse::<u64>().map_err(|e| ConfigError::Invalid {
                    var: "HTTP_TIMEOUT_SECONDS",
                    value: raw.clone(),
                    reason: e.to_string(),
                })?;
                if secs == 0 {
                    return Err(ConfigError::Invalid {
                        var: "HTTP_TIMEOUT_SECONDS",
                        value: raw,
                        reason: "must be greater than zero".to_string(),
                    });
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECONDS),
        };

        let tiers = match get("INVESTMENT_TIERS") {
            Some(raw) => raw.parse::<InvestmentTiers>().map_err(|reason| ConfigError::Invalid {
                var: "INVESTMENT_TIERS",
                value: raw.clone(),
                reason,
            })?,
            None => InvestmentTiers::default(),
        };

        Ok(Self {
            environment: get("APP_ENV").unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
            providers: ProviderConfig {
                chartinspect_api_key: get("CHARTINSPECT_API_KEY"),
                chartinspect_base_url: get("CHARTINSPECT_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_CHARTINSPECT_BASE_URL.to_string()),
                coingecko_base_url: get("COINGECKO_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_COINGECKO_BASE_URL.to_string()),
                http_timeout,
            },
            mail: MailSettings {
                sender_email: get("SENDER_EMAIL"),
                sender_password: get("SENDER_PASSWORD"),
                recipient_email: get("RECIPIENT_EMAIL"),
                smtp_server: get("SMTP_SERVER"),
                smtp_port: get("SMTP_PORT"),
            },
            report: ReportConfig {
                subject: get("EMAIL_SUBJECT").unwrap_or_else(|| DEFAULT_EMAIL_SUBJECT.to_string()),
                tiers,
                cron: get("REPORT_CRON"),
            },
        })
    }
}
