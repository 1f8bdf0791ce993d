//! Logging setup for the mailer binaries
//!
//! Production runs emit flattened JSON events for the host's log collector.
//! Local runs get compact colored lines. Both go to stderr so a scheduler
//! wrapping the one-shot binary can keep stdout clean.

use crate::config::get_environment;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Used when `RUST_LOG` is unset; HTTP and SMTP client internals stay quiet
pub const DEFAULT_LOG_FILTER: &str = "info,hyper=warn,reqwest=warn,lettre=warn";

pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let registry = tracing_subscriber::registry().with(env_filter);

    if is_production(&get_environment()) {
        registry
            .with(
                fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_current_span(false)
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_ansi(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

pub fn is_production(environment: &str) -> bool {
    matches!(environment, "production" | "prod")
}
