//! Remote collaborators: data providers and mail transport.

pub mod chartinspect;
pub mod coingecko;
pub mod error;
pub mod mailer;
pub mod market_data;

pub use chartinspect::ChartInspectClient;
pub use coingecko::CoinGeckoClient;
pub use error::ProviderError;
pub use mailer::{Mailer, MailError, OutgoingMail, SmtpMailer};
pub use market_data::{ChartMetricsProvider, PriceHistoryProvider};
