use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndicatorError {
    #[error("data unavailable: {0}")]
    DataUnavailable(String),
}
