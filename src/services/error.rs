use crate::models::Indicator;
use thiserror::Error;

/// Failure to retrieve data from a remote provider
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("{0} environment variable not set")]
    MissingApiKey(&'static str),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid payload: {0}")]
    Payload(String),

    #[error("no data returned from {0}")]
    Empty(&'static str),

    #[error("{0} is not served by this provider")]
    Unsupported(Indicator),
}

/// Turn a non-success response into [`ProviderError::Status`]
pub(crate) async fn check_status(
    response: reqwest::Response,
) -> Result<reqwest::Response, ProviderError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ProviderError::Status {
        status: status.as_u16(),
        body,
    })
}
