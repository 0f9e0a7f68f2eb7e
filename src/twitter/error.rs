use thiserror::Error;

use crate::twitter::config::API_KEY_ENV;

pub type Result<T> = std::result::Result<T, TwitterError>;

#[derive(Debug, Error)]
pub enum TwitterError {
    #[error("{0}")]
    Configuration(String),

    #[error("{0}")]
    Upstream(String),

    #[error("{0}")]
    InvalidParams(String),
}

impl TwitterError {
    pub fn missing_api_key() -> Self {
        TwitterError::Configuration(format!("{API_KEY_ENV} environment variable is not set"))
    }
}

impl From<reqwest::Error> for TwitterError {
    fn from(err: reqwest::Error) -> Self {
        TwitterError::Upstream(err.to_string())
    }
}

impl From<serde_json::Error> for TwitterError {
    fn from(err: serde_json::Error) -> Self {
        TwitterError::Upstream(format!("Invalid response body: {err}"))
    }
}
