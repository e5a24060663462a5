use thiserror::Error;

pub type Result<T> = std::result::Result<T, DdnsError>;

/// Every failure is fatal to the run; nothing here is retried.
#[derive(Debug, Error)]
pub enum DdnsError {
    /// The IP-echo service was unreachable or answered with something unusable
    #[error("error getting external IP: {0}")]
    Network(String),

    /// The hosted zone has no record set for the domain being managed
    #[error("{0}")]
    RecordNotFound(String),

    /// Any Route 53 API failure (auth, validation, throttling)
    #[error("DNS provider error: {0}")]
    Provider(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl DdnsError {
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }
}

impl From<validator::ValidationErrors> for DdnsError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Config(err.to_string())
    }
}
