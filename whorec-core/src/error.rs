use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WhoisError {
    #[error("malformed domain: {0}")]
    MalformedDomain(String),

    #[error("empty response for {0}")]
    EmptyResponse(String),

    #[error("unsupported suffix: {0}")]
    UnsupportedSuffix(String),
}

pub type Result<T> = std::result::Result<T, WhoisError>;
