use thiserror::Error;

#[derive(Error, Debug)]
pub enum AddrError {
    /// No input source satisfied the presence rule for this lookup.
    #[error("No {0} provided.")]
    MissingInput(&'static str),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AddrError>;
