// src/errors.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PartyError {
    #[error("Failed to read file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Response body is not valid JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API request failed with status {status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("Backend returned an error: {0}")]
    Backend(String),

    #[error("{0}")]
    Validation(String),

    #[error("Failed to read upload: {0}")]
    Upload(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// The user-facing failure categories. Every one of them is rendered
/// inline; none of them stops the page from rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    MalformedResponse,
    Backend,
    Validation,
    Internal,
}

impl PartyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PartyError::Request(_) | PartyError::ApiError { .. } => ErrorKind::Network,
            PartyError::MalformedJson(_) => ErrorKind::MalformedResponse,
            PartyError::Backend(_) => ErrorKind::Backend,
            PartyError::Validation(_) | PartyError::Upload(_) => ErrorKind::Validation,
            PartyError::FileRead(_) | PartyError::TomlParse(_) | PartyError::Config(_) => {
                ErrorKind::Internal
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PartyError>;
