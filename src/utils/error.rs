use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnippetError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Response body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config file parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl SnippetError {
    pub fn config(message: impl Into<String>) -> Self {
        SnippetError::Config {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SnippetError>;
