use crate::utils::error::{Result, SnippetError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(SnippetError::InvalidUrl {
            url: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(SnippetError::InvalidUrl {
                url: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(SnippetError::InvalidUrl {
            url: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_timeout(seconds: u64) -> Result<()> {
    if seconds == 0 {
        return Err(SnippetError::config("timeout_seconds must be at least 1"));
    }
    Ok(())
}
