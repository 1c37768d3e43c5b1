#[cfg(feature = "cli")]
pub mod cli;
pub mod file;

pub use file::FileConfig;

use crate::utils::error::Result;
use crate::utils::validation::{validate_timeout, validate_url, Validate};
use std::time::Duration;

pub const DEFAULT_URL: &str = "https://jsonplaceholder.typicode.com/posts/1";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Resolved settings for the fetch snippet.
#[derive(Debug, Clone, PartialEq)]
pub struct SnippetConfig {
    pub url: String,
    pub timeout_seconds: u64,
}

impl Default for SnippetConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

/// Values given explicitly on the command line. They win over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl SnippetConfig {
    pub fn resolve(file: Option<FileConfig>, overrides: Overrides) -> Result<Self> {
        let defaults = Self::default();
        let fetch = file.unwrap_or_default().fetch;

        let config = Self {
            url: overrides.url.or(fetch.url).unwrap_or(defaults.url),
            timeout_seconds: overrides
                .timeout_seconds
                .or(fetch.timeout_seconds)
                .unwrap_or(defaults.timeout_seconds),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Validate for SnippetConfig {
    fn validate(&self) -> Result<()> {
        validate_url(&self.url)?;
        validate_timeout(self.timeout_seconds)?;
        Ok(())
    }
}
