//! Asynchronous request handling with error capture.
//!
//! One GET, one JSON decode, one log line reporting which of the two
//! happened. Failures are logged and swallowed.

use crate::domain::ports::JsonSource;
use crate::utils::error::Result;
use crate::utils::validation::validate_url;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Fetched(Value),
    Failed(String),
}

impl FetchOutcome {
    pub fn is_fetched(&self) -> bool {
        matches!(self, FetchOutcome::Fetched(_))
    }

    pub fn data(&self) -> Option<&Value> {
        match self {
            FetchOutcome::Fetched(data) => Some(data),
            FetchOutcome::Failed(_) => None,
        }
    }
}

/// GETs `url` and decodes the body as JSON. The payload shape is not checked.
pub async fn fetch_json<S>(source: &S, url: &str) -> Result<Value>
where
    S: JsonSource + ?Sized,
{
    validate_url(url)?;
    let body = source.get_body(url).await?;
    let data = serde_json::from_slice(&body)?;
    Ok(data)
}

pub async fn fetch_data<S>(source: &S, url: &str) -> FetchOutcome
where
    S: JsonSource + ?Sized,
{
    match fetch_json(source, url).await {
        Ok(data) => {
            tracing::info!("Data fetched: {}", data);
            FetchOutcome::Fetched(data)
        }
        Err(e) => {
            tracing::error!("Error fetching data: {}", e);
            FetchOutcome::Failed(e.to_string())
        }
    }
}
