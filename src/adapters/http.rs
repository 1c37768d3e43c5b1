use crate::domain::ports::JsonSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ReqwestSource {
    client: Client,
}

impl ReqwestSource {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl JsonSource for ReqwestSource {
    async fn get_body(&self, url: &str) -> Result<Vec<u8>> {
        tracing::debug!("Making request to: {}", url);
        let response = self.client.get(url).send().await?;
        // Status is logged but not enforced; the body decides success.
        tracing::debug!("Response status: {}", response.status());
        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}
