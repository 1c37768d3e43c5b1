use crate::utils::error::Result;
use async_trait::async_trait;

/// Turns a URL into the raw response body. The fetch snippet decodes it.
#[async_trait]
pub trait JsonSource: Send + Sync {
    async fn get_body(&self, url: &str) -> Result<Vec<u8>>;
}
