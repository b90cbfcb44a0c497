use async_trait::async_trait;
use crate::errors::LeakDetectorResult;

/// Source of bearer tokens for the analysis API.
///
/// Called before every request; sessions may rotate tokens between calls.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn access_token(&self) -> LeakDetectorResult<String>;
}
