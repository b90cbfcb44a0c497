use async_trait::async_trait;
use crate::errors::LeakDetectorResult;
use crate::traits::token_provider::TokenProvider;

/// A fixed token, e.g. passed with `--token`.
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into() }
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn access_token(&self) -> LeakDetectorResult<String> {
        Ok(self.token.clone())
    }
}
