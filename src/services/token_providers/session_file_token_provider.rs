use std::path::PathBuf;
use async_trait::async_trait;
use crate::errors::{LeakDetectorError, LeakDetectorResult};
use crate::traits::token_provider::TokenProvider;

/// Reads the token from a file kept fresh by an external session helper.
///
/// The file is re-read on every call so rotated tokens are picked up.
pub struct SessionFileTokenProvider {
    path: PathBuf,
}

impl SessionFileTokenProvider {
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl TokenProvider for SessionFileTokenProvider {
    async fn access_token(&self) -> LeakDetectorResult<String> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| LeakDetectorError::AuthError {
            reason: format!("cannot read session file {}: {}", self.path.display(), e),
        })?;

        let token = content.trim();
        if token.is_empty() {
            return Err(LeakDetectorError::AuthError {
                reason: format!("session file {} is empty", self.path.display()),
            });
        }
        Ok(token.to_string())
    }
}
