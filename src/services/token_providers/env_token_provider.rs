use async_trait::async_trait;
use crate::errors::{LeakDetectorError, LeakDetectorResult};
use crate::traits::token_provider::TokenProvider;

/// Reads the token from an environment variable on every call.
pub struct EnvTokenProvider {
    variable: String,
}

impl EnvTokenProvider {
    pub const fn new(variable: String) -> Self {
        Self { variable }
    }
}

#[async_trait]
impl TokenProvider for EnvTokenProvider {
    async fn access_token(&self) -> LeakDetectorResult<String> {
        match std::env::var(&self.variable) {
            Ok(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
            _ => Err(LeakDetectorError::AuthError {
                reason: format!("no access token found in ${}", self.variable),
            }),
        }
    }
}
