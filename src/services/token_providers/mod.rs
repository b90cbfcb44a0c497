use std::path::PathBuf;
use std::sync::Arc;
use crate::structs::config::auth_config::AuthConfig;
use crate::traits::token_provider::TokenProvider;

pub mod env_token_provider;
pub mod session_file_token_provider;
pub mod static_token_provider;

use env_token_provider::EnvTokenProvider;
use session_file_token_provider::SessionFileTokenProvider;
use static_token_provider::StaticTokenProvider;

/// Picks a token source: explicit token, then session file, then environment variable.
pub fn from_config(auth: &AuthConfig, explicit_token: Option<String>) -> Arc<dyn TokenProvider> {
    if let Some(token) = explicit_token.filter(|t| !t.trim().is_empty()) {
        log::debug!("Using access token from command line");
        return Arc::new(StaticTokenProvider::new(token));
    }

    if let Some(path) = &auth.session_file {
        log::debug!("Using access token from session file {}", path);
        return Arc::new(SessionFileTokenProvider::new(PathBuf::from(path)));
    }

    log::debug!("Using access token from ${}", auth.token_env);
    Arc::new(EnvTokenProvider::new(auth.token_env.clone()))
}
