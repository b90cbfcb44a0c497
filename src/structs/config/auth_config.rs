use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// Environment variable holding the access token.
    #[serde(default = "ConfigHelper::default_token_env")]
    pub token_env: String,

    /// File rewritten by an external session helper. Takes precedence over `token_env`.
    #[serde(default)]
    pub session_file: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_env: ConfigHelper::default_token_env(),
            session_file: None,
        }
    }
}
