use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the analysis API.
    #[serde(default = "ConfigHelper::default_api_url")]
    pub base_url: String,

    /// Base URL of the web app, used for report links.
    #[serde(default = "ConfigHelper::default_app_url")]
    pub app_url: String,

    #[serde(default = "ConfigHelper::default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: ConfigHelper::default_api_url(),
            app_url: ConfigHelper::default_app_url(),
            request_timeout_secs: ConfigHelper::default_request_timeout_secs(),
        }
    }
}
