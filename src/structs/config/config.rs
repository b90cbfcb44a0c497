use serde::{Deserialize, Serialize};
use crate::structs::config::api_config::ApiConfig;
use crate::structs::config::auth_config::AuthConfig;
use crate::structs::config::output_config::OutputConfig;
use crate::structs::config::polling_config::PollingConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub polling: PollingConfig,

    #[serde(default)]
    pub output: OutputConfig,
}
