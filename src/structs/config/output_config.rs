use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Open the finished report in the web app.
    #[serde(default)]
    pub open_browser: bool,

    #[serde(default = "ConfigHelper::default_show_issues")]
    pub show_issues: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            open_browser: false,
            show_issues: ConfigHelper::default_show_issues(),
        }
    }
}
