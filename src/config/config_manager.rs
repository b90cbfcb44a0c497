use std::fs;
use std::path::{Path, PathBuf};
use url::Url;
use crate::config::constants::{API_URL_ENV, APP_URL_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::errors::{LeakDetectorError, LeakDetectorResult};
use crate::structs::config::config::Config;

const SAMPLE_CONFIG: &str = r#"# Leak Detector CLI Configuration

[api]
# Analysis API and web app locations
base_url = "https://api.leakdetector.io"
app_url = "https://app.leakdetector.io"
request_timeout_secs = 30

[auth]
# Access token is read before every request, so a rotated token is picked up
# without restarting. A session file takes precedence over the variable.
token_env = "LEAK_DETECTOR_ACCESS_TOKEN"
# session_file = "/home/user/.config/leak-detector/session"

[polling]
# One status request per interval until the analysis finishes
interval_ms = 1000
max_attempts = 240

# Network hiccups during one analysis before a warning is shown
transient_failure_threshold = 3

# Progress labels: scraping below the first cutoff, analyzing below the second
scraping_phase_polls = 10
analyzing_phase_polls = 30

# Pause before showing the finished report
navigation_grace_ms = 500

# Clear the hiccup counter after every successful poll instead of at loop end
reset_failures_on_success = false

[output]
open_browser = false
show_issues = true
"#;

pub struct ConfigManager;

impl ConfigManager {
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .unwrap_or_default()
    }

    pub fn load() -> LeakDetectorResult<Config> {
        let mut config = Self::load_from(&Self::config_path())?;
        Self::apply_env_overrides(&mut config);
        Ok(config)
    }

    /// Reads a config file, falling back to defaults when it does not exist.
    pub fn load_from(path: &Path) -> LeakDetectorResult<Config> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| LeakDetectorError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| LeakDetectorError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.message().to_string(),
        })
    }

    pub fn apply_env_overrides(config: &mut Config) {
        if let Some(url) = std::env::var(API_URL_ENV).ok().filter(|v| !v.trim().is_empty()) {
            config.api.base_url = url;
        }
        if let Some(url) = std::env::var(APP_URL_ENV).ok().filter(|v| !v.trim().is_empty()) {
            config.api.app_url = url;
        }
    }

    pub fn create_sample_config() -> LeakDetectorResult<PathBuf> {
        let path = Self::config_path();
        Self::write_sample_config(&path)?;
        Ok(path)
    }

    pub fn write_sample_config(path: &Path) -> LeakDetectorResult<()> {
        if path.exists() {
            return Err(LeakDetectorError::config_error(
                "configuration file already exists",
                None,
                Some(&format!("Edit {} or remove it first", path.display())),
            ));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, SAMPLE_CONFIG)?;
        log::info!("✅ Created sample config at: {}", path.display());
        Ok(())
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        for (field, value) in [("api.base_url", &config.api.base_url), ("api.app_url", &config.api.app_url)] {
            match Url::parse(value) {
                Ok(url) if matches!(url.scheme(), "http" | "https") => {}
                Ok(url) => errors.push(format!("{} must use http or https, got '{}'", field, url.scheme())),
                Err(e) => errors.push(format!("{} is not a valid URL ({}): {}", field, e, value)),
            }
        }

        if config.api.request_timeout_secs == 0 {
            errors.push("api.request_timeout_secs must be greater than 0".to_string());
        }

        let polling = &config.polling;
        if polling.interval_ms == 0 {
            errors.push("polling.interval_ms must be greater than 0".to_string());
        }
        if polling.max_attempts == 0 {
            errors.push("polling.max_attempts must be greater than 0".to_string());
        }
        if polling.transient_failure_threshold == 0 {
            errors.push("polling.transient_failure_threshold must be greater than 0".to_string());
        }
        if polling.scraping_phase_polls > polling.analyzing_phase_polls {
            errors.push(format!(
                "polling.scraping_phase_polls ({}) must not exceed polling.analyzing_phase_polls ({})",
                polling.scraping_phase_polls, polling.analyzing_phase_polls
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
