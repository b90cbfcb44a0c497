use std::fmt;
use serde::{Deserialize, Serialize};

/// Externally observable states of the analysis controller.
///
/// `Scraping`, `Analyzing` and `Finalizing` label the same poll loop by how
/// many polls have elapsed; they are for display only.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, Hash, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ControllerState {
    #[default]
    Idle,
    Validating,
    Submitting,
    Analyzing,
    Scraping,
    Finalizing,
    Completed,
}

impl ControllerState {
    /// Display label for the poll loop after `attempts` polls.
    pub const fn for_poll(attempts: u32, scraping_phase_polls: u32, analyzing_phase_polls: u32) -> Self {
        if attempts < scraping_phase_polls {
            Self::Scraping
        } else if attempts < analyzing_phase_polls {
            Self::Analyzing
        } else {
            Self::Finalizing
        }
    }

    pub const fn is_polling(self) -> bool {
        matches!(self, Self::Analyzing | Self::Scraping | Self::Finalizing)
    }

    pub const fn message(self) -> &'static str {
        match self {
            Self::Idle => "Ready",
            Self::Validating => "Validating URL...",
            Self::Submitting => "Starting analysis...",
            Self::Scraping => "Capturing your page...",
            Self::Analyzing => "AI is analyzing your page...",
            Self::Finalizing => "Generating your report...",
            Self::Completed => "Analysis complete!",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Idle => "Waiting for a URL",
            Self::Validating => "Checking the URL format",
            Self::Submitting => "Initializing the analysis engine",
            Self::Scraping => "Taking a screenshot and extracting content",
            Self::Analyzing => "Evaluating 8 conversion dimensions",
            Self::Finalizing => "Creating your personalized report",
            Self::Completed => "Redirecting to your report...",
        }
    }
}

impl fmt::Display for ControllerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Validating => "validating",
            Self::Submitting => "submitting",
            Self::Analyzing => "analyzing",
            Self::Scraping => "scraping",
            Self::Finalizing => "finalizing",
            Self::Completed => "completed",
        };
        write!(f, "{}", name)
    }
}
