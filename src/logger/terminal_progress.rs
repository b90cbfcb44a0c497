use crate::enums::controller_state::ControllerState;
use crate::errors::LeakDetectorError;
use crate::logger::animated_logger::AnimatedLogger;
use crate::structs::handoff::Handoff;
use crate::traits::progress_observer::ProgressObserver;

/// Renders controller progress as a spinner line on stderr.
pub struct TerminalProgress {
    logger: AnimatedLogger,
}

impl TerminalProgress {
    pub fn new() -> Self {
        Self {
            logger: AnimatedLogger::new(ControllerState::Idle.message().to_string()),
        }
    }

    pub fn start(&self) {
        self.logger.start();
    }

    pub async fn finish(&self, message: &str) {
        self.logger.stop(message).await;
    }

    pub async fn abandon(&self) {
        self.logger.clear().await;
    }

    pub fn status_line(state: ControllerState, progress: u8) -> String {
        format!("[{:>3}%] {} {}", progress, state.message(), state.description())
    }
}

impl Default for TerminalProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressObserver for TerminalProgress {
    fn on_state_change(&self, state: ControllerState, progress: u8) {
        if state != ControllerState::Idle {
            self.logger.set_message(Self::status_line(state, progress));
        }
    }

    fn on_advisory(&self, message: &str) {
        self.logger.println(&format!("⚠️  {}", message));
    }

    fn on_error(&self, error: &LeakDetectorError) {
        log::debug!("Analysis run ended with error: {}", error.technical_details());
    }

    fn on_navigate(&self, handoff: &Handoff) {
        log::info!("➡️  Report ready at {}", handoff.report_path());
    }
}
