use crate::enums::controller_state::ControllerState;
use crate::errors::LeakDetectorError;
use crate::structs::handoff::Handoff;

/// Presentation hooks driven by the analysis controller.
pub trait ProgressObserver: Send + Sync {
    fn on_state_change(&self, state: ControllerState, progress: u8);

    /// Non-blocking warning; polling continues.
    fn on_advisory(&self, message: &str);

    /// Called once per failed run, just before the controller returns to idle.
    fn on_error(&self, error: &LeakDetectorError);

    fn on_navigate(&self, handoff: &Handoff);
}

/// Observer that ignores every event.
pub struct SilentObserver;

impl ProgressObserver for SilentObserver {
    fn on_state_change(&self, _state: ControllerState, _progress: u8) {}

    fn on_advisory(&self, _message: &str) {}

    fn on_error(&self, _error: &LeakDetectorError) {}

    fn on_navigate(&self, _handoff: &Handoff) {}
}
