//! The power-cycle sequence.
//!
//! The operational logic of the tool: switch the relay off, hold for a
//! fixed delay, switch it back on, and release the handle. Strictly
//! sequential, no retry; a failed step aborts the remainder, but the
//! handle is closed on every exit path.

use crate::error::Result;
use crate::port::SwitchPort;
use crate::report::{SwitchReport, SwitchState};
use std::time::Duration;
use tracing::info;

/// Pause between the off and on writes.
///
/// A coarse wall-clock delay, long enough for the switched equipment to
/// fully lose power. Deliberately a plain blocking sleep, not a timer.
pub const RESTART_DELAY: Duration = Duration::from_secs(2);

/// Phases of the power-cycle sequence, reported just before each write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CyclePhase {
    SwitchingOff,
    SwitchingOn,
}

impl CyclePhase {
    /// Console line announcing this phase.
    pub fn announcement(&self) -> &'static str {
        match self {
            Self::SwitchingOff => "turn off..",
            Self::SwitchingOn => "turn on..",
        }
    }
}

/// Set channel 0 to the given state with a single report write.
pub fn set_switch(port: &mut dyn SwitchPort, state: SwitchState) -> Result<()> {
    info!(%state, "Setting switch");
    port.write_report(&SwitchReport::new(state))
}

/// Run the full off/delay/on sequence, then release the port.
///
/// `progress` is invoked just before each write so a caller can announce
/// the phase as it happens. The port is closed unconditionally, including
/// when a step fails; the first error is returned after close.
pub fn power_cycle(
    port: &mut dyn SwitchPort,
    delay: Duration,
    mut progress: impl FnMut(CyclePhase),
) -> Result<()> {
    let outcome = run_sequence(port, delay, &mut progress);
    port.close();
    outcome
}

fn run_sequence(
    port: &mut dyn SwitchPort,
    delay: Duration,
    progress: &mut impl FnMut(CyclePhase),
) -> Result<()> {
    port.set_blocking(true)?;

    progress(CyclePhase::SwitchingOff);
    set_switch(port, SwitchState::Off)?;

    std::thread::sleep(delay);

    progress(CyclePhase::SwitchingOn);
    set_switch(port, SwitchState::On)
}
