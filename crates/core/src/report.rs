//! Output report encoding for the switch.
//!
//! The firmware accepts a single fixed-format 3-byte output report:
//! `[report ID, channel, state]` with report ID always 0x01. State 0 opens
//! the relay (off), state 1 closes it (on).

/// Report ID of the switch output report.
pub const REPORT_ID: u8 = 0x01;

/// Output report length (including report ID).
pub const REPORT_LEN: usize = 3;

/// The only relay channel the shipped firmware exposes.
pub const DEFAULT_CHANNEL: u8 = 0x00;

/// Desired relay state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SwitchState {
    Off = 0,
    On = 1,
}

impl SwitchState {
    /// Raw state byte as it appears on the wire.
    pub fn as_byte(&self) -> u8 {
        *self as u8
    }
}

impl std::fmt::Display for SwitchState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Off => write!(f, "off"),
            Self::On => write!(f, "on"),
        }
    }
}

/// A switch output report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchReport {
    /// Relay channel. The wire format carries it; only channel 0 exists in
    /// current firmware.
    pub channel: u8,
    /// Desired state for the channel.
    pub state: SwitchState,
}

impl SwitchReport {
    /// Create a report for the default channel.
    pub fn new(state: SwitchState) -> Self {
        Self {
            channel: DEFAULT_CHANNEL,
            state,
        }
    }

    /// Encode into the 3-byte report sent to the device.
    pub fn encode(&self) -> [u8; REPORT_LEN] {
        [REPORT_ID, self.channel, self.state.as_byte()]
    }
}
