//! Error types for usb-switch-core.

use thiserror::Error;

/// Core library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// HID device communication failure.
    #[error("HID error: {0}")]
    Hid(String),

    /// No switch with the expected vendor/product ID is attached.
    #[error("no switch found (VID=0x{vid:04X} PID=0x{pid:04X})")]
    DeviceNotFound { vid: u16, pid: u16 },

    /// More than one matching switch is attached; refusing to pick one.
    #[error("{count} switches match VID=0x{vid:04X} PID=0x{pid:04X}; expected exactly one")]
    AmbiguousDevice { vid: u16, pid: u16, count: usize },

    /// Permission or driver-claim failure while opening the device.
    #[error("device access denied: {0}")]
    AccessDenied(String),

    /// The device rejected or did not acknowledge an output report.
    #[error("report write failed: {0}")]
    Write(String),

    /// Operation attempted on a handle that has already been released.
    #[error("device handle already released")]
    Closed,
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, Error>;
