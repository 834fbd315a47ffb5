//! usb-switch-core: USB HID relay switch control.
//!
//! This crate provides the core logic for driving a single-channel USB HID
//! relay switch: device discovery, the 3-byte output report format, and the
//! off/delay/on power-cycle sequence.

pub mod device;
pub mod error;
pub mod hid;
pub mod port;
pub mod report;
pub mod sequence;

/// USB Vendor ID of the switch (Nordic Semiconductor development VID).
pub const SWITCH_VID: u16 = 0x1915;

/// USB Product ID of the switch firmware.
pub const SWITCH_PID: u16 = 0x1337;
