//! Device model: discovery and identity.

use crate::error::{Error, Result};
use crate::{SWITCH_PID, SWITCH_VID};
use serde::Serialize;
use tracing::{debug, info};

/// Information about a discovered switch.
#[derive(Debug, Clone, Serialize)]
pub struct DeviceInfo {
    pub vid: u16,
    pub pid: u16,
    pub path: String,
    pub serial: Option<String>,
}

/// Descriptor strings queried from an opened device.
///
/// Any of these may be absent if the firmware does not implement the
/// corresponding string descriptor.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Identity {
    pub manufacturer: Option<String>,
    pub product: Option<String>,
    pub serial: Option<String>,
}

/// Discover all attached switches matching the expected VID/PID.
pub fn discover_switches() -> Result<Vec<DeviceInfo>> {
    debug!("Starting HID device enumeration");
    let api = hidapi::HidApi::new().map_err(|e| Error::Hid(e.to_string()))?;

    let mut devices = Vec::new();
    for info in api.device_list() {
        if info.vendor_id() != SWITCH_VID || info.product_id() != SWITCH_PID {
            continue;
        }

        info!(
            vid = format_args!("0x{:04X}", info.vendor_id()),
            pid = format_args!("0x{:04X}", info.product_id()),
            path = %info.path().to_string_lossy(),
            "Found switch"
        );
        devices.push(DeviceInfo {
            vid: info.vendor_id(),
            pid: info.product_id(),
            path: info.path().to_string_lossy().into_owned(),
            serial: info.serial_number().map(|s| s.to_string()),
        });
    }

    debug!(count = devices.len(), "Device enumeration complete");
    Ok(devices)
}

/// Pick the single matching switch, refusing ambiguity.
///
/// Zero matches is `DeviceNotFound`; more than one is `AmbiguousDevice`
/// rather than silently driving whichever enumerated first.
pub fn select_single(mut devices: Vec<DeviceInfo>) -> Result<DeviceInfo> {
    match devices.pop() {
        None => Err(Error::DeviceNotFound {
            vid: SWITCH_VID,
            pid: SWITCH_PID,
        }),
        Some(device) if devices.is_empty() => Ok(device),
        Some(_) => Err(Error::AmbiguousDevice {
            vid: SWITCH_VID,
            pid: SWITCH_PID,
            count: devices.len() + 1,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(path: &str) -> DeviceInfo {
        DeviceInfo {
            vid: SWITCH_VID,
            pid: SWITCH_PID,
            path: path.to_string(),
            serial: None,
        }
    }

    #[test]
    fn select_single_accepts_one_match() {
        let selected = select_single(vec![info("/dev/hidraw3")]).unwrap();
        assert_eq!(selected.path, "/dev/hidraw3");
    }

    #[test]
    fn select_single_rejects_no_match() {
        let result = select_single(vec![]);
        assert!(matches!(result, Err(Error::DeviceNotFound { .. })));
    }

    #[test]
    fn select_single_rejects_multiple_matches() {
        let result = select_single(vec![info("/dev/hidraw3"), info("/dev/hidraw4")]);
        assert!(matches!(result, Err(Error::AmbiguousDevice { count: 2, .. })));
    }

    #[test]
    fn identity_defaults_to_absent_strings() {
        let id = Identity::default();
        assert!(id.manufacturer.is_none());
        assert!(id.product.is_none());
        assert!(id.serial.is_none());
    }
}
