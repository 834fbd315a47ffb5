//! hidapi-backed switch port.

use crate::device::{self, DeviceInfo, Identity};
use crate::error::{Error, Result};
use crate::port::SwitchPort;
use crate::report::{SwitchReport, REPORT_LEN};
use std::ffi::CString;
use tracing::{debug, trace};

/// An opened switch handle backed by a real HID device.
///
/// The OS handle is released when the value is dropped or when `close` is
/// called, whichever comes first.
pub struct HidSwitch {
    device: Option<hidapi::HidDevice>,
    info: DeviceInfo,
}

impl HidSwitch {
    /// Open the attached switch.
    ///
    /// Enumerates matching devices first and refuses to proceed unless
    /// exactly one switch is attached, then opens it by platform path.
    pub fn open() -> Result<Self> {
        let selected = device::select_single(device::discover_switches()?)?;

        let api = hidapi::HidApi::new().map_err(|e| Error::Hid(e.to_string()))?;
        let path = CString::new(selected.path.clone())
            .map_err(|e| Error::Hid(format!("device path: {e}")))?;
        let handle = api
            .open_path(&path)
            .map_err(|e| classify_open_error(&e.to_string()))?;

        debug!(path = %selected.path, "Opened switch");
        Ok(Self {
            device: Some(handle),
            info: selected,
        })
    }

    /// Enumeration info for the opened device.
    pub fn info(&self) -> &DeviceInfo {
        &self.info
    }

    fn handle(&self) -> Result<&hidapi::HidDevice> {
        self.device.as_ref().ok_or(Error::Closed)
    }
}

impl SwitchPort for HidSwitch {
    fn identity(&self) -> Result<Identity> {
        let handle = self.handle()?;
        Ok(Identity {
            manufacturer: handle
                .get_manufacturer_string()
                .map_err(|e| Error::Hid(e.to_string()))?,
            product: handle
                .get_product_string()
                .map_err(|e| Error::Hid(e.to_string()))?,
            serial: handle
                .get_serial_number_string()
                .map_err(|e| Error::Hid(e.to_string()))?,
        })
    }

    fn set_blocking(&mut self, blocking: bool) -> Result<()> {
        self.handle()?
            .set_blocking_mode(blocking)
            .map_err(|e| Error::Hid(e.to_string()))
    }

    fn write_report(&mut self, report: &SwitchReport) -> Result<()> {
        let data = report.encode();
        trace!(report_hex = format_args!("{:02X?}", data), "switch TX");

        let written = self
            .handle()?
            .write(&data)
            .map_err(|e| Error::Write(e.to_string()))?;

        if written != REPORT_LEN {
            return Err(Error::Write(format!(
                "short write: device accepted {written} of {REPORT_LEN} bytes"
            )));
        }
        Ok(())
    }

    fn close(&mut self) {
        if self.device.take().is_some() {
            debug!(path = %self.info.path, "Released switch handle");
        }
    }
}

/// Map an open failure to the error taxonomy.
///
/// hidapi surfaces OS errors as strings only, so permission failures are
/// recognized by message substring.
fn classify_open_error(msg: &str) -> Error {
    let lower = msg.to_lowercase();
    if lower.contains("permission")
        || lower.contains("access denied")
        || lower.contains("access is denied")
    {
        Error::AccessDenied(msg.to_string())
    } else {
        Error::Hid(msg.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_permission_message() {
        let err = classify_open_error("hidraw: Permission denied");
        assert!(matches!(err, Error::AccessDenied(_)));
    }

    #[test]
    fn classify_windows_access_message() {
        let err = classify_open_error("Access is denied. (os error 5)");
        assert!(matches!(err, Error::AccessDenied(_)));
    }

    #[test]
    fn classify_other_message_as_hid() {
        let err = classify_open_error("hid_open_path failed");
        assert!(matches!(err, Error::Hid(_)));
    }
}
