//! Switch port abstraction.
//!
//! Provides a trait-based seam between the sequencing logic and the HID
//! layer so that real hardware and mock devices share the same interface.

use crate::device::Identity;
use crate::error::Result;
use crate::report::SwitchReport;

/// Abstraction over an opened switch handle.
pub trait SwitchPort {
    /// Query the device descriptor strings.
    fn identity(&self) -> Result<Identity>;

    /// Configure whether writes block until the device confirms them.
    ///
    /// The power-cycle sequence requires blocking mode so each report is
    /// acknowledged before the next step runs.
    fn set_blocking(&mut self, blocking: bool) -> Result<()>;

    /// Send one output report to the device.
    fn write_report(&mut self, report: &SwitchReport) -> Result<()>;

    /// Release the underlying handle. Safe to call more than once; any
    /// later read or write fails with `Error::Closed`.
    fn close(&mut self);
}


#[cfg(test)]
mod tests {
    use super::mock::MockPort;
    use super::*;
    use crate::error::Error;
    use crate::report::{SwitchReport, SwitchState};

    #[test]
    fn mock_records_writes_in_order() {
        let mut port = MockPort::new();
        port.write_report(&SwitchReport::new(SwitchState::Off)).unwrap();
        port.write_report(&SwitchReport::new(SwitchState::On)).unwrap();
        assert_eq!(port.payloads(), vec![vec![1, 0, 0], vec![1, 0, 1]]);
    }

    #[test]
    fn mock_close_is_idempotent() {
        let mut port = MockPort::new();
        port.close();
        port.close();
        assert!(port.is_closed());
    }

    #[test]
    fn mock_rejects_write_after_close() {
        let mut port = MockPort::new();
        port.close();
        let result = port.write_report(&SwitchReport::new(SwitchState::On));
        assert!(matches!(result, Err(Error::Closed)));
    }

    #[test]
    fn mock_injected_failure_fires_at_index() {
        let mut port = MockPort::new();
        port.fail_write_at(1);
        port.write_report(&SwitchReport::new(SwitchState::Off)).unwrap();
        let result = port.write_report(&SwitchReport::new(SwitchState::On));
        assert!(matches!(result, Err(Error::Write(_))));
        assert_eq!(port.payloads().len(), 1);
    }
}
