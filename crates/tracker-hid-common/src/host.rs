//! USB host capability consumed by the tracker driver.

use crate::{UsbHostError, UsbHostResult};
use serde::{Deserialize, Serialize};

/// HID class report types, as carried in the high byte of a SET_REPORT `wValue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum HidReportType {
    Input = 1,
    Output = 2,
    Feature = 3,
}

impl HidReportType {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Addressing for a HID SET_REPORT control transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureReportTarget {
    /// Control endpoint the request is issued on.
    pub endpoint: u8,
    /// Interface number placed in `wIndex`.
    pub interface: u8,
    pub report_type: HidReportType,
    /// Report ID placed in the low byte of `wValue`. Zero means unnumbered.
    pub report_id: u8,
}

impl FeatureReportTarget {
    /// Unnumbered feature report on the default control endpoint.
    pub const fn feature(interface: u8) -> Self {
        Self {
            endpoint: 0,
            interface,
            report_type: HidReportType::Feature,
            report_id: 0,
        }
    }

    /// `wValue` of the SET_REPORT request for this target.
    pub fn w_value(&self) -> u16 {
        u16::from_le_bytes([self.report_id, self.report_type.as_u8()])
    }

    /// Check that a backend bound to interface `bound` can deliver this report.
    ///
    /// Backends that open a single HID interface cannot redirect a transfer,
    /// and the tracker drops reports that arrive on the wrong interface without
    /// any status, so a mismatch has to fail here. Negative `bound` values
    /// (interface unknown to the OS) never match.
    pub fn check_bound_interface(&self, bound: i32) -> UsbHostResult<()> {
        if i32::from(self.interface) == bound {
            Ok(())
        } else {
            Err(UsbHostError::InterfaceMismatch {
                target: self.interface,
                bound,
            })
        }
    }
}

/// The USB host stack as seen by the tracker driver.
///
/// Implementations own enumeration and transfer scheduling. The driver only
/// drives the bus, asks whether the tracker is attached, and submits whole
/// feature reports. All calls happen on a single thread from the caller's
/// service loop.
pub trait UsbHost {
    /// Advance pending bus activity. Attach and detach are observed here.
    fn bus_service_step(&mut self);

    /// Whether a device object currently represents a live physical connection.
    fn is_attached(&self) -> bool;

    /// Counter incremented on every attach.
    ///
    /// Lets callers tell a fresh attach apart from the previous one even when
    /// a detach and re-attach happen between two observations.
    fn attach_generation(&self) -> u32;

    /// Submit a complete feature report. `Ok` means the host reported status 0.
    fn set_feature_report(&mut self, target: FeatureReportTarget, data: &[u8])
    -> UsbHostResult<()>;
}

impl<H: UsbHost + ?Sized> UsbHost for &mut H {
    fn bus_service_step(&mut self) {
        (**self).bus_service_step();
    }

    fn is_attached(&self) -> bool {
        (**self).is_attached()
    }

    fn attach_generation(&self) -> u32 {
        (**self).attach_generation()
    }

    fn set_feature_report(
        &mut self,
        target: FeatureReportTarget,
        data: &[u8],
    ) -> UsbHostResult<()> {
        (**self).set_feature_report(target, data)
    }
}

impl<H: UsbHost + ?Sized> UsbHost for Box<H> {
    fn bus_service_step(&mut self) {
        (**self).bus_service_step();
    }

    fn is_attached(&self) -> bool {
        (**self).is_attached()
    }

    fn attach_generation(&self) -> u32 {
        (**self).attach_generation()
    }

    fn set_feature_report(
        &mut self,
        target: FeatureReportTarget,
        data: &[u8],
    ) -> UsbHostResult<()> {
        (**self).set_feature_report(target, data)
    }
}
