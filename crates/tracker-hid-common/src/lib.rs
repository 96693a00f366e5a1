//! Common USB host plumbing for the Vive Tracker accessory driver.
//!
//! This crate provides the pieces shared between the protocol encoder and the
//! connection controller:
//!
//! - [`UsbHost`]: the capability the driver calls into (bus servicing,
//!   attachment queries, feature-report transfers)
//! - [`FeatureReportTarget`]: the fixed control-transfer addressing used for
//!   every tracker feature report
//! - [`ReportWriter`] / [`ReportReader`]: fixed-size little-endian field
//!   serialization independent of native struct layout
//! - [`mock::MockUsbHost`]: a recording host for tests
//! - [`DeviceSelector`]: which HID interface an enumerating backend binds to
//! - `hidapi_host::HidapiUsbHost` (feature `hidapi`): a desktop backend

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod device_info;
pub mod host;
pub mod mock;
pub mod report;

#[cfg(feature = "hidapi")]
pub mod hidapi_host;

pub use device_info::DeviceSelector;
pub use host::{FeatureReportTarget, HidReportType, UsbHost};
pub use report::{ReportReader, ReportWriter};

use thiserror::Error;

/// Status code reported by the host for a transfer that failed without a
/// more specific code of its own.
pub const GENERIC_TRANSFER_FAILURE: u32 = 0xFF;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsbHostError {
    /// The control transfer completed with a nonzero host status code.
    #[error("Feature report transfer failed with status {code:#04x}")]
    TransferFailed { code: u32 },

    #[error("Device disconnected")]
    Disconnected,

    #[error("Device not found: vendor={vendor_id:#06x}, product={product_id:#06x}")]
    DeviceNotFound { vendor_id: u16, product_id: u16 },

    /// The backend is bound to a different interface than the report addresses.
    #[error("Report for interface {target} cannot be sent on bound interface {bound}")]
    InterfaceMismatch { target: u8, bound: i32 },

    /// Captured report bytes do not form a complete report.
    #[error("Invalid report: {0}")]
    InvalidReport(String),

    #[error("HID error: {0}")]
    Hid(String),
}

impl UsbHostError {
    /// Numeric status for this failure. Never zero; zero means success on the wire.
    pub fn code(&self) -> u32 {
        match self {
            UsbHostError::TransferFailed { code } if *code != 0 => *code,
            UsbHostError::TransferFailed { .. } => GENERIC_TRANSFER_FAILURE,
            UsbHostError::Disconnected => 0xD0,
            UsbHostError::DeviceNotFound { .. } => 0xD1,
            UsbHostError::InterfaceMismatch { .. } => 0xD2,
            UsbHostError::InvalidReport(_) => 0xD3,
            UsbHostError::Hid(_) => GENERIC_TRANSFER_FAILURE,
        }
    }

    /// A transfer the host failed without a status code of its own.
    pub fn generic_transfer_failure() -> Self {
        UsbHostError::TransferFailed {
            code: GENERIC_TRANSFER_FAILURE,
        }
    }

    /// Whether the failure means the device is gone rather than a single
    /// transfer going wrong.
    pub fn is_device_unavailable(&self) -> bool {
        matches!(
            self,
            UsbHostError::Disconnected | UsbHostError::DeviceNotFound { .. }
        )
    }
}

pub type UsbHostResult<T> = Result<T, UsbHostError>;
