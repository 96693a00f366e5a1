//! Error types for the tracker controller.

use std::path::PathBuf;
use vive_tracker_hid_common::UsbHostError;

/// Status code returned for a live-state update while the tracker is not ready.
///
/// Accessory firmware reports this as `-1` in an unsigned 32-bit status.
pub const NOT_CONNECTED_CODE: u32 = u32::MAX;

/// Failures of controller operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrackerError {
    /// The tracker is not attached and initialized. Nothing was transmitted.
    #[error("Vive tracker not connected")]
    NotConnected,

    /// The host rejected the feature report. Carried unchanged from the host.
    #[error("Transport error: {0}")]
    Transport(#[from] UsbHostError),
}

impl TrackerError {
    /// Numeric status for this failure. Never zero.
    pub fn code(&self) -> u32 {
        match self {
            TrackerError::NotConnected => NOT_CONNECTED_CODE,
            TrackerError::Transport(err) => err.code(),
        }
    }

    /// Whether calling again after further `service()` steps might succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            TrackerError::NotConnected => true,
            TrackerError::Transport(err) => matches!(err, UsbHostError::TransferFailed { .. }),
        }
    }

    /// The host error, if the failure happened at transmission.
    pub fn transport(&self) -> Option<&UsbHostError> {
        match self {
            TrackerError::Transport(err) => Some(err),
            TrackerError::NotConnected => None,
        }
    }
}

/// Failures loading or validating a [`crate::TrackerConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_connected_code() {
        assert_eq!(TrackerError::NotConnected.code(), 0xFFFF_FFFF);
        assert_eq!(
            format!("{}", TrackerError::NotConnected),
            "Vive tracker not connected"
        );
        assert!(TrackerError::NotConnected.transport().is_none());
    }

    #[test]
    fn test_transport_code_passes_through() {
        let err: TrackerError = UsbHostError::TransferFailed { code: 0x0D }.into();
        assert_eq!(err.code(), 0x0D);
        assert!(err.is_retryable());
        assert_eq!(
            err.transport(),
            Some(&UsbHostError::TransferFailed { code: 0x0D })
        );
        assert_eq!(
            format!("{err}"),
            "Transport error: Feature report transfer failed with status 0x0d"
        );
    }

    #[test]
    fn test_disconnected_not_retryable() {
        let err = TrackerError::from(UsbHostError::Disconnected);
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_host_transfer_failure_is_retryable() {
        let err = TrackerError::from(UsbHostError::generic_transfer_failure());
        assert!(err.is_retryable());
        assert_eq!(err.code(), 0xFF);
    }

    #[test]
    fn test_interface_mismatch_not_retryable() {
        let err = TrackerError::from(UsbHostError::InterfaceMismatch {
            target: 2,
            bound: 0,
        });
        assert!(!err.is_retryable());
        assert_eq!(err.code(), 0xD2);
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::invalid("device.vendor_id", "must be nonzero");
        assert_eq!(
            format!("{err}"),
            "Invalid value for device.vendor_id: must be nonzero"
        );
    }
}
