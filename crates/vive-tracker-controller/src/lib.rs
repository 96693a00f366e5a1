//! Vive Tracker accessory controller.
//!
//! Drives a single HTC Vive Tracker through a [`UsbHost`] capability:
//!
//! - [`monitor`]: attach -> initialize -> ready lifecycle, re-run on every attach
//! - [`controller`]: the public API, owning the configuration profile
//! - [`config`]: YAML configuration for the profile and device selection
//! - [`error`]: not-connected and transport failures with numeric status codes
//!
//! Everything runs on the caller's thread from
//! [`ViveTrackerController::service`]; there are no internal threads, timers
//! or locks.
//!
//! # Example
//!
//! ```
//! use vive_tracker_controller::{TrackerButtons, ViveTrackerController};
//! use vive_tracker_hid_common::mock::MockUsbHost;
//!
//! let mut tracker = ViveTrackerController::new(MockUsbHost::attached());
//! tracker.service();
//! assert!(tracker.is_ready());
//!
//! tracker
//!     .set_tracker_status(TrackerButtons::TRIGGER, 100, -100, 255, 0)
//!     .map_err(|e| e.code())?;
//! # Ok::<(), u32>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod controller;
pub mod error;
pub mod monitor;

pub use config::{DeviceConfig, TrackerConfig};
pub use controller::ViveTrackerController;
pub use error::{ConfigError, NOT_CONNECTED_CODE, TrackerError};
pub use monitor::{ConnectionMonitor, ConnectionState};

pub use vive_tracker_hid_common::UsbHost;
#[cfg(feature = "hidapi")]
pub use vive_tracker_hid_common::hidapi_host::HidapiUsbHost;
pub use vive_tracker_hid_protocol::{
    ConfigurationProfile, LiveState, LowPassFilter, TrackerButtons,
};

/// Open the tracker described by `config` through hidapi.
#[cfg(feature = "hidapi")]
pub fn open_hidapi(
    config: &TrackerConfig,
) -> Result<ViveTrackerController<HidapiUsbHost>, TrackerError> {
    let host = HidapiUsbHost::new(config.device.selector())?;
    Ok(ViveTrackerController::from_config(host, config))
}
