//! Controller configuration loaded from YAML.
//!
//! ```yaml
//! profile:
//!   host_type: 3
//!   charge_enabled: true
//!   os_type: 0
//!   low_pass_filter: 10hz   # omit for the base (5-byte) configuration report
//! device:
//!   vendor_id: 0x0BB4
//!   product_id: 0x06A3
//!   interface_number: 2
//! ```
//!
//! Every field is optional and falls back to the tracker defaults.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;
use vive_tracker_hid_common::DeviceSelector;
use vive_tracker_hid_protocol::{
    ConfigurationProfile, FEATURE_INTERFACE, VIVE_TRACKER_PRODUCT_ID, VIVE_TRACKER_VENDOR_ID,
};

/// Top-level controller configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrackerConfig {
    /// Configuration asserted on the tracker after every attach.
    pub profile: ConfigurationProfile,
    /// Which HID interface enumerating host backends bind to.
    pub device: DeviceConfig,
}

/// Device selection for host backends that enumerate HID devices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeviceConfig {
    pub vendor_id: u16,
    pub product_id: u16,
    /// Must name the feature interface; reports are addressed to it.
    pub interface_number: Option<u8>,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            vendor_id: VIVE_TRACKER_VENDOR_ID,
            product_id: VIVE_TRACKER_PRODUCT_ID,
            interface_number: Some(FEATURE_INTERFACE),
        }
    }
}

impl DeviceConfig {
    pub fn selector(&self) -> DeviceSelector {
        DeviceSelector {
            vendor_id: self.vendor_id,
            product_id: self.product_id,
            interface_number: self.interface_number,
        }
    }
}

impl TrackerConfig {
    /// Parse and validate a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: TrackerConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&yaml)?;
        debug!("Loaded tracker config from {}", path.display());
        Ok(config)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.profile.host_type == 0 {
            return Err(ConfigError::invalid(
                "profile.host_type",
                "host type 0 is not assigned",
            ));
        }
        if self.device.vendor_id == 0 {
            return Err(ConfigError::invalid("device.vendor_id", "must be nonzero"));
        }
        if self.device.product_id == 0 {
            return Err(ConfigError::invalid("device.product_id", "must be nonzero"));
        }
        if self.device.interface_number != Some(FEATURE_INTERFACE) {
            return Err(ConfigError::invalid(
                "device.interface_number",
                format!("must be the feature interface {FEATURE_INTERFACE}"),
            ));
        }
        Ok(())
    }
}
