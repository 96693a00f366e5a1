//! Vive Tracker feature report encoding.
//!
//! All encoders are pure, infallible and allocation-free. Each call builds a
//! fresh fixed-size report; nothing is retained between sends.

use crate::ids::{FEATURE_INTERFACE, SINGLE_TRACKER_TAG_INDEX, payload_sizes, report_ids};
use crate::types::{ConfigurationProfile, LiveState};
use vive_tracker_hid_common::{FeatureReportTarget, ReportWriter};

/// Wire size of the base configuration report (no filter selector).
pub const CONFIGURATION_BASE_REPORT_LEN: usize = 5;

/// Wire size of the extended configuration report (with filter selector).
pub const CONFIGURATION_EXTENDED_REPORT_LEN: usize = 6;

/// Wire size of the accessory state report.
pub const LIVE_STATE_REPORT_LEN: usize = 12;

/// Control-transfer addressing shared by every tracker feature report:
/// endpoint 0, interface 2, report type Feature, report ID 0.
pub const FEATURE_REPORT_TARGET: FeatureReportTarget =
    FeatureReportTarget::feature(FEATURE_INTERFACE);

/// A complete, ready-to-send feature report.
pub trait FeatureReport {
    /// Report address (byte 0).
    fn address(&self) -> u8;

    /// The exact bytes to transmit.
    fn as_bytes(&self) -> &[u8];
}

/// Encoded 0xB3 configuration report, 5 or 6 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigurationReport {
    bytes: [u8; CONFIGURATION_EXTENDED_REPORT_LEN],
    len: usize,
}

impl ConfigurationReport {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_extended(&self) -> bool {
        self.len == CONFIGURATION_EXTENDED_REPORT_LEN
    }
}

impl FeatureReport for ConfigurationReport {
    fn address(&self) -> u8 {
        report_ids::CONFIGURATION
    }

    fn as_bytes(&self) -> &[u8] {
        self.bytes.get(..self.len).unwrap_or(&self.bytes)
    }
}

/// Encoded 0xB4 accessory state report, always 12 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiveStateReport {
    bytes: [u8; LIVE_STATE_REPORT_LEN],
}

impl LiveStateReport {
    pub fn to_array(self) -> [u8; LIVE_STATE_REPORT_LEN] {
        self.bytes
    }
}

impl FeatureReport for LiveStateReport {
    fn address(&self) -> u8 {
        report_ids::LIVE_STATE
    }

    fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Encode a host configuration profile.
///
/// Base layout (5 bytes):
/// - Byte 0: `0xB3`
/// - Byte 1: payload size `3`
/// - Byte 2: host type
/// - Byte 3: charge enable (0/1)
/// - Byte 4: OS type
///
/// The extended layout (6 bytes) sets byte 1 to `4` and appends the
/// low-pass filter selector as byte 5.
pub fn encode_configuration(profile: &ConfigurationProfile) -> ConfigurationReport {
    let size = match profile.low_pass_filter {
        Some(_) => payload_sizes::CONFIGURATION_EXTENDED,
        None => payload_sizes::CONFIGURATION_BASE,
    };

    let mut writer = ReportWriter::<CONFIGURATION_EXTENDED_REPORT_LEN>::new();
    writer
        .write_u8(report_ids::CONFIGURATION)
        .write_u8(size)
        .write_u8(profile.host_type)
        .write_bool(profile.charge_enabled)
        .write_u8(profile.os_type);
    if let Some(filter) = profile.low_pass_filter {
        writer.write_u8(filter.as_u8());
    }

    let len = writer.len();
    ConfigurationReport {
        bytes: writer.into_inner(),
        len,
    }
}

/// Encode one accessory state update.
///
/// Layout (12 bytes, little-endian):
/// - Byte 0: `0xB4`
/// - Byte 1: payload size `10`
/// - Byte 2: tag index (always 0)
/// - Byte 3: button bitmask
/// - Bytes 4-5: trackpad X (i16)
/// - Bytes 6-7: trackpad Y (i16)
/// - Bytes 8-9: trigger (u16, see [`trigger_to_wire`])
/// - Bytes 10-11: battery level (u16)
pub fn encode_live_state(state: &LiveState) -> LiveStateReport {
    let mut writer = ReportWriter::<LIVE_STATE_REPORT_LEN>::new();
    writer
        .write_u8(report_ids::LIVE_STATE)
        .write_u8(payload_sizes::LIVE_STATE)
        .write_u8(SINGLE_TRACKER_TAG_INDEX)
        .write_u8(state.buttons.bits())
        .write_i16_le(state.pad_x)
        .write_i16_le(state.pad_y)
        .write_u16_le(trigger_to_wire(state.trigger))
        .write_u16_le(state.battery_level);

    LiveStateReport {
        bytes: writer.into_inner(),
    }
}

/// Place the 8-bit trigger in the high byte of the 16-bit wire field.
///
/// HTC documents a 16-bit trigger, but tracker firmware only honours the high
/// byte. The low byte is always zero; sub-step resolution is not available.
#[inline]
pub const fn trigger_to_wire(trigger: u8) -> u16 {
    (trigger as u16) << 8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LowPassFilter, TrackerButtons};
    use vive_tracker_hid_common::HidReportType;

    #[test]
    fn test_default_profile_base_report() {
        let report = encode_configuration(&ConfigurationProfile::default());
        assert_eq!(report.as_bytes(), &[0xB3, 0x03, 0x03, 0x00, 0x00]);
        assert_eq!(report.len(), CONFIGURATION_BASE_REPORT_LEN);
        assert!(!report.is_extended());
        assert_eq!(report.address(), 0xB3);
    }

    #[test]
    fn test_extended_report_appends_filter() {
        let profile =
            ConfigurationProfile::new(3, true, 1).with_low_pass_filter(LowPassFilter::Hz20);
        let report = encode_configuration(&profile);
        assert_eq!(report.as_bytes(), &[0xB3, 0x04, 0x03, 0x01, 0x01, 0x03]);
        assert!(report.is_extended());
    }

    #[test]
    fn test_size_byte_matches_length() {
        for profile in [
            ConfigurationProfile::default(),
            ConfigurationProfile::default().with_low_pass_filter(LowPassFilter::Hz5),
        ] {
            let report = encode_configuration(&profile);
            let bytes = report.as_bytes();
            assert_eq!(bytes.get(1).map(|size| usize::from(*size) + 2), Some(bytes.len()));
        }
    }

    #[test]
    fn test_live_state_layout() {
        let state = LiveState::new(TrackerButtons::TRIGGER, 100, -100, 255, 0);
        let report = encode_live_state(&state);
        assert_eq!(
            report.to_array(),
            [0xB4, 0x0A, 0x00, 0x01, 0x64, 0x00, 0x9C, 0xFF, 0x00, 0xFF, 0x00, 0x00]
        );
        assert_eq!(report.address(), 0xB4);
    }

    #[test]
    fn test_live_state_battery_little_endian() {
        let state = LiveState {
            battery_level: 0x1234,
            ..LiveState::default()
        };
        let bytes = encode_live_state(&state).to_array();
        assert_eq!(bytes.get(10..), Some([0x34, 0x12].as_slice()));
    }

    #[test]
    fn test_trigger_shift() {
        assert_eq!(trigger_to_wire(0), 0x0000);
        assert_eq!(trigger_to_wire(1), 0x0100);
        assert_eq!(trigger_to_wire(0x80), 0x8000);
        assert_eq!(trigger_to_wire(255), 0xFF00);
    }

    #[test]
    fn test_feature_report_target() {
        assert_eq!(FEATURE_REPORT_TARGET.endpoint, 0);
        assert_eq!(FEATURE_REPORT_TARGET.interface, 2);
        assert_eq!(FEATURE_REPORT_TARGET.report_type, HidReportType::Feature);
        assert_eq!(FEATURE_REPORT_TARGET.report_id, 0);
    }
}
