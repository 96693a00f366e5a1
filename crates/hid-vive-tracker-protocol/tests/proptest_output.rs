//! Property-based tests for Vive Tracker feature-report encoding.
//!
//! Verifies layout properties independent of specific values: the size byte
//! always matches the report length, every configuration field survives a
//! decode against the documented layout, and the trigger always lands in the
//! high byte of its wire field.

use proptest::prelude::*;
use vive_tracker_hid_protocol::{
    CONFIGURATION_BASE_REPORT_LEN, CONFIGURATION_EXTENDED_REPORT_LEN, ConfigurationProfile,
    FeatureReport, LIVE_STATE_REPORT_LEN, LiveState, LowPassFilter, TrackerButtons,
    decode_configuration, decode_live_state, encode_configuration, encode_live_state,
};

fn any_filter() -> impl Strategy<Value = Option<LowPassFilter>> {
    prop_oneof![
        Just(None),
        Just(Some(LowPassFilter::Hz184)),
        Just(Some(LowPassFilter::Hz5)),
        Just(Some(LowPassFilter::Hz10)),
        Just(Some(LowPassFilter::Hz20)),
    ]
}

fn any_profile() -> impl Strategy<Value = ConfigurationProfile> {
    (any::<u8>(), any::<bool>(), any::<u8>(), any_filter()).prop_map(
        |(host_type, charge_enabled, os_type, low_pass_filter)| ConfigurationProfile {
            host_type,
            charge_enabled,
            os_type,
            low_pass_filter,
        },
    )
}

fn any_live_state() -> impl Strategy<Value = LiveState> {
    (any::<u8>(), any::<i16>(), any::<i16>(), any::<u8>(), any::<u16>()).prop_map(
        |(buttons, pad_x, pad_y, trigger, battery_level)| {
            LiveState::new(
                TrackerButtons::from_bits(buttons),
                pad_x,
                pad_y,
                trigger,
                battery_level,
            )
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Byte 1 must equal the number of bytes after the two header bytes.
    #[test]
    fn prop_configuration_size_byte(profile in any_profile()) {
        let report = encode_configuration(&profile);
        let bytes = report.as_bytes();
        prop_assert_eq!(bytes.first().copied(), Some(0xB3u8));
        let size = bytes.get(1).copied().map(usize::from);
        prop_assert_eq!(size, Some(bytes.len() - 2));

        let expected_len = if profile.low_pass_filter.is_some() {
            CONFIGURATION_EXTENDED_REPORT_LEN
        } else {
            CONFIGURATION_BASE_REPORT_LEN
        };
        prop_assert_eq!(bytes.len(), expected_len);
    }

    /// Decoding against the documented layout recovers every field.
    #[test]
    fn prop_configuration_fields_recovered(profile in any_profile()) {
        let report = encode_configuration(&profile);
        prop_assert_eq!(decode_configuration(report.as_bytes()), Some(profile));
    }

    /// Encoding is deterministic.
    #[test]
    fn prop_configuration_deterministic(profile in any_profile()) {
        prop_assert_eq!(encode_configuration(&profile), encode_configuration(&profile));
    }

    /// Trigger field equals `trigger << 8`; its low byte is always zero.
    #[test]
    fn prop_trigger_in_high_byte(state in any_live_state()) {
        let [.., trigger_lo, trigger_hi, _, _] = encode_live_state(&state).to_array();
        let wire = u16::from_le_bytes([trigger_lo, trigger_hi]);
        prop_assert_eq!(wire, u16::from(state.trigger) << 8);
        prop_assert_eq!(trigger_lo, 0u8);
    }

    /// Fixed header, fixed size, tag index always zero, other fields copied.
    #[test]
    fn prop_live_state_layout(state in any_live_state()) {
        let report = encode_live_state(&state);
        let bytes = report.to_array();
        let [address, size, tag, buttons, x_lo, x_hi, y_lo, y_hi, _, _, battery_lo, battery_hi] =
            bytes;
        prop_assert_eq!(report.as_bytes().len(), LIVE_STATE_REPORT_LEN);
        prop_assert_eq!(address, 0xB4u8);
        prop_assert_eq!(size, 10u8);
        prop_assert_eq!(tag, 0u8);
        prop_assert_eq!(buttons, state.buttons.bits());
        prop_assert_eq!(i16::from_le_bytes([x_lo, x_hi]), state.pad_x);
        prop_assert_eq!(i16::from_le_bytes([y_lo, y_hi]), state.pad_y);
        prop_assert_eq!(u16::from_le_bytes([battery_lo, battery_hi]), state.battery_level);
        prop_assert_eq!(decode_live_state(&bytes), Some(state));
    }
}
