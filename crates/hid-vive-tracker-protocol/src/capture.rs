//! Decoding of captured outbound feature reports.
//!
//! The tracker sends nothing back to the accessory, so these helpers never see
//! device telemetry. They recover the logical values from bytes this driver
//! (or another accessory) put on the bus, e.g. from a USB capture.

use crate::ids::{payload_sizes, report_ids};
use crate::types::{ConfigurationProfile, LiveState, LowPassFilter, TrackerButtons};
use vive_tracker_hid_common::{ReportReader, UsbHostResult};

/// Decode a 0xB3 configuration report. Returns `None` for any other address,
/// an unknown payload size, a length that disagrees with the size byte, or an
/// unknown filter selector.
pub fn decode_configuration(bytes: &[u8]) -> Option<ConfigurationProfile> {
    let mut reader = ReportReader::new(bytes);
    if reader.read_u8().ok()? != report_ids::CONFIGURATION {
        return None;
    }
    let size = reader.read_u8().ok()?;
    if usize::from(size) != reader.remaining() {
        return None;
    }

    let host_type = reader.read_u8().ok()?;
    let charge_enabled = reader.read_u8().ok()? != 0;
    let os_type = reader.read_u8().ok()?;
    let low_pass_filter = match size {
        payload_sizes::CONFIGURATION_BASE => None,
        payload_sizes::CONFIGURATION_EXTENDED => {
            Some(LowPassFilter::from_u8(reader.read_u8().ok()?)?)
        }
        _ => return None,
    };

    Some(ConfigurationProfile {
        host_type,
        charge_enabled,
        os_type,
        low_pass_filter,
    })
}

/// Decode a 0xB4 accessory state report.
///
/// The trigger is recovered from the high byte of its wire field; a nonzero
/// low byte (never produced by this driver) is discarded.
pub fn decode_live_state(bytes: &[u8]) -> Option<LiveState> {
    read_live_state(bytes).ok().flatten()
}

fn read_live_state(bytes: &[u8]) -> UsbHostResult<Option<LiveState>> {
    let mut reader = ReportReader::new(bytes);
    if reader.read_u8()? != report_ids::LIVE_STATE
        || reader.read_u8()? != payload_sizes::LIVE_STATE
        || usize::from(payload_sizes::LIVE_STATE) != reader.remaining()
    {
        return Ok(None);
    }

    let _tag_index = reader.read_u8()?;
    let buttons = TrackerButtons::from_bits(reader.read_u8()?);
    let pad_x = reader.read_i16_le()?;
    let pad_y = reader.read_i16_le()?;
    let [_, trigger] = reader.read_u16_le()?.to_le_bytes();
    let battery_level = reader.read_u16_le()?;

    Ok(Some(LiveState {
        buttons,
        pad_x,
        pad_y,
        trigger,
        battery_level,
    }))
}
