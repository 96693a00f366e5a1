//! HTC Vive Tracker accessory protocol: configuration and accessory-state
//! feature reports.
//!
//! This crate is intentionally I/O-free and allocation-free on the encode path.
//! It provides pure functions and types that can be tested without hardware or
//! a USB host stack.
//!
//! ## Reports
//!
//! | Report | Bytes | Layout |
//! |--------|-------|--------|
//! | 0xB3 base | 5 | addr, size=3, host_type, charge_enable, os_type |
//! | 0xB3 extended | 6 | addr, size=4, host_type, charge_enable, os_type, lpf |
//! | 0xB4 | 12 | addr, size=10, tag=0, buttons, pad_x, pad_y, trigger, battery |
//!
//! Multi-byte fields are little-endian with no padding. Both reports are sent
//! as unnumbered feature reports on interface 2 (see [`FEATURE_REPORT_TARGET`]).
//!
//! ## Wire-format caveats
//!
//! HTC's published layout is incorrect; the layout here follows community
//! reverse-engineering and is what shipped accessory firmware sends. The
//! trigger field is 16 bits wide but firmware reads only the high byte, so
//! [`encode_live_state`] shifts the 8-bit trigger into it.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(static_mut_refs)]
#![deny(clippy::unwrap_used)]

pub mod capture;
pub mod ids;
pub mod output;
pub mod types;

pub use capture::{decode_configuration, decode_live_state};
pub use ids::{
    FEATURE_INTERFACE, VIVE_TRACKER_PRODUCT_ID, VIVE_TRACKER_VENDOR_ID, buttons, report_ids,
};
pub use output::{
    CONFIGURATION_BASE_REPORT_LEN, CONFIGURATION_EXTENDED_REPORT_LEN, ConfigurationReport,
    FEATURE_REPORT_TARGET, FeatureReport, LIVE_STATE_REPORT_LEN, LiveStateReport,
    encode_configuration, encode_live_state, trigger_to_wire,
};
pub use types::{ConfigurationProfile, LiveState, LowPassFilter, TrackerButtons};
