//! HTC Vive Tracker USB identifiers and feature-report constants.
//!
//! ## Sources
//!
//! HTC's published accessory guidelines describe the 0xB3/0xB4 feature
//! reports, but their byte layout is wrong in that document. The layout used
//! here follows the community reverse-engineering by Peter S. Hollander
//! (talariavr.com, "Vive Tracker initial documentation"), which matches what
//! shipped accessory firmware sends.
//!
//! | Field | Status |
//! |-------|--------|
//! | Report address 0xB3 (configuration) | ✅ Confirmed against working accessory firmware |
//! | Report address 0xB4 (accessory state) | ✅ Confirmed against working accessory firmware |
//! | Feature interface 2, report ID 0 | ✅ Confirmed (SET_REPORT issued by accessory firmware) |
//! | VID 0x0BB4 / PID 0x06A3 | ⚠ From HTC developer guidelines; not verified against a capture |
//! | Trigger width | ⚠ 16-bit on the wire, 8-bit precision in firmware (see [`crate::output`]) |

/// HTC Corporation USB vendor ID.
pub const VIVE_TRACKER_VENDOR_ID: u16 = 0x0BB4;

/// Vive Tracker product ID as enumerated to an accessory host.
pub const VIVE_TRACKER_PRODUCT_ID: u16 = 0x06A3;

/// Interface number that accepts the accessory feature reports.
pub const FEATURE_INTERFACE: u8 = 2;

/// Report addresses (first byte of each feature report payload).
pub mod report_ids {
    /// Host configuration: host type, charging, OS type, filter selector.
    pub const CONFIGURATION: u8 = 0xB3;
    /// Accessory state: buttons, trackpad, trigger, battery.
    pub const LIVE_STATE: u8 = 0xB4;
}

/// Payload-size byte values (bytes following the two header bytes).
pub mod payload_sizes {
    pub const CONFIGURATION_BASE: u8 = 3;
    pub const CONFIGURATION_EXTENDED: u8 = 4;
    pub const LIVE_STATE: u8 = 10;
}

/// Button bit assignments in the accessory state report.
pub mod buttons {
    pub const TRIGGER: u8 = 1 << 0;
    pub const GRIP: u8 = 1 << 1;
    pub const MENU: u8 = 1 << 2;
    pub const SYSTEM: u8 = 1 << 3;
    pub const PAD_TRIGGERED: u8 = 1 << 4;
    pub const PAD_TOUCHED: u8 = 1 << 5;
    /// Every assigned bit.
    pub const ALL: u8 = TRIGGER | GRIP | MENU | SYSTEM | PAD_TRIGGERED | PAD_TOUCHED;
}

/// Host type identifiers for the configuration report.
pub mod host_types {
    pub const PC: u8 = 1;
    pub const PHONE: u8 = 2;
    /// Accessory acting as USB host. Default for this driver.
    pub const ACCESSORY: u8 = 3;
}

/// Tag index addressed by accessory state reports. Only one tracker is driven.
pub const SINGLE_TRACKER_TAG_INDEX: u8 = 0;
