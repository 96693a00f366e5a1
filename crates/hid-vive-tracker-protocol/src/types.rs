//! Logical parameters carried by the tracker feature reports.

use crate::ids::{buttons, host_types};
use serde::{Deserialize, Serialize};
use std::ops::{BitOr, BitOrAssign};

/// Button bitmask of the accessory state report.
///
/// Bits outside [`buttons::ALL`] are passed through to the wire unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackerButtons(u8);

impl TrackerButtons {
    pub const NONE: Self = Self(0);
    pub const TRIGGER: Self = Self(buttons::TRIGGER);
    pub const GRIP: Self = Self(buttons::GRIP);
    pub const MENU: Self = Self(buttons::MENU);
    pub const SYSTEM: Self = Self(buttons::SYSTEM);
    pub const PAD_TRIGGERED: Self = Self(buttons::PAD_TRIGGERED);
    pub const PAD_TOUCHED: Self = Self(buttons::PAD_TOUCHED);

    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }

    /// Bits that have no assigned button.
    pub const fn unassigned_bits(self) -> u8 {
        self.0 & !buttons::ALL
    }
}

impl BitOr for TrackerButtons {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for TrackerButtons {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl From<u8> for TrackerButtons {
    fn from(bits: u8) -> Self {
        Self(bits)
    }
}

/// Low-pass filter selector for the accessory's analog inputs.
///
/// Only sent in the extended configuration report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum LowPassFilter {
    /// Device default, 184 Hz.
    #[default]
    #[serde(rename = "184hz", alias = "default")]
    Hz184 = 0,
    #[serde(rename = "5hz")]
    Hz5 = 1,
    #[serde(rename = "10hz")]
    Hz10 = 2,
    #[serde(rename = "20hz")]
    Hz20 = 3,
}

impl LowPassFilter {
    /// Wire value of the selector.
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Hz184),
            1 => Some(Self::Hz5),
            2 => Some(Self::Hz10),
            3 => Some(Self::Hz20),
            _ => None,
        }
    }

    /// Cutoff frequency in hertz.
    pub const fn cutoff_hz(self) -> u16 {
        match self {
            Self::Hz184 => 184,
            Self::Hz5 => 5,
            Self::Hz10 => 10,
            Self::Hz20 => 20,
        }
    }
}

impl TryFrom<u8> for LowPassFilter {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, u8> {
        Self::from_u8(value).ok_or(value)
    }
}

/// Host configuration asserted on the tracker after every attach.
///
/// `low_pass_filter: None` selects the base (5-byte) configuration report;
/// `Some` selects the extended (6-byte) form carrying the filter selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigurationProfile {
    pub host_type: u8,
    pub charge_enabled: bool,
    pub os_type: u8,
    pub low_pass_filter: Option<LowPassFilter>,
}

impl ConfigurationProfile {
    pub const fn new(host_type: u8, charge_enabled: bool, os_type: u8) -> Self {
        Self {
            host_type,
            charge_enabled,
            os_type,
            low_pass_filter: None,
        }
    }

    pub const fn with_low_pass_filter(mut self, filter: LowPassFilter) -> Self {
        self.low_pass_filter = Some(filter);
        self
    }

    /// Whether this profile encodes to the extended report.
    pub const fn is_extended(&self) -> bool {
        self.low_pass_filter.is_some()
    }
}

impl Default for ConfigurationProfile {
    fn default() -> Self {
        Self::new(host_types::ACCESSORY, false, 0)
    }
}

/// One accessory state update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveState {
    pub buttons: TrackerButtons,
    /// Trackpad X, full i16 range.
    pub pad_x: i16,
    /// Trackpad Y, full i16 range.
    pub pad_y: i16,
    /// Trigger, 0-255. Widened to 16 bits on the wire.
    pub trigger: u8,
    /// Unused by current firmware; send 0.
    pub battery_level: u16,
}

impl LiveState {
    pub const fn new(
        buttons: TrackerButtons,
        pad_x: i16,
        pad_y: i16,
        trigger: u8,
        battery_level: u16,
    ) -> Self {
        Self {
            buttons,
            pad_x,
            pad_y,
            trigger,
            battery_level,
        }
    }
}
