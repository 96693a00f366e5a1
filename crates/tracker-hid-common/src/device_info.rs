//! Device selection for host backends that enumerate HID interfaces.

use serde::{Deserialize, Serialize};

/// Which HID interface a backend should bind to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceSelector {
    pub vendor_id: u16,
    pub product_id: u16,
    /// Interface to open. `None` accepts any interface of the device.
    #[serde(default)]
    pub interface_number: Option<u8>,
}

impl DeviceSelector {
    pub fn new(vendor_id: u16, product_id: u16) -> Self {
        Self {
            vendor_id,
            product_id,
            interface_number: None,
        }
    }

    pub fn with_interface(mut self, interface_number: u8) -> Self {
        self.interface_number = Some(interface_number);
        self
    }

    /// Whether an enumerated interface matches. Negative interface numbers
    /// (unknown to the OS) only match a selector without an interface filter.
    pub fn matches(&self, vendor_id: u16, product_id: u16, interface_number: i32) -> bool {
        if self.vendor_id != vendor_id || self.product_id != product_id {
            return false;
        }
        match self.interface_number {
            Some(wanted) => i32::from(wanted) == interface_number,
            None => true,
        }
    }

    pub fn display_name(&self) -> String {
        match self.interface_number {
            Some(iface) => format!("{:04x}:{:04x}/if{}", self.vendor_id, self.product_id, iface),
            None => format!("{:04x}:{:04x}", self.vendor_id, self.product_id),
        }
    }
}
