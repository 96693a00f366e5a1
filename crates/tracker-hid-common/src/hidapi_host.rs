//! [`UsbHost`] backed by `hidapi`, for running the accessory driver on a desktop
//! with the tracker plugged in directly.
//!
//! Attach and detach are detected by re-enumerating on every bus step.

use crate::{
    DeviceSelector, FeatureReportTarget, HidReportType, UsbHost, UsbHostError, UsbHostResult,
};
use hidapi::{HidApi, HidDevice};
use tracing::{debug, info, warn};

pub struct HidapiUsbHost {
    api: HidApi,
    selector: DeviceSelector,
    device: Option<OpenDevice>,
    generation: u32,
}

/// An opened HID interface and the interface number it enumerated with.
struct OpenDevice {
    handle: HidDevice,
    interface: i32,
}

impl HidapiUsbHost {
    pub fn new(selector: DeviceSelector) -> UsbHostResult<Self> {
        let api = HidApi::new().map_err(|e| UsbHostError::Hid(e.to_string()))?;
        debug!("hidapi host created for {}", selector.display_name());
        Ok(Self {
            api,
            selector,
            device: None,
            generation: 0,
        })
    }

    pub fn selector(&self) -> &DeviceSelector {
        &self.selector
    }

    fn open_matching(&self) -> Option<UsbHostResult<OpenDevice>> {
        let info = self.api.device_list().find(|info| {
            self.selector
                .matches(info.vendor_id(), info.product_id(), info.interface_number())
        })?;
        let interface = info.interface_number();
        Some(
            info.open_device(&self.api)
                .map(|handle| OpenDevice { handle, interface })
                .map_err(|e| UsbHostError::Hid(e.to_string())),
        )
    }

    fn is_present(&self) -> bool {
        self.api.device_list().any(|info| {
            self.selector
                .matches(info.vendor_id(), info.product_id(), info.interface_number())
        })
    }
}

impl std::fmt::Debug for HidapiUsbHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HidapiUsbHost")
            .field("selector", &self.selector)
            .field(
                "bound_interface",
                &self.device.as_ref().map(|device| device.interface),
            )
            .field("generation", &self.generation)
            .finish()
    }
}

impl UsbHost for HidapiUsbHost {
    fn bus_service_step(&mut self) {
        if let Err(e) = self.api.refresh_devices() {
            warn!("hidapi enumeration failed: {e}");
            return;
        }

        if self.device.is_some() {
            if !self.is_present() {
                self.device = None;
                info!("{} detached", self.selector.display_name());
            }
            return;
        }

        match self.open_matching() {
            Some(Ok(device)) => {
                self.generation = self.generation.wrapping_add(1);
                info!(
                    "{} attached on interface {} (generation {})",
                    self.selector.display_name(),
                    device.interface,
                    self.generation
                );
                self.device = Some(device);
            }
            Some(Err(e)) => warn!("Failed to open {}: {e}", self.selector.display_name()),
            None => {}
        }
    }

    fn is_attached(&self) -> bool {
        self.device.is_some()
    }

    fn attach_generation(&self) -> u32 {
        self.generation
    }

    fn set_feature_report(
        &mut self,
        target: FeatureReportTarget,
        data: &[u8],
    ) -> UsbHostResult<()> {
        let Some(device) = self.device.as_ref() else {
            return Err(UsbHostError::Disconnected);
        };
        if target.report_type != HidReportType::Feature {
            return Err(UsbHostError::Hid(format!(
                "hidapi backend cannot issue {:?} reports as feature reports",
                target.report_type
            )));
        }
        target.check_bound_interface(device.interface)?;

        // hidapi expects the report ID as the first byte, zero for unnumbered reports.
        let mut buffer = Vec::with_capacity(data.len().saturating_add(1));
        buffer.push(target.report_id);
        buffer.extend_from_slice(data);

        device.handle.send_feature_report(&buffer).map_err(|e| {
            debug!("hidapi feature report failed: {e}");
            UsbHostError::generic_transfer_failure()
        })
    }
}
