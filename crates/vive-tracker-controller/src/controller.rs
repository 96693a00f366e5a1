//! Public API for driving a Vive Tracker from an accessory.

use crate::config::TrackerConfig;
use crate::error::TrackerError;
use crate::monitor::{ConnectionMonitor, ConnectionState};
use tracing::{debug, trace};
use vive_tracker_hid_common::UsbHost;
use vive_tracker_hid_protocol::{
    ConfigurationProfile, LiveState, LowPassFilter, TrackerButtons, encode_configuration,
    encode_live_state,
};

/// A single Vive Tracker behind a USB host.
///
/// Call [`ViveTrackerController::service`] from the main loop at a steady
/// cadence; it runs the host's bus step and (re)configures the tracker after
/// every attach. Once [`ViveTrackerController::is_ready`] returns `true`,
/// accessory state can be pushed with
/// [`ViveTrackerController::set_tracker_status`].
#[derive(Debug)]
pub struct ViveTrackerController<H: UsbHost> {
    monitor: ConnectionMonitor<H>,
    profile: ConfigurationProfile,
}

impl<H: UsbHost> ViveTrackerController<H> {
    /// Controller with the default profile: accessory host type, charging
    /// disabled, OS type 0, base configuration report.
    pub fn new(host: H) -> Self {
        Self::with_profile(host, ConfigurationProfile::default())
    }

    pub fn with_profile(host: H, profile: ConfigurationProfile) -> Self {
        debug!("Created ViveTrackerController with profile {:?}", profile);
        Self {
            monitor: ConnectionMonitor::new(host),
            profile,
        }
    }

    pub fn from_config(host: H, config: &TrackerConfig) -> Self {
        Self::with_profile(host, config.profile)
    }

    /// Whether the tracker is attached and configured.
    pub fn is_ready(&self) -> bool {
        self.monitor.is_ready()
    }

    pub fn state(&self) -> ConnectionState {
        self.monitor.state()
    }

    /// Process host and connection tasks. Call repeatedly from the main loop.
    pub fn service(&mut self) -> ConnectionState {
        self.monitor.service(&self.profile)
    }

    /// Send the accessory state to the tracker.
    ///
    /// `trigger` has 8-bit precision: tracker firmware ignores the low byte of
    /// the documented 16-bit field. `battery_level` is not used by current
    /// firmware and should be 0.
    pub fn set_tracker_status(
        &mut self,
        buttons: TrackerButtons,
        pad_x: i16,
        pad_y: i16,
        trigger: u8,
        battery_level: u16,
    ) -> Result<(), TrackerError> {
        self.send_live_state(&LiveState::new(
            buttons,
            pad_x,
            pad_y,
            trigger,
            battery_level,
        ))
    }

    /// Send a prepared accessory state. Fails with
    /// [`TrackerError::NotConnected`] without transmitting if not ready.
    pub fn send_live_state(&mut self, state: &LiveState) -> Result<(), TrackerError> {
        if !self.is_ready() {
            return Err(TrackerError::NotConnected);
        }
        let report = encode_live_state(state);
        trace!("Accessory state {:02X?}", report.to_array());
        self.monitor.send(&report).map_err(|e| {
            debug!("Accessory state transfer failed: {e}");
            TrackerError::Transport(e)
        })
    }

    /// Enable or disable tracker charging from the accessory.
    ///
    /// The stored profile is always updated and will be sent on the next
    /// attach. With `send_report`, the full profile is also sent now if the
    /// tracker is attached.
    pub fn set_charge_enabled(
        &mut self,
        enabled: bool,
        send_report: bool,
    ) -> Result<(), TrackerError> {
        self.profile.charge_enabled = enabled;
        if !send_report {
            return Ok(());
        }
        if !self.monitor.is_attached() {
            debug!("Charge setting deferred until the tracker attaches");
            return Ok(());
        }
        self.send_profile()
    }

    /// Select the analog low-pass filter and send the full profile.
    ///
    /// Switches the profile to the extended configuration report. The
    /// transmission is always attempted; a missing tracker surfaces as a
    /// transport error.
    pub fn set_lpf_config(&mut self, filter: LowPassFilter) -> Result<(), TrackerError> {
        self.profile.low_pass_filter = Some(filter);
        self.send_profile()
    }

    pub fn profile(&self) -> &ConfigurationProfile {
        &self.profile
    }

    /// Configuration attempts since the current attach.
    pub fn init_attempts(&self) -> u32 {
        self.monitor.init_attempts()
    }

    pub fn host(&self) -> &H {
        self.monitor.host()
    }

    pub fn host_mut(&mut self) -> &mut H {
        self.monitor.host_mut()
    }

    pub fn into_host(self) -> H {
        self.monitor.into_host()
    }

    fn send_profile(&mut self) -> Result<(), TrackerError> {
        let report = encode_configuration(&self.profile);
        self.monitor.send(&report)?;
        debug!("Tracker profile updated: {:?}", self.profile);
        Ok(())
    }
}
