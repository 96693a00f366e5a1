//! Attach -> initialize -> ready lifecycle of the tracker connection.

use tracing::{debug, info, warn};
use vive_tracker_hid_common::{UsbHost, UsbHostResult};
use vive_tracker_hid_protocol::{
    ConfigurationProfile, FEATURE_REPORT_TARGET, FeatureReport, encode_configuration,
};

/// Connection lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionState {
    /// No tracker attached.
    Detached,
    /// Attached; the configuration report has not been accepted yet.
    AttachedUninitialized,
    /// Attached and configured. Accessory state updates may be sent.
    Ready,
}

impl ConnectionState {
    pub fn is_attached(self) -> bool {
        !matches!(self, ConnectionState::Detached)
    }
}

/// Tracks attachment and drives the post-attach configuration handshake.
///
/// Initialization is recorded against the host's attach generation, so it
/// never carries over to a later attach, even one that happened without an
/// intervening [`ConnectionMonitor::service`] call.
#[derive(Debug)]
pub struct ConnectionMonitor<H: UsbHost> {
    host: H,
    initialized_generation: Option<u32>,
    attempt_generation: u32,
    init_attempts: u32,
    last_observed: ConnectionState,
}

impl<H: UsbHost> ConnectionMonitor<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            initialized_generation: None,
            attempt_generation: 0,
            init_attempts: 0,
            last_observed: ConnectionState::Detached,
        }
    }

    /// Current lifecycle state. No side effects.
    pub fn state(&self) -> ConnectionState {
        if !self.host.is_attached() {
            ConnectionState::Detached
        } else if self.initialized_generation == Some(self.host.attach_generation()) {
            ConnectionState::Ready
        } else {
            ConnectionState::AttachedUninitialized
        }
    }

    /// Attached and initialized. No side effects.
    pub fn is_ready(&self) -> bool {
        self.state() == ConnectionState::Ready
    }

    pub fn is_attached(&self) -> bool {
        self.host.is_attached()
    }

    /// Configuration attempts made since the current attach.
    pub fn init_attempts(&self) -> u32 {
        if self.host.is_attached() && self.attempt_generation == self.host.attach_generation() {
            self.init_attempts
        } else {
            0
        }
    }

    /// Run one bus step, then perform at most one lifecycle transition.
    ///
    /// While attached but uninitialized, `profile` is transmitted as a
    /// configuration report. A transport failure is logged and left for the
    /// next call to retry.
    pub fn service(&mut self, profile: &ConfigurationProfile) -> ConnectionState {
        self.host.bus_service_step();

        if !self.host.is_attached() {
            if self.initialized_generation.take().is_some() {
                debug!("Tracker detached; initialization cleared");
            }
            self.init_attempts = 0;
            return self.observe(ConnectionState::Detached);
        }

        let generation = self.host.attach_generation();
        if self.initialized_generation == Some(generation) {
            return self.observe(ConnectionState::Ready);
        }

        // Any initialization recorded so far belongs to an earlier attach.
        self.initialized_generation = None;
        if self.attempt_generation != generation {
            self.attempt_generation = generation;
            self.init_attempts = 0;
        }
        self.init_attempts = self.init_attempts.saturating_add(1);

        let report = encode_configuration(profile);
        match self.send(&report) {
            Ok(()) => {
                self.initialized_generation = Some(generation);
                info!(
                    "Tracker configured after {} attempt(s): {:02X?}",
                    self.init_attempts,
                    report.as_bytes()
                );
                self.observe(ConnectionState::Ready)
            }
            Err(e) => {
                warn!(
                    "Tracker configuration attempt {} failed, retrying next step: {e}",
                    self.init_attempts
                );
                self.observe(ConnectionState::AttachedUninitialized)
            }
        }
    }

    /// Transmit a whole feature report to the tracker's feature interface.
    pub fn send<R: FeatureReport>(&mut self, report: &R) -> UsbHostResult<()> {
        self.host
            .set_feature_report(FEATURE_REPORT_TARGET, report.as_bytes())
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    fn observe(&mut self, state: ConnectionState) -> ConnectionState {
        if state != self.last_observed {
            debug!("Tracker connection {:?} -> {:?}", self.last_observed, state);
            self.last_observed = state;
        }
        state
    }
}
