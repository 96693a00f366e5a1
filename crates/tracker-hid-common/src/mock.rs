//! In-memory [`UsbHost`] that records every transfer.

use crate::{FeatureReportTarget, UsbHost, UsbHostError, UsbHostResult};
use std::collections::VecDeque;
use tracing::trace;

/// One feature report as it reached the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentReport {
    pub target: FeatureReportTarget,
    pub data: Vec<u8>,
}

/// Scriptable host: attach and detach on demand, inject transfer failures,
/// inspect what was sent.
///
/// Transfers while detached fail with [`UsbHostError::Disconnected`] and are
/// not recorded, matching a real host with no device object to address.
#[derive(Debug, Default)]
pub struct MockUsbHost {
    attached: bool,
    generation: u32,
    bus_steps: u64,
    transfer_attempts: u64,
    sent: Vec<SentReport>,
    scripted_failures: VecDeque<UsbHostError>,
    fail_all: Option<UsbHostError>,
}

impl MockUsbHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Host with a device already attached.
    pub fn attached() -> Self {
        let mut host = Self::new();
        host.attach();
        host
    }

    /// Simulate the host's attach callback.
    pub fn attach(&mut self) {
        if !self.attached {
            self.attached = true;
            self.generation = self.generation.wrapping_add(1);
            trace!("Mock host attach, generation {}", self.generation);
        }
    }

    /// Simulate the host's detach callback.
    pub fn detach(&mut self) {
        if self.attached {
            trace!("Mock host detach, generation {}", self.generation);
        }
        self.attached = false;
    }

    /// Detach and attach again without any bus step in between.
    pub fn replug(&mut self) {
        self.detach();
        self.attach();
    }

    /// Fail the next transfer with `error`. Queued failures are consumed in order.
    pub fn fail_next_transfer(&mut self, error: UsbHostError) {
        self.scripted_failures.push_back(error);
    }

    /// Fail every transfer until [`MockUsbHost::clear_failures`] is called.
    pub fn fail_all_transfers(&mut self, error: UsbHostError) {
        self.fail_all = Some(error);
    }

    pub fn clear_failures(&mut self) {
        self.scripted_failures.clear();
        self.fail_all = None;
    }

    /// Successfully transmitted reports, oldest first.
    pub fn sent_reports(&self) -> &[SentReport] {
        &self.sent
    }

    /// Payload bytes of successfully transmitted reports.
    pub fn sent_payloads(&self) -> Vec<Vec<u8>> {
        self.sent.iter().map(|report| report.data.clone()).collect()
    }

    pub fn last_payload(&self) -> Option<&[u8]> {
        self.sent.last().map(|report| report.data.as_slice())
    }

    pub fn clear_sent(&mut self) {
        self.sent.clear();
    }

    /// Every call to `set_feature_report`, including failed ones.
    pub fn transfer_attempts(&self) -> u64 {
        self.transfer_attempts
    }

    pub fn bus_steps(&self) -> u64 {
        self.bus_steps
    }
}

impl UsbHost for MockUsbHost {
    fn bus_service_step(&mut self) {
        self.bus_steps = self.bus_steps.saturating_add(1);
    }

    fn is_attached(&self) -> bool {
        self.attached
    }

    fn attach_generation(&self) -> u32 {
        self.generation
    }

    fn set_feature_report(
        &mut self,
        target: FeatureReportTarget,
        data: &[u8],
    ) -> UsbHostResult<()> {
        self.transfer_attempts = self.transfer_attempts.saturating_add(1);

        if !self.attached {
            return Err(UsbHostError::Disconnected);
        }
        if let Some(error) = self.scripted_failures.pop_front() {
            return Err(error);
        }
        if let Some(error) = &self.fail_all {
            return Err(error.clone());
        }

        self.sent.push(SentReport {
            target,
            data: data.to_vec(),
        });
        Ok(())
    }
}
