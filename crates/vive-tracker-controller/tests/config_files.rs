//! Loading controller configuration from disk.

use std::io::Write;
use vive_tracker_controller::{
    ConfigError, LowPassFilter, TrackerConfig, ViveTrackerController,
};
use vive_tracker_hid_common::mock::MockUsbHost;

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[test]
fn load_yaml_file_and_configure_on_attach() -> TestResult {
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(
        b"profile:
  host_type: 1
  charge_enabled: true
  os_type: 2
  low_pass_filter: 5hz
device:
  interface_number: 2
",
    )?;

    let config = TrackerConfig::load(file.path())?;
    assert_eq!(config.profile.low_pass_filter, Some(LowPassFilter::Hz5));
    assert_eq!(config.device.selector().interface_number, Some(2));

    let mut tracker = ViveTrackerController::from_config(MockUsbHost::attached(), &config);
    tracker.service();
    assert_eq!(
        tracker.host().sent_payloads(),
        vec![vec![0xB3, 0x04, 0x01, 0x01, 0x02, 0x01]]
    );
    Ok(())
}

#[test]
fn missing_file_reports_path() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("absent.yaml");
    match TrackerConfig::load(&path) {
        Err(ConfigError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => return Err(format!("expected Io error, got {other:?}").into()),
    }
    Ok(())
}

#[test]
fn invalid_filter_selector_is_a_parse_error() {
    let result = TrackerConfig::from_yaml_str("profile:\n  low_pass_filter: 7hz\n");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn unbound_interface_fails_validation() -> TestResult {
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(b"device:\n  interface_number: null\n")?;
    match TrackerConfig::load(file.path()) {
        Err(ConfigError::Invalid {
            field: "device.interface_number",
            ..
        }) => Ok(()),
        other => Err(format!("expected interface validation error, got {other:?}").into()),
    }
}

#[test]
fn zero_vendor_id_fails_validation() {
    let result = TrackerConfig::from_yaml_str("device:\n  vendor_id: 0\n");
    assert!(matches!(
        result,
        Err(ConfigError::Invalid {
            field: "device.vendor_id",
            ..
        })
    ));
}
