//! Tests for geolocation acquisition
//!
//! These tests verify the simulated geolocation source: success,
//! every failure kind, and the maximum-age cache policy.

use clinic_finder::geo::{
    GeolocationError, GeolocationOptions, GeolocationProvider, Position, SimulatedGeolocation,
};

/// Test successful acquisition at the default coordinates
#[test]
fn test_acquisition_at_default_coordinates() {
    let mut source = SimulatedGeolocation::new();
    let position = source.current_position(&GeolocationOptions::default()).unwrap();

    let (lat, lng) = SimulatedGeolocation::DEFAULT_COORDINATES;
    assert_eq!(position.lat, lat);
    assert_eq!(position.lng, lng);
}

/// Test acquisition at caller-chosen coordinates
#[test]
fn test_acquisition_at_custom_coordinates() {
    let mut source = SimulatedGeolocation::at(35.1796, 129.0756);
    let position = source.current_position(&GeolocationOptions::default()).unwrap();

    assert_eq!(position.lat, 35.1796);
    assert_eq!(position.lng, 129.0756);
}

/// Test each scripted failure kind
#[test]
fn test_scripted_failures() {
    let failures = [
        GeolocationError::PermissionDenied,
        GeolocationError::PositionUnavailable,
        GeolocationError::Timeout,
        GeolocationError::Unknown,
    ];

    for failure in failures {
        let mut source = SimulatedGeolocation::failing_with(failure);
        let result = source.current_position(&GeolocationOptions::default());
        assert_eq!(result.unwrap_err(), failure);
    }
}

/// Test the user-facing failure messages
#[test]
fn test_failure_messages() {
    assert_eq!(
        GeolocationError::PermissionDenied.to_string(),
        "위치 접근 권한이 거부되었습니다"
    );
    assert_eq!(
        GeolocationError::PositionUnavailable.to_string(),
        "위치 정보를 사용할 수 없습니다"
    );
    assert_eq!(
        GeolocationError::Timeout.to_string(),
        "위치 요청 시간이 초과되었습니다"
    );
    assert_eq!(
        GeolocationError::Unknown.to_string(),
        "알 수 없는 오류가 발생했습니다"
    );
}

/// Test that a fresh cached position is served under the default max age
#[test]
fn test_cached_position_served_when_fresh() {
    let cached = Position::new(37.5, 127.0);
    let mut source = SimulatedGeolocation::new().with_cached(cached);

    let position = source.current_position(&GeolocationOptions::default()).unwrap();
    assert_eq!(position.lat, 37.5);
    assert_eq!(position.lng, 127.0);
}

/// Test that a zero maximum age always forces a fresh acquisition
#[test]
fn test_zero_max_age_ignores_cache() {
    let cached = Position::new(37.5, 127.0);
    let mut source = SimulatedGeolocation::at(35.1796, 129.0756).with_cached(cached);

    let options = GeolocationOptions {
        maximum_age_ms: 0,
        ..Default::default()
    };
    let position = source.current_position(&options).unwrap();
    assert_eq!(position.lat, 35.1796);
}

/// Test the default acquisition options
#[test]
fn test_default_options() {
    let options = GeolocationOptions::default();
    assert!(options.high_accuracy);
    assert_eq!(options.timeout_ms, 10_000);
    assert_eq!(options.maximum_age_ms, 300_000);
}
