//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status, expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert a JSON error body with the given status and message fragment
pub fn assert_json_error(response: &TestResponse, expected: StatusCode, fragment: &str) {
    assert_status(response, expected);
    let json: serde_json::Value = response.json();

    assert_eq!(
        json["status"].as_u64(),
        Some(expected.as_u16() as u64),
        "Expected JSON status {}, got {:?}",
        expected.as_u16(),
        json["status"]
    );
    let error = json["error"].as_str().unwrap_or_default();
    assert!(
        error.contains(fragment),
        "Expected error containing {fragment:?}, got {error:?}"
    );
}

/// Assert a color object has the expected name and channels
pub fn assert_color(json: &serde_json::Value, name: &str, rgb: [u8; 3]) {
    assert_eq!(json["name"], name, "Unexpected color in {json}");
    assert_eq!(
        [json["r"].as_u64(), json["g"].as_u64(), json["b"].as_u64()],
        [Some(rgb[0] as u64), Some(rgb[1] as u64), Some(rgb[2] as u64)],
        "Unexpected channels in {json}"
    );
}
