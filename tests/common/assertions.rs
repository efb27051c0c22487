//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::Value;

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

/// Assert an error response with the JSON `{status, error}` body
pub fn assert_api_error(response: &TestResponse, expected: StatusCode) {
    assert_status(response, expected);
    let json: Value = response.json();
    assert_eq!(
        json["status"].as_u64(),
        Some(expected.as_u16() as u64),
        "Expected JSON status {}. Full response: {}",
        expected.as_u16(),
        serde_json::to_string_pretty(&json).unwrap()
    );
    assert!(json["error"].is_string(), "Expected error message");
}

/// Assert `rows` is a square `size`×`size` array of `{hex, codes}` cells
pub fn assert_square_grid(json: &Value, size: usize) {
    assert_eq!(json["size"].as_u64(), Some(size as u64));
    let rows = json["rows"].as_array().expect("rows should be an array");
    assert_eq!(rows.len(), size, "row count");
    for (y, row) in rows.iter().enumerate() {
        let cells = row.as_array().expect("row should be an array");
        assert_eq!(cells.len(), size, "row {y} length");
        for cell in cells {
            assert!(cell["hex"].is_string(), "cell without hex: {cell}");
            assert!(cell["codes"].is_object(), "cell without codes: {cell}");
        }
    }
}

/// All cell hex values, row-major
pub fn cell_hexes(json: &Value) -> Vec<String> {
    json["rows"]
        .as_array()
        .into_iter()
        .flatten()
        .flat_map(|row| row.as_array().into_iter().flatten())
        .map(|cell| cell["hex"].as_str().unwrap_or_default().to_string())
        .collect()
}
