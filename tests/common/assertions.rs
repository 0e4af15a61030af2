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

/// Assert a JSON colors object carries a full, well-formed palette
pub fn assert_valid_colors(colors: &serde_json::Value) {
    for key in ["dominant", "background", "subtext"] {
        let value = colors[key].as_str().unwrap_or_else(|| {
            panic!("colors.{key} missing or not a string: {colors}")
        });
        assert!(
            value.starts_with("rgb(") && value.ends_with(')'),
            "colors.{key} is not a css rgb() triple: {value}"
        );
    }
    let text = colors["text"].as_str().expect("colors.text missing");
    assert!(
        text == "black" || text == "white",
        "colors.text must be black or white, got {text}"
    );
    assert!(colors["fallback"].is_boolean());
}
