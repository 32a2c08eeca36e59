//! Helpers shared by the request dispatcher.
//!
//! Covers request validation, parameter coercion, endpoint URL building,
//! HTTP status classification and lenient response decoding.

use crate::errors::{PayLaneError, Result};
use crate::operations::HttpVerb;
use serde::Serialize;
use serde_json::{Map, Value};
use url::Url;

/// HTTP statuses that abort a call, with their canonical phrases.
pub const HTTP_ERRORS: &[(u16, &str)] = &[
    (400, "400 Bad Request"),
    (401, "401 Unauthorized"),
    (500, "500 Internal Server Error"),
    (501, "501 Not Implemented"),
    (502, "502 Bad Gateway"),
    (503, "503 Service Unavailable"),
    (504, "504 Gateway Timeout"),
];

/// Returns the canonical phrase when `code` is a fatal status.
///
/// Statuses outside [`HTTP_ERRORS`] (including 403, 404 and every 2xx) are not
/// fatal and yield `None`.
///
/// # Examples
///
/// ```
/// use paylane_rs::utils::http_error_phrase;
///
/// assert_eq!(http_error_phrase(401), Some("401 Unauthorized"));
/// assert_eq!(http_error_phrase(404), None);
/// ```
pub fn http_error_phrase(code: u16) -> Option<&'static str> {
    HTTP_ERRORS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, phrase)| *phrase)
}

/// Validates an operation path and verb before dispatch.
pub fn validate_operation(path: &str, verb: &str) -> Result<HttpVerb> {
    if path.is_empty() {
        return Err(PayLaneError::InvalidOperation(
            "Method name must be a non-empty string".to_string(),
        ));
    }
    if path.split('/').any(|segment| segment == "." || segment == "..") {
        return Err(PayLaneError::InvalidOperation(format!(
            "Method name must not contain dot segments: {}",
            path
        )));
    }
    verb.parse()
}

/// Converts request parameters into their JSON representation.
///
/// Records and maps describing the same fields produce the same value.
pub fn to_params<P: Serialize + ?Sized>(params: &P) -> Result<Value> {
    Ok(serde_json::to_value(params)?)
}

/// Joins the base URL and an operation path.
///
/// The path is appended verbatim; the base URL is expected to end with `/`.
///
/// # Examples
///
/// ```
/// use paylane_rs::utils::endpoint_url;
///
/// let url = endpoint_url("https://direct.paylane.com/rest/", "cards/sale").unwrap();
/// assert_eq!(url.as_str(), "https://direct.paylane.com/rest/cards/sale");
/// ```
pub fn endpoint_url(base_url: &str, path: &str) -> Result<Url> {
    let joined = format!("{}{}", base_url, path);
    Url::parse(&joined).map_err(|e| PayLaneError::TransportError {
        url: joined,
        message: e.to_string(),
    })
}

/// Decodes a response body, returning `None` unless it is a JSON object.
pub fn decode_body(body: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => Some(map),
        Ok(_) | Err(_) => None,
    }
}
