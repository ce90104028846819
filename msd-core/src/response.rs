//! Interpretation of raw endpoint responses, shared by the browser
//! fetch layer and the native API client so both classify failures the
//! same way.

use serde_json::Value;

use crate::error::FetchError;

/// Interpret an HTTP response (status + body text) into a JSON payload.
///
/// The backend ships semantic failures as `{"error": ...}` JSON bodies
/// carried on non-success statuses (`/summary_stats` answers 404 for
/// "no data", `/forecast` answers 500 for a failed model fit). Such a
/// body maps to [`FetchError::Backend`] with the backend's own message;
/// any other non-success response maps to [`FetchError::Transport`].
/// Error fields inside successful responses are left to the view
/// transformers.
pub fn interpret(status: u16, body: &str) -> Result<Value, FetchError> {
    let ok = (200..300).contains(&status);
    if ok {
        return serde_json::from_str(body)
            .map_err(|err| FetchError::Shape(format!("invalid JSON payload: {err}")));
    }
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        if let Some(message) = error_message(&value) {
            return Err(FetchError::Backend(message));
        }
    }
    Err(FetchError::Transport(format!("HTTP {status}")))
}

/// The `error` field of a JSON object payload, if present.
pub fn error_message(value: &Value) -> Option<String> {
    value.get("error").map(|message| match message {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_body_parses_to_json() {
        let value = interpret(200, r#"{"forecast": {}}"#).unwrap();
        assert!(value.get("forecast").is_some());
    }

    #[test]
    fn error_body_on_any_status_is_a_backend_failure() {
        let err = interpret(404, r#"{"error": "No data found for given filters."}"#)
            .unwrap_err();
        assert_eq!(
            err,
            FetchError::Backend("No data found for given filters.".to_string())
        );
    }

    #[test]
    fn bare_http_failure_is_a_transport_failure() {
        let err = interpret(502, "Bad Gateway").unwrap_err();
        assert_eq!(err, FetchError::Transport("HTTP 502".to_string()));
    }

    #[test]
    fn malformed_success_body_is_a_shape_failure() {
        let err = interpret(200, "not json").unwrap_err();
        assert!(matches!(err, FetchError::Shape(_)));
    }
}
