//! Classification of raw HTTP responses into payloads or `ReportError`s.
//!
//! Kept free of any HTTP client type: callers pass the status code and the
//! body text they received.

use serde_json::Value;

use crate::error::ReportError;
use crate::requests::{ErrorBody, ReportPayload};

const FORBIDDEN: u16 = 403;

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn error_field(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body).ok().map(|b| b.error)
}

/// `POST /api/accounts`: a 2xx JSON array of names, 403 for a wrong
/// password, anything else is a server failure.
pub fn interpret_accounts_response(status: u16, body: &str) -> Result<Vec<String>, ReportError> {
    if status == FORBIDDEN {
        return Err(ReportError::Credential);
    }
    if !is_success(status) {
        return Err(ReportError::Server {
            status,
            message: error_field(body),
        });
    }
    serde_json::from_str::<Vec<String>>(body).map_err(|e| match error_field(body) {
        Some(message) => ReportError::Application(message),
        None => ReportError::Malformed(e.to_string()),
    })
}

/// `POST /api/generate-report`: non-2xx is a server failure even when the
/// body explains it; a 2xx body with a truthy `error` is an application
/// error. `null`, `false`, `0` and `""` count as no error.
pub fn interpret_report_response(status: u16, body: &str) -> Result<ReportPayload, ReportError> {
    if !is_success(status) {
        return Err(ReportError::Server {
            status,
            message: error_field(body),
        });
    }
    let value: Value =
        serde_json::from_str(body).map_err(|e| ReportError::Malformed(e.to_string()))?;
    match value.get("error").filter(|e| is_truthy(e)) {
        None => Ok(ReportPayload::from_value(value)),
        Some(Value::String(message)) => Err(ReportError::Application(message.clone())),
        Some(other) => Err(ReportError::Application(other.to_string())),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forbidden_accounts_is_credential_failure() {
        let forbidden =
            interpret_accounts_response(403, r#"{"error": "비밀번호가 올바르지 않습니다."}"#)
                .unwrap_err();
        let failed =
            interpret_accounts_response(500, r#"{"error": "Failed to retrieve account list."}"#)
                .unwrap_err();
        assert_eq!(forbidden, ReportError::Credential);
        assert_eq!(
            failed,
            ReportError::Server {
                status: 500,
                message: Some("Failed to retrieve account list.".into())
            }
        );
        assert_ne!(forbidden.to_string(), failed.to_string());
    }

    #[test]
    fn accounts_list_is_decoded() {
        let accounts = interpret_accounts_response(200, r#"["brand-a", "brand-b"]"#).unwrap();
        assert_eq!(accounts, vec!["brand-a", "brand-b"]);
        assert_eq!(interpret_accounts_response(200, "[]").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn accounts_garbage_is_malformed() {
        let err = interpret_accounts_response(200, "<html>").unwrap_err();
        assert!(matches!(err, ReportError::Malformed(_)));
    }

    #[test]
    fn server_failure_without_body() {
        let err = interpret_report_response(502, "Bad Gateway").unwrap_err();
        assert_eq!(
            err,
            ReportError::Server {
                status: 502,
                message: None
            }
        );
        assert!(err.is_network_failure());
    }

    #[test]
    fn error_in_success_body_is_application_error() {
        let err = interpret_report_response(200, r#"{"error": "API request failed"}"#).unwrap_err();
        assert_eq!(err, ReportError::Application("API request failed".into()));
        assert!(!err.is_network_failure());
    }

    #[test]
    fn null_error_field_is_ignored() {
        let payload =
            interpret_report_response(200, r#"{"error": null, "html_table": "<p>ok</p>"}"#).unwrap();
        assert_eq!(payload.html_table.as_deref(), Some("<p>ok</p>"));
    }

    #[test]
    fn falsy_error_field_still_renders() {
        for error in ["\"\"", "false", "0"] {
            let body = format!(r#"{{"error": {error}, "html_table": "<table></table>"}}"#);
            let payload = interpret_report_response(200, &body).unwrap();
            assert_eq!(payload.html_table.as_deref(), Some("<table></table>"));
        }

        let err = interpret_report_response(200, r#"{"error": true}"#).unwrap_err();
        assert_eq!(err, ReportError::Application("true".into()));
    }

    #[test]
    fn report_garbage_is_malformed() {
        let err = interpret_report_response(200, "not json").unwrap_err();
        assert!(matches!(err, ReportError::Malformed(_)));
    }
}
