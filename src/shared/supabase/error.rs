use reqwest::StatusCode;
use serde::Deserialize;

/// Error body shapes returned by the gateway, auth and storage services.
/// Each service uses a different subset of these keys.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    code: Option<serde_json::Value>,
    error_code: Option<String>,
    error: Option<String>,
    error_description: Option<String>,
    message: Option<String>,
    msg: Option<String>,
}

/// A non-2xx answer from the hosted backend, reduced to what callers branch on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteFailure {
    pub status: u16,
    /// Machine-readable code when the service sent one (`PGRST116`, `email_not_confirmed`, ...)
    pub code: Option<String>,
    pub message: String,
}

impl RemoteFailure {
    pub fn from_body(status: StatusCode, body: &str) -> Self {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();

        let code = parsed
            .error_code
            .or_else(|| match parsed.code {
                Some(serde_json::Value::String(s)) => Some(s),
                _ => None,
            })
            .or(parsed.error.clone());

        let message = parsed
            .msg
            .or(parsed.message)
            .or(parsed.error_description)
            .or(parsed.error)
            .unwrap_or_else(|| {
                if body.trim().is_empty() {
                    status.canonical_reason().unwrap_or("unknown error").to_string()
                } else {
                    body.trim().to_string()
                }
            });

        Self {
            status: status.as_u16(),
            code,
            message,
        }
    }

    pub fn is_server_side(&self) -> bool {
        self.status >= 500
    }

    /// True when either the code or the message mentions `needle` (case-insensitive).
    pub fn mentions(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.code
            .as_deref()
            .map(|c| c.to_lowercase().contains(&needle))
            .unwrap_or(false)
            || self.message.to_lowercase().contains(&needle)
    }
}

impl std::fmt::Display for RemoteFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{} ({}): {}", self.status, code, self.message),
            None => write!(f, "{}: {}", self.status, self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_gateway_error() {
        let body = r#"{"code":"23502","details":null,"hint":null,"message":"null value in column \"title\""}"#;
        let f = RemoteFailure::from_body(StatusCode::BAD_REQUEST, body);

        assert_eq!(f.status, 400);
        assert_eq!(f.code.as_deref(), Some("23502"));
        assert!(f.message.contains("title"));
    }

    #[test]
    fn parses_auth_error_with_error_code() {
        let body = r#"{"code":400,"error_code":"email_not_confirmed","msg":"Email not confirmed"}"#;
        let f = RemoteFailure::from_body(StatusCode::BAD_REQUEST, body);

        assert_eq!(f.code.as_deref(), Some("email_not_confirmed"));
        assert_eq!(f.message, "Email not confirmed");
        assert!(f.mentions("Email not confirmed"));
    }

    #[test]
    fn parses_legacy_auth_error() {
        let body = r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#;
        let f = RemoteFailure::from_body(StatusCode::BAD_REQUEST, body);

        assert_eq!(f.code.as_deref(), Some("invalid_grant"));
        assert_eq!(f.message, "Invalid login credentials");
    }

    #[test]
    fn falls_back_to_raw_body_and_reason() {
        let f = RemoteFailure::from_body(StatusCode::BAD_GATEWAY, "upstream exploded");
        assert_eq!(f.message, "upstream exploded");
        assert!(f.is_server_side());

        let f = RemoteFailure::from_body(StatusCode::SERVICE_UNAVAILABLE, "");
        assert_eq!(f.message, "Service Unavailable");
    }
}
