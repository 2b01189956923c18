//! Contact API wire types, shared by the site and the server.

use serde::{Deserialize, Serialize};

/// Path of the contact endpoint relative to the backend base URL.
pub const CONTACT_PATH: &str = "/api/contact";

/// Body of `POST /api/contact`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    /// Sender name
    pub name: String,
    /// Sender email
    pub email: String,
    /// Subject line
    pub subject: String,
    /// Message body
    pub message: String,
}

/// Success body of `POST /api/contact`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    /// Whether the message was accepted
    pub success: bool,
    /// Text shown to the sender
    pub message: String,
    /// Id of the stored message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Error body returned with any non-2xx status.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable cause
    pub detail: String,
}

impl ErrorBody {
    /// Error body with `detail`.
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// Join a configured base URL and the contact path, tolerating a trailing slash.
pub fn contact_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), CONTACT_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_url_joins_without_double_slash() {
        assert_eq!(
            contact_url("https://api.example.com/"),
            "https://api.example.com/api/contact"
        );
        assert_eq!(contact_url(""), "/api/contact");
    }

    #[test]
    fn response_id_is_optional() {
        let parsed: ContactResponse =
            serde_json::from_str(r#"{"success":false,"message":"nope"}"#).unwrap();
        assert!(!parsed.success);
        assert!(parsed.id.is_none());
    }
}
