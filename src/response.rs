//! Response types shared by the service and the transport.
//!
//! [`ResultEnvelope`] is what the envelope-style service operations return;
//! [`ODataResponse`] and [`DirectoryObjectLink`] mirror the collection and
//! link payloads of the Graph API.

use crate::error::TransportError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// HTTP status code as reported by the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusCode(u16);

impl StatusCode {
    pub const OK: StatusCode = StatusCode(200);
    pub const CREATED: StatusCode = StatusCode(201);
    pub const NO_CONTENT: StatusCode = StatusCode(204);
    pub const BAD_REQUEST: StatusCode = StatusCode(400);
    pub const NOT_FOUND: StatusCode = StatusCode(404);

    /// Wrap a raw status code.
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// The numeric code.
    pub const fn as_u16(self) -> u16 {
        self.0
    }

    /// True for 2xx codes.
    pub const fn is_success(self) -> bool {
        self.0 >= 200 && self.0 < 300
    }
}

impl From<u16> for StatusCode {
    fn from(code: u16) -> Self {
        Self(code)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Uniform success/failure wrapper for operations that talk to the directory.
///
/// On success `error_message` is `None` and `status` is the success status of
/// the operation. On a transport failure `data` is `None` and `status` and
/// `error_message` come from the [`TransportError`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultEnvelope<T> {
    pub status: StatusCode,
    pub error_message: Option<String>,
    pub data: Option<T>,
}

impl<T> ResultEnvelope<T> {
    /// A successful envelope carrying `data`.
    pub fn success(status: StatusCode, data: T) -> Self {
        Self {
            status,
            error_message: None,
            data: Some(data),
        }
    }

    /// A successful envelope with no payload (e.g. a 204 response).
    pub fn empty(status: StatusCode) -> Self {
        Self {
            status,
            error_message: None,
            data: None,
        }
    }

    /// True when no transport error was recorded.
    pub fn is_success(&self) -> bool {
        self.error_message.is_none() && self.status.is_success()
    }

    /// Convert back into a `Result`, restoring the transport error on failure.
    pub fn into_result(self) -> Result<Option<T>, TransportError> {
        match self.error_message {
            None => Ok(self.data),
            Some(message) => Err(TransportError::new(self.status, message)),
        }
    }
}

impl<T> From<TransportError> for ResultEnvelope<T> {
    fn from(error: TransportError) -> Self {
        Self {
            status: error.status,
            error_message: Some(error.message),
            data: None,
        }
    }
}

/// Collection payload returned by the Graph API.
#[derive(Debug, Clone, Deserialize)]
pub struct ODataResponse<T> {
    #[serde(rename = "odata.metadata", default)]
    pub metadata: Option<String>,
    pub value: T,
    #[serde(rename = "odata.nextLink", default)]
    pub next_link: Option<String>,
}

/// Reference to a directory object, as returned by `$links` queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryObjectLink {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_code_success_range() {
        assert!(StatusCode::OK.is_success());
        assert!(StatusCode::NO_CONTENT.is_success());
        assert!(!StatusCode::BAD_REQUEST.is_success());
        assert!(!StatusCode::new(199).is_success());
    }

    #[test]
    fn test_envelope_from_transport_error() {
        let envelope: ResultEnvelope<Vec<String>> =
            TransportError::new(400, "Invalid request").into();
        assert_eq!(envelope.status, StatusCode::BAD_REQUEST);
        assert_eq!(envelope.error_message.as_deref(), Some("Invalid request"));
        assert!(envelope.data.is_none());
        assert!(!envelope.is_success());

        let error = envelope.into_result().unwrap_err();
        assert_eq!(error.status.as_u16(), 400);
    }

    #[test]
    fn test_envelope_success() {
        let envelope = ResultEnvelope::success(StatusCode::CREATED, 7);
        assert!(envelope.is_success());
        assert_eq!(envelope.into_result().unwrap(), Some(7));
    }

    #[test]
    fn test_odata_response_parses_metadata_and_links() {
        let payload = json!({
            "odata.metadata": "https://graph.windows.net/tenant/$metadata#directoryObjects/$links/members",
            "value": [
                {"url": "https://graph.windows.net/tenant/directoryObjects/abc/Microsoft.DirectoryServices.User"}
            ]
        });
        let response: ODataResponse<Vec<DirectoryObjectLink>> =
            serde_json::from_value(payload).unwrap();
        assert!(response.metadata.is_some());
        assert_eq!(response.value.len(), 1);
        assert!(response.value[0].url.contains("/directoryObjects/abc/"));
        assert!(response.next_link.is_none());
    }
}
