//! Wire types shared between the client and the frontend layer

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Currently authenticated user, as returned by `GET /user`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub login: String,
    pub allow_upload: bool,
}

/// Standard response envelope for auth and profile mutations
///
/// The server answers `/login`, `/register`, `/logout` and the
/// `PATCH /user/*` endpoints with this shape on both success and failure.
/// `err_id` correlates a failure with the server-side log entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    pub err_id: Option<String>,
    pub detail: Option<String>,
}

impl ApiResponse {
    pub fn success() -> Self {
        Self {
            success: true,
            err_id: None,
            detail: None,
        }
    }

    /// Locally produced failure for transport errors, with no server `err_id`
    pub fn transport_failure(detail: impl Into<String>) -> Self {
        Self {
            success: false,
            err_id: None,
            detail: Some(detail.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_deserializes_with_null_fields() {
        let resp: ApiResponse =
            serde_json::from_value(json!({"success": true, "err_id": null, "detail": null}))
                .unwrap();
        assert!(resp.success);
        assert!(resp.err_id.is_none());
        assert!(resp.detail.is_none());
    }

    #[test]
    fn envelope_round_trips_failure_detail() {
        let resp: ApiResponse = serde_json::from_value(json!({
            "success": false,
            "err_id": "AUTH_001",
            "detail": "invalid credentials"
        }))
        .unwrap();
        assert!(!resp.success);
        assert_eq!(resp.err_id.as_deref(), Some("AUTH_001"));
        assert_eq!(resp.detail.as_deref(), Some("invalid credentials"));
    }
}
