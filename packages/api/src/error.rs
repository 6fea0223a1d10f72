use thiserror::Error;

/// Every way a backend call can fail.
///
/// Payloads are plain strings so the error is `Clone + PartialEq` and can sit
/// in a UI signal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Could not reach the server: {0}")]
    Network(String),
    #[error("Please log in again")]
    Unauthorized,
    #[error("{message}")]
    Status { code: u16, message: String },
    #[error("Unexpected response from the server: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a status error from a non-2xx response body.
    ///
    /// The backend answers errors with `{ "message": "..." }` (sometimes
    /// `{ "error": "..." }`); anything else falls back to a generic message.
    pub fn from_status(code: u16, body: &str) -> Self {
        if code == 401 {
            return ApiError::Unauthorized;
        }
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                v.get("message")
                    .or_else(|| v.get("error"))
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("Request failed ({code})"));
        ApiError::Status { code, message }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_message_is_surfaced() {
        let err = ApiError::from_status(400, r#"{"message":"Date already booked"}"#);
        assert_eq!(
            err,
            ApiError::Status {
                code: 400,
                message: "Date already booked".into()
            }
        );
        assert_eq!(err.to_string(), "Date already booked");

        let err = ApiError::from_status(409, r#"{"error":"Already registered"}"#);
        assert_eq!(err.to_string(), "Already registered");
    }

    #[test]
    fn opaque_bodies_get_generic_message() {
        assert_eq!(
            ApiError::from_status(502, "<html>Bad gateway</html>").to_string(),
            "Request failed (502)"
        );
        assert_eq!(
            ApiError::from_status(500, r#"{"message":"  "}"#).to_string(),
            "Request failed (500)"
        );
    }

    #[test]
    fn unauthorized_is_its_own_variant() {
        let err = ApiError::from_status(401, r#"{"message":"jwt expired"}"#);
        assert!(err.is_unauthorized());
    }
}
