//! Common API response types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unified error body returned by every failing endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Stable error code for programmatic handling
    pub error: String,
    /// Human-readable message
    pub message: String,
    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    pub fn new(error: impl ToString, message: impl ToString) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_serializes_message() {
        let response = ErrorResponse::new("invalid_token", "Token invalid");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["error"], "invalid_token");
        assert_eq!(json["message"], "Token invalid");
    }
}
