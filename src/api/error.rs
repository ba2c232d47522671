//! Error handling for the api module

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Failed to decode a JSON body from the server
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },
}

impl ApiError {
    pub async fn from_response(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        ApiError::Http { status, message }
    }

    /// True when the server itself rejected the operation, as opposed to a
    /// transport or decode fault. The vote paths drop rejections without a
    /// diagnostic; only transport faults earn a log line.
    pub fn is_rejection(&self) -> bool {
        matches!(self, ApiError::Http { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_classification() {
        let rejection = ApiError::Http {
            status: 400,
            message: "invalid slug".to_string(),
        };
        assert!(rejection.is_rejection());

        let decode = ApiError::Decode(
            serde_json::from_str::<serde_json::Value>("not json").expect_err("invalid json"),
        );
        assert!(!decode.is_rejection());
    }
}
