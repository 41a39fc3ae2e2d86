//! API Errors

/// Failure of a call to the recommendation backend.
///
/// Every variant means the same thing to the user: the request failed.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Backend returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        let err = ApiError::Status { status: 500, body: "Recommendation failed".into() };
        assert_eq!(err.to_string(), "Backend returned 500: Recommendation failed");
    }

    #[test]
    fn test_decode_from_serde() {
        let err: ApiError = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err().into();
        assert!(matches!(err, ApiError::Decode(_)));
        assert!(err.to_string().starts_with("Malformed response"));
    }
}
