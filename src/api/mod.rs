//! Recommendation API Client
//!
//! Frontend bindings to the mood/recommendation backend, organized by endpoint.

mod health;
mod mood;
mod recommendations;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ApiError, ApiResult};

pub use mood::AnalyzeMoodArgs;
pub use recommendations::RecommendationArgs;

/// HTTP client bound to one backend base URL
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_json<A, T>(&self, path: &str, args: &A) -> ApiResult<T>
    where
        A: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.http.post(self.endpoint(path)).json(args).send().await?;
        decode(response).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.http.get(self.endpoint(path)).send().await?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
    let status = response.status();
    let body = response.text().await?;
    parse_body(status, body)
}

/// Non-2xx becomes `ApiError::Status`, anything else must parse as `T`
fn parse_body<T: DeserializeOwned>(status: reqwest::StatusCode, body: String) -> ApiResult<T> {
    if !status.is_success() {
        return Err(ApiError::Status { status: status.as_u16(), body });
    }
    Ok(serde_json::from_str(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Mood, MoodAnalysis};
    use reqwest::StatusCode;

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let client = ApiClient::new("http://localhost:8001/");
        assert_eq!(client.base_url(), "http://localhost:8001");
        assert_eq!(client.endpoint("/api/health"), "http://localhost:8001/api/health");
    }

    #[test]
    fn test_server_error_keeps_status_and_body() {
        let result: ApiResult<MoodAnalysis> =
            parse_body(StatusCode::INTERNAL_SERVER_ERROR, "boom".to_string());
        match result {
            Err(ApiError::Status { status, body }) => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_body_is_decode_error() {
        let result: ApiResult<MoodAnalysis> = parse_body(StatusCode::OK, "{oops".to_string());
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_ok_body_parses() {
        let body = r#"{"mood":"hopeful","analysis":"Looking ahead","emotions":["optimism"],"confidence":0.8}"#;
        let analysis: MoodAnalysis = parse_body(StatusCode::OK, body.to_string()).unwrap();
        assert_eq!(analysis.mood, Mood::Hopeful);
        assert_eq!(analysis.emotions, vec!["optimism".to_string()]);
        assert_eq!(analysis.confidence, 0.8);
    }
}
