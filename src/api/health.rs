//! Health Endpoint

use super::ApiClient;
use crate::error::ApiResult;
use crate::models::HealthStatus;

pub const HEALTH_PATH: &str = "/api/health";

impl ApiClient {
    pub async fn health(&self) -> ApiResult<HealthStatus> {
        self.get_json(HEALTH_PATH).await
    }
}

#[cfg(test)]
mod tests {
    use crate::models::HealthStatus;
    use serde_json::json;

    #[test]
    fn test_response_body() {
        let health: HealthStatus = serde_json::from_value(json!({
            "status": "healthy",
            "app": "Moods",
            "version": "2.0",
            "llm_available": true,
            "apis_configured": { "tmdb": false, "google_books": true }
        }))
        .unwrap();
        assert!(health.is_healthy());
        assert!(health.llm_available);
        assert!(!health.apis_configured.tmdb);
        assert!(health.apis_configured.google_books);
        assert_eq!(health.version.as_deref(), Some("2.0"));
    }
}
