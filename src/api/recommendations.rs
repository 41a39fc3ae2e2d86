//! Recommendations Endpoint

use serde::{Deserialize, Serialize};

use super::ApiClient;
use crate::error::ApiResult;
use crate::models::{ContentCategory, Mood, RecommendationItem};

pub const RECOMMENDATIONS_PATH: &str = "/api/recommendations";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationArgs {
    pub mood: Mood,
    pub content_types: Vec<ContentCategory>,
    pub languages: Vec<String>,
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecommendationResponse {
    pub recommendations: Vec<RecommendationItem>,
    #[serde(default)]
    pub mood: Option<Mood>,
    #[serde(default)]
    pub total_count: Option<usize>,
}

impl ApiClient {
    /// Fetch recommendations for a mood under the given filters
    pub async fn recommendations(&self, args: &RecommendationArgs) -> ApiResult<RecommendationResponse> {
        self.post_json(RECOMMENDATIONS_PATH, args).await
    }
}
