//! Mood Analysis Endpoint

use serde::Serialize;

use super::ApiClient;
use crate::error::ApiResult;
use crate::models::MoodAnalysis;

pub const ANALYZE_MOOD_PATH: &str = "/api/analyze-mood";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzeMoodArgs {
    pub memory_text: String,
    pub user_id: String,
}

impl ApiClient {
    /// Ask the backend to classify free text into a mood
    pub async fn analyze_mood(&self, args: &AnalyzeMoodArgs) -> ApiResult<MoodAnalysis> {
        self.post_json(ANALYZE_MOOD_PATH, args).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Mood;
    use serde_json::json;

    #[test]
    fn test_args_body() {
        let args = AnalyzeMoodArgs {
            memory_text: "walking through the park".into(),
            user_id: "demo_user".into(),
        };
        assert_eq!(
            serde_json::to_value(&args).unwrap(),
            json!({ "memory_text": "walking through the park", "user_id": "demo_user" })
        );
    }

    #[test]
    fn test_response_body() {
        let analysis: MoodAnalysis = serde_json::from_value(json!({
            "mood": "peaceful",
            "confidence": 0.87,
            "emotions": ["gratitude", "calm"],
            "analysis": "A quiet, content memory."
        }))
        .unwrap();
        assert_eq!(analysis.mood, Mood::Peaceful);
        assert_eq!(analysis.emotions, vec!["gratitude", "calm"]);
        assert!((analysis.confidence - 0.87).abs() < f64::EPSILON);
    }
}
