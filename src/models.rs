//! Frontend Models
//!
//! Data structures matching the recommendation backend's JSON.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Mood label.
///
/// The fifteen catalog moods plus any label the backend invents (its
/// fallback analysis answers `neutral`). Unknown labels are kept verbatim so
/// they can be sent back on recommendation requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Mood {
    Happy,
    Sad,
    Excited,
    Romantic,
    Nostalgic,
    Adventurous,
    Relaxed,
    Anxious,
    Angry,
    Hopeful,
    Melancholic,
    Energetic,
    Peaceful,
    Confused,
    Inspired,
    Other(String),
}

impl Mood {
    pub fn as_str(&self) -> &str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Excited => "excited",
            Mood::Romantic => "romantic",
            Mood::Nostalgic => "nostalgic",
            Mood::Adventurous => "adventurous",
            Mood::Relaxed => "relaxed",
            Mood::Anxious => "anxious",
            Mood::Angry => "angry",
            Mood::Hopeful => "hopeful",
            Mood::Melancholic => "melancholic",
            Mood::Energetic => "energetic",
            Mood::Peaceful => "peaceful",
            Mood::Confused => "confused",
            Mood::Inspired => "inspired",
            Mood::Other(label) => label,
        }
    }
}

impl From<String> for Mood {
    fn from(label: String) -> Self {
        match label.as_str() {
            "happy" => Mood::Happy,
            "sad" => Mood::Sad,
            "excited" => Mood::Excited,
            "romantic" => Mood::Romantic,
            "nostalgic" => Mood::Nostalgic,
            "adventurous" => Mood::Adventurous,
            "relaxed" => Mood::Relaxed,
            "anxious" => Mood::Anxious,
            "angry" => Mood::Angry,
            "hopeful" => Mood::Hopeful,
            "melancholic" => Mood::Melancholic,
            "energetic" => Mood::Energetic,
            "peaceful" => Mood::Peaceful,
            "confused" => Mood::Confused,
            "inspired" => Mood::Inspired,
            _ => Mood::Other(label),
        }
    }
}

impl From<&str> for Mood {
    fn from(label: &str) -> Self {
        Mood::from(label.to_string())
    }
}

impl From<Mood> for String {
    fn from(mood: Mood) -> Self {
        match mood {
            Mood::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of a single recommended item; unknown labels are kept verbatim
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContentType {
    Movie,
    Book,
    Drama,
    Other(String),
}

impl ContentType {
    pub fn as_str(&self) -> &str {
        match self {
            ContentType::Movie => "movie",
            ContentType::Book => "book",
            ContentType::Drama => "drama",
            ContentType::Other(label) => label,
        }
    }
}

impl From<String> for ContentType {
    fn from(label: String) -> Self {
        match label.as_str() {
            "movie" => ContentType::Movie,
            "book" => ContentType::Book,
            "drama" => ContentType::Drama,
            _ => ContentType::Other(label),
        }
    }
}

impl From<ContentType> for String {
    fn from(content_type: ContentType) -> Self {
        match content_type {
            ContentType::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

/// Content filter value sent on recommendation requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentCategory {
    Movies,
    Books,
    Dramas,
}

/// Mood analysis result (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodAnalysis {
    pub mood: Mood,
    pub analysis: String,
    #[serde(default)]
    pub emotions: Vec<String>,
    pub confidence: f64,
}

/// Recommended media item (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub content_type: ContentType,
    #[serde(default)]
    pub language: String,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub genre: Vec<String>,
}

/// Which third-party catalogs the backend has credentials for
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApisConfigured {
    #[serde(default)]
    pub tmdb: bool,
    #[serde(default)]
    pub google_books: bool,
}

/// Backend health report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub app: Option<String>,
    pub version: Option<String>,
    #[serde(default)]
    pub llm_available: bool,
    #[serde(default)]
    pub apis_configured: ApisConfigured,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_label_round_trip() {
        let mood: Mood = serde_json::from_str("\"nostalgic\"").unwrap();
        assert_eq!(mood, Mood::Nostalgic);
        assert_eq!(serde_json::to_string(&mood).unwrap(), "\"nostalgic\"");
    }

    #[test]
    fn test_unknown_mood_is_kept_verbatim() {
        let mood: Mood = serde_json::from_str("\"neutral\"").unwrap();
        assert_eq!(mood, Mood::Other("neutral".to_string()));
        assert_eq!(mood.as_str(), "neutral");
        assert_eq!(serde_json::to_string(&mood).unwrap(), "\"neutral\"");
    }

    #[test]
    fn test_unknown_content_type() {
        let ty: ContentType = serde_json::from_str("\"podcast\"").unwrap();
        assert_eq!(ty, ContentType::Other("podcast".to_string()));
        assert_eq!(ty.as_str(), "podcast");
        assert_eq!(serde_json::to_string(&ty).unwrap(), "\"podcast\"");
    }

    #[test]
    fn test_item_optional_fields() {
        let item: RecommendationItem = serde_json::from_str(
            r#"{"id":"demo_book_1","title":"1984","description":"A dystopian masterpiece",
                "content_type":"book","language":"en","year":null,"rating":null,"image_url":null}"#,
        )
        .unwrap();
        assert_eq!(item.content_type, ContentType::Book);
        assert_eq!(item.year, None);
        assert_eq!(item.rating, None);
        assert_eq!(item.image_url, None);
        assert!(item.genre.is_empty());
    }

    #[test]
    fn test_health_defaults() {
        let health: HealthStatus = serde_json::from_str(r#"{"status":"healthy"}"#).unwrap();
        assert!(health.is_healthy());
        assert!(!health.llm_available);
        assert_eq!(health.apis_configured, ApisConfigured::default());
    }
}
