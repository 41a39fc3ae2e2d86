//! Static Catalogs
//!
//! Read-only lookup tables for moods, content filters and languages.

use crate::models::{ContentCategory, ContentType, Mood};

/// Catalog entry for a selectable mood
pub struct MoodInfo {
    pub mood: Mood,
    pub emoji: &'static str,
    pub description: &'static str,
    /// CSS class carrying the mood's gradient
    pub gradient: &'static str,
}

pub static MOODS: &[MoodInfo] = &[
    MoodInfo { mood: Mood::Happy, emoji: "😊", description: "Joyful and uplifting", gradient: "mood-happy" },
    MoodInfo { mood: Mood::Sad, emoji: "😢", description: "Emotional and touching", gradient: "mood-sad" },
    MoodInfo { mood: Mood::Excited, emoji: "🤩", description: "Thrilling and energetic", gradient: "mood-excited" },
    MoodInfo { mood: Mood::Romantic, emoji: "💕", description: "Love and connection", gradient: "mood-romantic" },
    MoodInfo { mood: Mood::Nostalgic, emoji: "🌅", description: "Memories and reflection", gradient: "mood-nostalgic" },
    MoodInfo { mood: Mood::Adventurous, emoji: "🗺️", description: "Exploration and discovery", gradient: "mood-adventurous" },
    MoodInfo { mood: Mood::Relaxed, emoji: "😌", description: "Calm and peaceful", gradient: "mood-relaxed" },
    MoodInfo { mood: Mood::Anxious, emoji: "😰", description: "Tense and suspenseful", gradient: "mood-anxious" },
    MoodInfo { mood: Mood::Angry, emoji: "😠", description: "Intense and powerful", gradient: "mood-angry" },
    MoodInfo { mood: Mood::Hopeful, emoji: "🌟", description: "Inspiring and uplifting", gradient: "mood-hopeful" },
    MoodInfo { mood: Mood::Melancholic, emoji: "🌧️", description: "Deep and contemplative", gradient: "mood-melancholic" },
    MoodInfo { mood: Mood::Energetic, emoji: "⚡", description: "High-octane and dynamic", gradient: "mood-energetic" },
    MoodInfo { mood: Mood::Peaceful, emoji: "🕊️", description: "Serene and harmonious", gradient: "mood-peaceful" },
    MoodInfo { mood: Mood::Confused, emoji: "🤔", description: "Complex and thought-provoking", gradient: "mood-confused" },
    MoodInfo { mood: Mood::Inspired, emoji: "💡", description: "Creative and motivational", gradient: "mood-inspired" },
];

/// Shown for moods outside the catalog
pub const FALLBACK_MOOD_EMOJI: &str = "🎭";
pub const FALLBACK_GRADIENT: &str = "mood-unknown";

/// Substituted when a recommendation image fails to load
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1489599162158-1f92b42d39d6?w=300&h=450&fit=crop";

/// Content filter options: (value, label, icon)
pub const CONTENT_CATEGORIES: &[(ContentCategory, &str, &str)] = &[
    (ContentCategory::Movies, "Movies", "🎬"),
    (ContentCategory::Books, "Books", "📖"),
    (ContentCategory::Dramas, "TV Shows & Dramas", "📺"),
];

/// Language options: (code, label, flag)
pub const LANGUAGES: &[(&str, &str, &str)] = &[
    ("en", "English", "🇺🇸"),
    ("hi", "Hindi", "🇮🇳"),
    ("es", "Spanish", "🇪🇸"),
    ("fr", "French", "🇫🇷"),
    ("ja", "Japanese", "🇯🇵"),
    ("ko", "Korean", "🇰🇷"),
];

pub const DEFAULT_LANGUAGES: &[&str] = &["en"];

pub fn default_content_types() -> Vec<ContentCategory> {
    CONTENT_CATEGORIES.iter().map(|(category, _, _)| *category).collect()
}

pub fn default_languages() -> Vec<String> {
    DEFAULT_LANGUAGES.iter().map(|code| code.to_string()).collect()
}

pub fn mood_info(mood: &Mood) -> Option<&'static MoodInfo> {
    MOODS.iter().find(|info| info.mood == *mood)
}

pub fn mood_emoji(mood: &Mood) -> &'static str {
    mood_info(mood).map_or(FALLBACK_MOOD_EMOJI, |info| info.emoji)
}

pub fn mood_gradient(mood: &Mood) -> &'static str {
    mood_info(mood).map_or(FALLBACK_GRADIENT, |info| info.gradient)
}

/// Glyph for a recommended item's kind
pub fn content_glyph(content_type: &ContentType) -> &'static str {
    match content_type {
        ContentType::Movie => "🎬",
        ContentType::Book => "📖",
        ContentType::Drama => "📺",
        ContentType::Other(_) => "✨",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_mood_catalog_is_complete() {
        assert_eq!(MOODS.len(), 15);
        let names: HashSet<&str> = MOODS.iter().map(|info| info.mood.as_str()).collect();
        assert_eq!(names.len(), 15);
        assert!(MOODS.iter().all(|info| !matches!(info.mood, Mood::Other(_))));
    }

    #[test]
    fn test_defaults() {
        assert_eq!(
            default_content_types(),
            vec![ContentCategory::Movies, ContentCategory::Books, ContentCategory::Dramas]
        );
        assert_eq!(default_languages(), vec!["en".to_string()]);
    }

    #[test]
    fn test_lookup_fallbacks() {
        assert_eq!(mood_emoji(&Mood::Happy), "😊");
        assert_eq!(mood_gradient(&Mood::Peaceful), "mood-peaceful");
        let neutral = Mood::from("neutral");
        assert_eq!(mood_emoji(&neutral), FALLBACK_MOOD_EMOJI);
        assert_eq!(mood_gradient(&neutral), FALLBACK_GRADIENT);
    }

    #[test]
    fn test_unknown_kind_gets_generic_glyph() {
        assert_eq!(content_glyph(&ContentType::Book), "📖");
        assert_eq!(content_glyph(&ContentType::Other("podcast".to_string())), "✨");
    }

    #[test]
    fn test_language_codes_unique() {
        let codes: HashSet<&str> = LANGUAGES.iter().map(|(code, _, _)| *code).collect();
        assert_eq!(codes.len(), LANGUAGES.len());
    }
}
