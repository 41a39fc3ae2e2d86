//! Display Utilities
//!
//! Pure helpers shared by the view components.

use crate::models::{ContentType, RecommendationItem};

/// Result tabs over the single fetched recommendation list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    All,
    Movies,
    Books,
    Dramas,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::All, Tab::Movies, Tab::Books, Tab::Dramas];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::All => "All",
            Tab::Movies => "Movies",
            Tab::Books => "Books",
            Tab::Dramas => "Shows",
        }
    }

    pub fn matches(&self, item: &RecommendationItem) -> bool {
        match self {
            Tab::All => true,
            Tab::Movies => item.content_type == ContentType::Movie,
            Tab::Books => item.content_type == ContentType::Book,
            Tab::Dramas => item.content_type == ContentType::Drama,
        }
    }
}

/// Items shown under a tab, in fetched order
pub fn items_for_tab(items: &[RecommendationItem], tab: Tab) -> Vec<RecommendationItem> {
    items.iter().filter(|item| tab.matches(item)).cloned().collect()
}

/// What fills the art area of a recommendation card
#[derive(Debug, Clone, PartialEq)]
pub enum CardArt {
    Image(String),
    /// No image available: glyph for the item's kind
    Placeholder(ContentType),
}

pub fn card_art(item: &RecommendationItem) -> CardArt {
    match item.image_url.as_deref().map(str::trim) {
        Some(url) if !url.is_empty() => CardArt::Image(url.to_string()),
        _ => CardArt::Placeholder(item.content_type.clone()),
    }
}

/// Confidence as a whole percentage, e.g. `0.856` -> `"86%"`. Out-of-range
/// values are shown as reported.
pub fn format_confidence(confidence: f64) -> String {
    let percent = (confidence * 100.0).round() as i64;
    format!("{}%", percent)
}

pub fn format_rating(rating: f64) -> String {
    format!("{:.1}", rating)
}

/// Uppercase the first character
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: &str, content_type: ContentType, image_url: Option<&str>) -> RecommendationItem {
        RecommendationItem {
            id: id.to_string(),
            title: format!("Title {}", id),
            description: String::new(),
            content_type,
            language: "en".to_string(),
            year: None,
            rating: None,
            image_url: image_url.map(str::to_string),
            genre: vec![],
        }
    }

    #[test]
    fn test_tabs_filter_client_side() {
        let items = vec![
            make_item("m1", ContentType::Movie, None),
            make_item("b1", ContentType::Book, None),
            make_item("d1", ContentType::Drama, None),
            make_item("m2", ContentType::Movie, None),
        ];

        let movies = items_for_tab(&items, Tab::Movies);
        let ids: Vec<&str> = movies.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["m1", "m2"]);

        assert_eq!(items_for_tab(&items, Tab::All).len(), 4);
        assert_eq!(items_for_tab(&items, Tab::Books)[0].id, "b1");
        assert_eq!(items_for_tab(&items, Tab::Dramas)[0].id, "d1");
    }

    #[test]
    fn test_unknown_kind_only_under_all() {
        let items = vec![make_item("x", ContentType::Other("podcast".to_string()), None)];
        assert_eq!(items_for_tab(&items, Tab::All).len(), 1);
        for tab in [Tab::Movies, Tab::Books, Tab::Dramas] {
            assert!(items_for_tab(&items, tab).is_empty());
        }
    }

    #[test]
    fn test_card_art() {
        let with_image = make_item("a", ContentType::Movie, Some("https://img/a.jpg"));
        assert_eq!(card_art(&with_image), CardArt::Image("https://img/a.jpg".into()));

        let without = make_item("b", ContentType::Book, None);
        assert_eq!(card_art(&without), CardArt::Placeholder(ContentType::Book));

        let blank = make_item("c", ContentType::Drama, Some(""));
        assert_eq!(card_art(&blank), CardArt::Placeholder(ContentType::Drama));
    }

    #[test]
    fn test_format_confidence() {
        assert_eq!(format_confidence(0.856), "86%");
        assert_eq!(format_confidence(0.5), "50%");
        assert_eq!(format_confidence(1.0), "100%");
        assert_eq!(format_confidence(0.0), "0%");
        assert_eq!(format_confidence(1.4), "140%");
        assert_eq!(format_confidence(85.0), "8500%");
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(8.0), "8.0");
        assert_eq!(format_rating(4.46), "4.5");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("nostalgic"), "Nostalgic");
        assert_eq!(capitalize(""), "");
    }
}
