//! UI Components
//!
//! Leptos components making up the single-page client.

mod header;
mod mood_input;
mod mood_analysis_card;
mod mood_grid;
mod filter_panel;
mod recommendation_section;
mod content_card;
mod footer;

pub use header::AppHeader;
pub use mood_input::MoodInputCard;
pub use mood_analysis_card::MoodAnalysisCard;
pub use mood_grid::MoodGrid;
pub use filter_panel::FilterPanel;
pub use recommendation_section::RecommendationSection;
pub use content_card::ContentCard;
pub use footer::AppFooter;
