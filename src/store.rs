//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. All mutations go
//! through [`AppState::apply`], which returns the side effects (HTTP calls,
//! alerts) for the caller to run.

use log::{debug, info, warn};
use reactive_stores::Store;

use crate::api::{AnalyzeMoodArgs, RecommendationArgs};
use crate::catalog;
use crate::config::DEFAULT_USER_ID;
use crate::display::Tab;
use crate::error::ApiError;
use crate::models::{ContentCategory, HealthStatus, Mood, MoodAnalysis, RecommendationItem};

pub const ANALYSIS_FAILED_MESSAGE: &str = "Failed to analyze mood. Please try again.";
pub const RECOMMENDATIONS_FAILED_MESSAGE: &str = "Failed to get recommendations. Please try again.";

/// Backend reachability as last reported by the health endpoint
#[derive(Clone, Debug, Default, PartialEq)]
pub enum BackendHealth {
    #[default]
    Unknown,
    Online(HealthStatus),
    Offline,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// Free text typed into the mood input
    pub memory_text: String,
    /// Mood driving recommendations (picked or analysed)
    pub current_mood: Option<Mood>,
    /// Last analysis result, cleared on direct mood pick
    pub mood_analysis: Option<MoodAnalysis>,
    /// Result of the latest completed recommendations request
    pub recommendations: Vec<RecommendationItem>,
    /// Content filters in toggle order
    pub selected_content_types: Vec<ContentCategory>,
    /// Language filters in toggle order
    pub selected_languages: Vec<String>,
    pub active_tab: Tab,
    pub backend: BackendHealth,
    /// Sequence number of the analysis request in flight
    pub pending_analysis: Option<u64>,
    /// Sequence number of the latest recommendations request, while unanswered
    pub pending_recommendations: Option<u64>,
    pub last_seq: u64,
    pub user_id: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_USER_ID)
    }
}

/// User interactions and request completions
#[derive(Debug)]
pub enum Event {
    MemoryTextChanged(String),
    AnalyzeRequested,
    AnalysisSucceeded { seq: u64, analysis: MoodAnalysis },
    AnalysisFailed { seq: u64, error: ApiError },
    MoodSelected(Mood),
    ContentTypeToggled(ContentCategory),
    LanguageToggled(String),
    RecommendationsSucceeded { seq: u64, items: Vec<RecommendationItem> },
    RecommendationsFailed { seq: u64, error: ApiError },
    TabSelected(Tab),
    HealthChecked(BackendHealth),
}

/// Work requested by a state transition
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    AnalyzeMood { seq: u64, args: AnalyzeMoodArgs },
    FetchRecommendations { seq: u64, args: RecommendationArgs },
    Alert(String),
}

impl AppState {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            memory_text: String::new(),
            current_mood: None,
            mood_analysis: None,
            recommendations: Vec::new(),
            selected_content_types: catalog::default_content_types(),
            selected_languages: catalog::default_languages(),
            active_tab: Tab::All,
            backend: BackendHealth::Unknown,
            pending_analysis: None,
            pending_recommendations: None,
            last_seq: 0,
            user_id: user_id.into(),
        }
    }

    pub fn analyzing(&self) -> bool {
        self.pending_analysis.is_some()
    }

    /// Analyze button is live only for non-blank text and no analysis in flight
    pub fn can_analyze(&self) -> bool {
        !self.memory_text.trim().is_empty() && !self.analyzing()
    }

    /// Apply one event and return the effects it triggers
    pub fn apply(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::MemoryTextChanged(text) => {
                self.memory_text = text;
                vec![]
            }
            Event::AnalyzeRequested => {
                if !self.can_analyze() {
                    return vec![];
                }
                let seq = self.next_seq();
                self.pending_analysis = Some(seq);
                info!("analysis #{} requested ({} chars)", seq, self.memory_text.chars().count());
                vec![Effect::AnalyzeMood {
                    seq,
                    args: AnalyzeMoodArgs {
                        memory_text: self.memory_text.clone(),
                        user_id: self.user_id.clone(),
                    },
                }]
            }
            Event::AnalysisSucceeded { seq, analysis } => {
                if self.pending_analysis != Some(seq) {
                    debug!("dropping stale analysis #{}", seq);
                    return vec![];
                }
                self.pending_analysis = None;
                info!("analysis #{} -> {} ({:.2})", seq, analysis.mood, analysis.confidence);
                let mood = analysis.mood.clone();
                self.mood_analysis = Some(analysis);
                self.current_mood = Some(mood.clone());
                // Keep the displayed list tied to the analysed mood
                vec![self.fetch_recommendations(mood)]
            }
            Event::AnalysisFailed { seq, error } => {
                if self.pending_analysis != Some(seq) {
                    debug!("dropping stale analysis failure #{}: {}", seq, error);
                    return vec![];
                }
                self.pending_analysis = None;
                warn!("analysis #{} failed: {}", seq, error);
                vec![Effect::Alert(ANALYSIS_FAILED_MESSAGE.to_string())]
            }
            Event::MoodSelected(mood) => {
                info!("mood selected: {}", mood);
                self.current_mood = Some(mood.clone());
                self.mood_analysis = None;
                vec![self.fetch_recommendations(mood)]
            }
            Event::ContentTypeToggled(category) => {
                toggle(&mut self.selected_content_types, category);
                self.refetch()
            }
            Event::LanguageToggled(code) => {
                toggle(&mut self.selected_languages, code);
                self.refetch()
            }
            Event::RecommendationsSucceeded { seq, items } => {
                if self.pending_recommendations != Some(seq) {
                    debug!("dropping stale recommendations #{} ({} items)", seq, items.len());
                    return vec![];
                }
                self.pending_recommendations = None;
                info!("recommendations #{}: {} items", seq, items.len());
                self.recommendations = items;
                vec![]
            }
            Event::RecommendationsFailed { seq, error } => {
                if self.pending_recommendations != Some(seq) {
                    debug!("dropping stale recommendations failure #{}: {}", seq, error);
                    return vec![];
                }
                self.pending_recommendations = None;
                warn!("recommendations #{} failed: {}", seq, error);
                vec![Effect::Alert(RECOMMENDATIONS_FAILED_MESSAGE.to_string())]
            }
            Event::TabSelected(tab) => {
                self.active_tab = tab;
                vec![]
            }
            Event::HealthChecked(health) => {
                self.backend = health;
                vec![]
            }
        }
    }

    fn next_seq(&mut self) -> u64 {
        self.last_seq += 1;
        self.last_seq
    }

    /// Re-fetch for the active mood after a filter change
    fn refetch(&mut self) -> Vec<Effect> {
        match self.current_mood.clone() {
            Some(mood) => vec![self.fetch_recommendations(mood)],
            None => vec![],
        }
    }

    /// Issue a request with the filters as they are now; it supersedes any
    /// request still in flight
    fn fetch_recommendations(&mut self, mood: Mood) -> Effect {
        let seq = self.next_seq();
        if let Some(previous) = self.pending_recommendations.replace(seq) {
            debug!("recommendations #{} superseded by #{}", previous, seq);
        }
        info!(
            "recommendations #{} requested: mood={} types={:?} languages={:?}",
            seq, mood, self.selected_content_types, self.selected_languages
        );
        Effect::FetchRecommendations {
            seq,
            args: RecommendationArgs {
                mood,
                content_types: self.selected_content_types.clone(),
                languages: self.selected_languages.clone(),
                user_id: self.user_id.clone(),
            },
        }
    }
}

/// Remove `value` if present, otherwise append it
fn toggle<T: PartialEq>(values: &mut Vec<T>, value: T) {
    if let Some(pos) = values.iter().position(|v| *v == value) {
        values.remove(pos);
    } else {
        values.push(value);
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;
