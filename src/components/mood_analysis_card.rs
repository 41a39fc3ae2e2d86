//! Mood Analysis Card Component
//!
//! Shows the latest analysis: mood pill, explanation, emotions, confidence.

use leptos::prelude::*;

use crate::catalog::{mood_emoji, mood_gradient};
use crate::context::use_app_context;
use crate::display::{capitalize, format_confidence};
use crate::models::MoodAnalysis;
use crate::store::AppStateStoreFields;

#[component]
fn AnalysisBody(analysis: MoodAnalysis) -> impl IntoView {
    let pill_class = format!("mood-pill {}", mood_gradient(&analysis.mood));
    let emoji = mood_emoji(&analysis.mood);
    let label = capitalize(analysis.mood.as_str());
    let confidence = format_confidence(analysis.confidence);

    view! {
        <div class="card analysis-card">
            <div class=pill_class>
                <span class="mood-pill-emoji">{emoji}</span>
                {label}
            </div>
            <p class="analysis-text">{analysis.analysis}</p>
            <div class="emotion-list">
                {analysis.emotions.into_iter().map(|emotion| view! {
                    <span class="badge outline">{emotion}</span>
                }).collect_view()}
            </div>
            <div class="confidence">"Confidence: " {confidence}</div>
        </div>
    }
}

#[component]
pub fn MoodAnalysisCard() -> impl IntoView {
    let ctx = use_app_context();
    let analysis = Memo::new(move |_| ctx.store.mood_analysis().get());

    move || analysis.get().map(|analysis| view! { <AnalysisBody analysis=analysis /> })
}
