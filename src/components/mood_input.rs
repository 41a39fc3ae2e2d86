//! Mood Input Component
//!
//! Free-text memory input that submits for mood analysis.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{AppStateStoreFields, Event};

const PLACEHOLDER: &str = "I remember walking through the park on a sunny afternoon, \
    feeling grateful for the small moments of peace...";

#[component]
pub fn MoodInputCard() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.dispatch(Event::AnalyzeRequested);
    };

    view! {
        <form class="card mood-input-card" on:submit=on_submit>
            <div class="card-header">
                <h2 class="card-title">
                    <span class="card-title-icon">"❤"</span>
                    "Tell us about your mood"
                </h2>
                <p class="card-description">
                    "Share a memory, experience, or just describe how you're feeling right now"
                </p>
            </div>
            <textarea
                class="mood-textarea"
                placeholder=PLACEHOLDER
                prop:value=move || store.memory_text().get()
                on:input=move |ev| ctx.dispatch(Event::MemoryTextChanged(event_target_value(&ev)))
            ></textarea>
            <button
                type="submit"
                class="primary-btn analyze-btn"
                disabled=move || !store.with(|state| state.can_analyze())
            >
                {move || if store.pending_analysis().get().is_some() {
                    view! { <span class="spinner"></span>"Analyzing your mood..." }.into_any()
                } else {
                    view! { <span class="btn-icon">"🧠"</span>"Analyze My Mood" }.into_any()
                }}
            </button>
        </form>
    }
}
