//! Mood Grid Component
//!
//! Direct pick from the fixed mood catalog.

use leptos::prelude::*;

use crate::catalog::MOODS;
use crate::context::use_app_context;
use crate::store::{AppStateStoreFields, Event};

#[component]
pub fn MoodGrid() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <section class="mood-grid-section">
            <h3 class="section-title">"Or choose your mood directly"</h3>
            <div class="mood-grid">
                {MOODS.iter().map(|info| {
                    let mood = info.mood.clone();
                    let is_selected = move || ctx.store.current_mood().get().as_ref() == Some(&info.mood);
                    view! {
                        <button
                            type="button"
                            class=move || if is_selected() {
                                format!("mood-btn active {}", info.gradient)
                            } else {
                                "mood-btn".to_string()
                            }
                            on:click=move |_| ctx.dispatch(Event::MoodSelected(mood.clone()))
                        >
                            <span class="mood-btn-emoji">{info.emoji}</span>
                            <span class="mood-btn-name">{info.mood.as_str()}</span>
                            <span class="mood-btn-desc">{info.description}</span>
                        </button>
                    }
                }).collect_view()}
            </div>
        </section>
    }
}
