//! Filter Panel Component
//!
//! Content-type and language toggles. Every toggle re-fetches while a mood
//! is active.

use leptos::prelude::*;

use crate::catalog::{CONTENT_CATEGORIES, LANGUAGES};
use crate::context::use_app_context;
use crate::store::{AppStateStoreFields, Event};

/// Selectable filter button
#[component]
fn ToggleChip(
    label: &'static str,
    icon: &'static str,
    selected: Signal<bool>,
    on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=move || if selected.get() { "filter-chip active" } else { "filter-chip" }
            on:click=move |_| on_toggle.run(())
        >
            <span class="filter-chip-icon">{icon}</span>
            {label}
        </button>
    }
}

#[component]
pub fn FilterPanel() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="card filter-panel">
            <div class="filter-group">
                <label class="filter-label">"Content Types"</label>
                <div class="filter-options single-column">
                    {CONTENT_CATEGORIES.iter().map(|&(category, label, icon)| {
                        let selected = Signal::derive(move || {
                            ctx.store.selected_content_types().with(|types| types.contains(&category))
                        });
                        let on_toggle = Callback::new(move |_| ctx.dispatch(Event::ContentTypeToggled(category)));
                        view! { <ToggleChip label=label icon=icon selected=selected on_toggle=on_toggle /> }
                    }).collect_view()}
                </div>
            </div>
            <div class="filter-group">
                <label class="filter-label">"Languages"</label>
                <div class="filter-options two-columns">
                    {LANGUAGES.iter().map(|&(code, label, flag)| {
                        let selected = Signal::derive(move || {
                            ctx.store.selected_languages().with(|langs| langs.iter().any(|l| l == code))
                        });
                        let on_toggle = Callback::new(move |_| ctx.dispatch(Event::LanguageToggled(code.to_string())));
                        view! { <ToggleChip label=label icon=flag selected=selected on_toggle=on_toggle /> }
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
