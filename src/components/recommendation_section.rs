//! Recommendation Section Component
//!
//! Heading, loading indicator, tab bar and card grid. Tabs filter the one
//! fetched list client-side.

use leptos::prelude::*;

use crate::catalog::mood_gradient;
use crate::components::ContentCard;
use crate::context::use_app_context;
use crate::display::{items_for_tab, Tab};
use crate::store::{AppStateStoreFields, Event};

#[component]
fn TabBar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="tab-list" role="tablist">
            {Tab::ALL.iter().map(|&tab| {
                let count = move || ctx.store.recommendations().with(|items| {
                    items.iter().filter(|item| tab.matches(item)).count()
                });
                view! {
                    <button
                        type="button"
                        role="tab"
                        class=move || if ctx.store.active_tab().get() == tab { "tab active" } else { "tab" }
                        on:click=move |_| ctx.dispatch(Event::TabSelected(tab))
                    >
                        {tab.label()}
                        <span class="tab-count">{count}</span>
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

/// Which body the section shows
#[derive(Clone, Copy, PartialEq)]
enum SectionState {
    Loading,
    Empty,
    Results,
}

#[component]
pub fn RecommendationSection() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let mood_label = move || store.current_mood().get().map(|m| m.to_string()).unwrap_or_default();
    let mood_class = move || {
        let gradient = store.current_mood().get().map_or("", |m| mood_gradient(&m));
        format!("gradient-text {}", gradient)
    };

    let section_state = Memo::new(move |_| {
        if store.pending_recommendations().get().is_some() {
            SectionState::Loading
        } else if store.recommendations().with(|items| items.is_empty()) {
            SectionState::Empty
        } else {
            SectionState::Results
        }
    });

    view! {
        <section class="recommendations">
            <div class="section-heading">
                <h3 class="recommendations-title">
                    "Perfect for your " <span class=mood_class>{mood_label}</span> " mood"
                </h3>
                <p class="section-subtitle">"Curated recommendations powered by AI"</p>
            </div>
            {move || match section_state.get() {
                SectionState::Loading => view! {
                    <div class="loading-state">
                        <div class="loading-orb"><span class="spinner large"></span></div>
                        <p>"Finding perfect recommendations..."</p>
                    </div>
                }.into_any(),
                SectionState::Empty => view! {
                    <div class="empty-state">
                        <div class="empty-emoji">"😔"</div>
                        <p>"No recommendations found. Try a different mood or check your filters."</p>
                    </div>
                }.into_any(),
                SectionState::Results => view! {
                    <TabBar />
                    <div class="content-grid">
                        <For
                            each=move || {
                                let tab = store.active_tab().get();
                                store.recommendations()
                                    .with(|items| items_for_tab(items, tab))
                                    .into_iter()
                                    .enumerate()
                            }
                            key=|(index, item)| (*index, item.id.clone())
                            children=move |(_, item)| view! { <ContentCard item=item /> }
                        />
                    </div>
                }.into_any(),
            }}
        </section>
    }
}
