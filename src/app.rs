//! Moods Frontend App
//!
//! Root component: builds the store and API client, provides the context and
//! lays out the page.

use leptos::prelude::*;
use log::info;
use reactive_stores::Store;

use crate::api::ApiClient;
use crate::components::{
    AppFooter, AppHeader, FilterPanel, MoodAnalysisCard, MoodGrid, MoodInputCard, RecommendationSection,
};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    info!("backend at {}, user {}", config.backend_url, config.user_id);

    let store = Store::new(AppState::new(config.user_id.clone()));
    let ctx = AppContext::new(store, ApiClient::new(config.backend_url));
    provide_context(ctx);

    // Probe backend once on mount
    Effect::new(move |_| ctx.check_health());

    let has_mood = move || store.current_mood().with(|mood| mood.is_some());

    view! {
        <div class="app-shell">
            <div class="background-blobs">
                <div class="blob blob-top"></div>
                <div class="blob blob-bottom"></div>
            </div>

            <AppHeader />

            <main class="main-content">
                <section class="hero">
                    <h2 class="hero-title">"Discover Content That Matches Your Soul"</h2>
                    <p class="hero-text">
                        "Share a memory, describe your feelings, or choose your current mood. "
                        "Our advanced AI will curate the perfect entertainment just for you."
                    </p>
                </section>

                <MoodInputCard />
                <MoodAnalysisCard />

                <MoodGrid />

                <Show when=has_mood>
                    <FilterPanel />
                    <RecommendationSection />
                </Show>
            </main>

            <AppFooter />
        </div>
    }
}
