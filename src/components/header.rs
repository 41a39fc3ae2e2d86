//! App Header Component
//!
//! Brand row with the backend status badge.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{AppStateStoreFields, BackendHealth};

/// Badge CSS class, label and tooltip for the backend status
fn status_badge(health: &BackendHealth) -> (&'static str, &'static str, String) {
    match health {
        BackendHealth::Unknown => ("status-badge pending", "Connecting", "Checking backend...".to_string()),
        BackendHealth::Online(status) if status.is_healthy() => {
            let analysis = if status.llm_available {
                "AI mood analysis available"
            } else {
                "AI mood analysis unavailable, using fallback"
            };
            let app = status.app.as_deref().unwrap_or("Backend");
            let version = status.version.as_deref().unwrap_or("?");
            let catalogs = match (status.apis_configured.tmdb, status.apis_configured.google_books) {
                (true, true) => "live catalogs",
                (false, false) => "demo catalogs",
                _ => "partly demo catalogs",
            };
            (
                "status-badge live",
                "Live",
                format!("{} v{}: {}, {}", app, version, analysis, catalogs),
            )
        }
        BackendHealth::Online(status) => (
            "status-badge degraded",
            "Degraded",
            format!("Backend reports status \"{}\"", status.status),
        ),
        BackendHealth::Offline => ("status-badge offline", "Offline", "Backend unreachable".to_string()),
    }
}

#[component]
pub fn AppHeader() -> impl IntoView {
    let ctx = use_app_context();
    let badge = move || status_badge(&ctx.store.backend().get());

    view! {
        <header class="app-header">
            <div class="header-inner">
                <div class="brand">
                    <div class="brand-icon">"❤"</div>
                    <div>
                        <h1 class="brand-title">"Moods"</h1>
                        <p class="brand-subtitle">"AI-powered mood-based recommendations"</p>
                    </div>
                </div>
                <div class="header-badges">
                    <span class="pill">"✨ Powered by AI"</span>
                    <span class=move || badge().0 title=move || badge().2>
                        {move || badge().1}
                    </span>
                </div>
            </div>
        </header>
    }
}
