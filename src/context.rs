//! Application Context
//!
//! Shared store and API client provided via Leptos Context API, plus the
//! runner that turns store effects into HTTP calls and alerts.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{debug, error, warn};

use crate::api::ApiClient;
use crate::store::{AppStore, BackendHealth, Effect, Event};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    api: StoredValue<ApiClient>,
}

impl AppContext {
    pub fn new(store: AppStore, api: ApiClient) -> Self {
        Self {
            store,
            api: StoredValue::new(api),
        }
    }

    /// Apply an event to the store and run whatever it asks for
    pub fn dispatch(&self, event: Event) {
        let effects = self.store.try_update(|state| state.apply(event)).unwrap_or_default();
        for effect in effects {
            self.run(effect);
        }
    }

    /// Probe the backend once and record whether it is reachable
    pub fn check_health(&self) {
        let ctx = *self;
        spawn_local(async move {
            let client = ctx.api.get_value();
            let health = match client.health().await {
                Ok(status) => BackendHealth::Online(status),
                Err(e) => {
                    warn!("health check against {} failed: {}", client.base_url(), e);
                    BackendHealth::Offline
                }
            };
            ctx.dispatch(Event::HealthChecked(health));
        });
    }

    fn run(&self, effect: Effect) {
        let ctx = *self;
        match effect {
            Effect::AnalyzeMood { seq, args } => spawn_local(async move {
                let client = ctx.api.get_value();
                let event = match client.analyze_mood(&args).await {
                    Ok(analysis) => Event::AnalysisSucceeded { seq, analysis },
                    Err(error) => Event::AnalysisFailed { seq, error },
                };
                ctx.dispatch(event);
            }),
            Effect::FetchRecommendations { seq, args } => spawn_local(async move {
                let client = ctx.api.get_value();
                let event = match client.recommendations(&args).await {
                    Ok(response) => {
                        debug!(
                            "recommendations #{} answered for mood {:?}, total_count={:?}",
                            seq, response.mood, response.total_count
                        );
                        Event::RecommendationsSucceeded { seq, items: response.recommendations }
                    }
                    Err(error) => Event::RecommendationsFailed { seq, error },
                };
                ctx.dispatch(event);
            }),
            Effect::Alert(message) => show_alert(&message),
        }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

fn show_alert(message: &str) {
    let Some(window) = web_sys::window() else {
        error!("{}", message);
        return;
    };
    if window.alert_with_message(message).is_err() {
        error!("{}", message);
    }
}
