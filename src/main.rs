//! Moods Frontend Entry Point

mod api;
mod app;
mod catalog;
mod components;
mod config;
mod context;
mod display;
mod error;
mod models;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    if console_logger::init(config.log_level).is_err() {
        web_sys::console::warn_1(&"logger already installed".into());
    }

    mount_to_body(move || view! { <App config=config.clone() /> });
}
