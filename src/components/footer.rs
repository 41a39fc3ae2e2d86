//! App Footer Component

use leptos::prelude::*;

#[component]
pub fn AppFooter() -> impl IntoView {
    view! {
        <footer class="app-footer">
            <div class="footer-brand">
                <div class="brand-icon small">"❤"</div>
                <h3 class="brand-title">"Moods"</h3>
            </div>
            <p class="footer-tagline">
                "Discover content that matches your emotions. Powered by advanced AI and real-time mood analysis."
            </p>
            <div class="footer-features">
                <span>"⚡ AI-Powered"</span>
                <span>"🌐 Multi-Language"</span>
                <span>"❤ Mood-Based"</span>
            </div>
            <p class="footer-copy">"© 2025 Moods. Discover content that matches your emotions."</p>
        </footer>
    }
}
