//! Content Card Component
//!
//! One recommended item: art, kind badge, rating, title, description, meta.

use leptos::prelude::*;
use log::debug;
use wasm_bindgen::JsCast;

use crate::catalog::{content_glyph, PLACEHOLDER_IMAGE_URL};
use crate::display::{card_art, format_rating, CardArt};
use crate::models::RecommendationItem;

/// Swap a broken image for the placeholder, once
fn fallback_to_placeholder(ev: &web_sys::Event) {
    let Some(img) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlImageElement>().ok()) else {
        return;
    };
    if img.src() != PLACEHOLDER_IMAGE_URL {
        debug!("image failed to load: {}", img.src());
        img.set_src(PLACEHOLDER_IMAGE_URL);
    }
}

#[component]
pub fn ContentCard(item: RecommendationItem) -> impl IntoView {
    let art = match card_art(&item) {
        CardArt::Image(url) => view! {
            <img
                class="card-image"
                src=url
                alt=item.title.clone()
                on:error=move |ev| fallback_to_placeholder(&ev)
            />
        }
        .into_any(),
        CardArt::Placeholder(kind) => view! {
            <div class="card-placeholder">
                <div class="placeholder-glyph">{content_glyph(&kind)}</div>
                <p>"No Image Available"</p>
            </div>
        }
        .into_any(),
    };

    let rating = item.rating.map(|r| view! {
        <div class="rating-badge">"★ " {format_rating(r)}</div>
    });
    let year = item.year.map(|y| view! { <span class="meta-entry">"📅 " {y}</span> });
    let language = item.language.to_uppercase();
    let genres = (!item.genre.is_empty()).then(|| view! {
        <div class="genre-list">
            {item.genre.iter().map(|g| view! { <span class="badge subtle">{g.clone()}</span> }).collect_view()}
        </div>
    });

    view! {
        <article class="content-card">
            <div class="card-art">
                {art}
                <span class="type-badge">{item.content_type.as_str().to_string()}</span>
                {rating}
                <div class="card-art-overlay"></div>
            </div>
            <div class="card-body">
                <h3 class="content-title">{item.title.clone()}</h3>
                <p class="content-description">{item.description.clone()}</p>
                {genres}
                <div class="card-meta">
                    <div class="meta-left">
                        {year}
                        <span class="meta-entry language">"🌐 " {language}</span>
                    </div>
                    <span class="meta-popular">"📈 Popular"</span>
                </div>
            </div>
        </article>
    }
}
