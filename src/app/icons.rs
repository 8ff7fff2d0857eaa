use leptos::prelude::*;

use crate::glyphs::glyph;

/// Inline stroke glyph on a 24x24 grid, drawn in `currentColor`.
#[component]
pub fn Icon(name: &'static str, #[prop(optional)] class: &'static str) -> impl IntoView {
    let paths: &[&str] = match glyph(name) {
        Some(paths) => paths,
        None => {
            log::warn!("no glyph named {name}");
            &[]
        }
    };
    view! {
        <svg
            class=format!("icon {class}")
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            data-icon=name
        >
            {paths.iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
}
