//! Search-hit highlighting for catalog cards.

use contracts::shared::catalog::highlight_segments;
use leptos::prelude::*;

/// Renders `text` with every case-insensitive occurrence of `query` wrapped in `<mark>`.
pub fn highlight_matches(text: &str, query: &str) -> AnyView {
    let parts = highlight_segments(text, query)
        .into_iter()
        .map(|(segment, is_match)| {
            let segment = segment.to_string();
            if is_match {
                view! { <mark class="search-hit">{segment}</mark> }.into_any()
            } else {
                view! { <span>{segment}</span> }.into_any()
            }
        })
        .collect::<Vec<_>>();

    view! { <>{parts}</> }.into_any()
}

/// Reactive wrapper around [`highlight_matches`] bound to a search signal.
#[component]
pub fn Highlight(
    text: &'static str,
    #[prop(into)]
    query: Signal<String>,
) -> impl IntoView {
    move || query.with(|q| highlight_matches(text, q))
}
