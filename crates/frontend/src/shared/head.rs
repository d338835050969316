//! Per-page `<title>` and `<meta name="description">`.

use contracts::school::SCHOOL;
use contracts::site::routes::{page_title, route_for, PageKey};
use leptos::prelude::*;
use web_sys::window;

pub fn set_page_head(title: &str, description: &str) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };

    document.set_title(title);

    let meta = match document.query_selector("meta[name='description']") {
        Ok(Some(meta)) => Some(meta),
        _ => document.create_element("meta").ok().and_then(|meta| {
            let _ = meta.set_attribute("name", "description");
            let head = document.head()?;
            head.append_child(&meta).ok()?;
            Some(meta)
        }),
    };
    if let Some(meta) = meta {
        let _ = meta.set_attribute("content", description);
    }
}

/// Sets the head tags from the route table entry of `page`. Renders nothing.
#[component]
pub fn PageHead(page: PageKey) -> impl IntoView {
    let route = route_for(page);
    set_page_head(&page_title(route, SCHOOL.short_name), route.description);
}

/// Head tags for pages outside the route table (404).
#[component]
pub fn RawPageHead(#[prop(into)] title: String, #[prop(into)] description: String) -> impl IntoView {
    set_page_head(&format!("{} | {}", title, SCHOOL.short_name), &description);
}
