use crate::shared::head::RawPageHead;
use crate::shared::icons::icon;
use contracts::site::routes::SITE_ROUTES;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();
    let path = location.pathname.get_untracked();
    log::warn!("no route for {}", path);

    let links = SITE_ROUTES
        .iter()
        .map(|route| view! { <li><A href=route.path>{route.label}</A></li> })
        .collect_view();

    view! {
        <RawPageHead title="Page not found" description="The page you were looking for does not exist." />
        <section class="page not-found">
            <div class="not-found__icon">{icon("search")}</div>
            <h1 class="page-header__title">"Page not found"</h1>
            <p class="details__muted">{format!("Nothing lives at {}.", path)}</p>
            <p>"Try one of these pages instead:"</p>
            <ul class="not-found__links">{links}</ul>
        </section>
    }
}
