use crate::shared::icons::icon;
use contracts::site::routes::{find_by_path, routes_in_group, NavGroup, SiteRoute};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

/// One dropdown group of the header navigation.
#[component]
pub fn NavGroupMenu(group: NavGroup) -> impl IntoView {
    let (is_open, set_is_open) = signal(false);
    let location = use_location();
    let items: Vec<&'static SiteRoute> = routes_in_group(group).collect();

    // Highlights the group button while one of its pages is shown.
    let is_current = move || {
        location
            .pathname
            .with(|current| find_by_path(current).is_some_and(|r| r.group == Some(group)))
    };

    Effect::new(move |_| {
        location.pathname.track();
        set_is_open.set(false);
    });

    view! {
        <div
            class="nav-group"
            on:mouseenter=move |_| set_is_open.set(true)
            on:mouseleave=move |_| set_is_open.set(false)
        >
            <button
                class="nav-group__btn"
                class:nav-group__btn-active=move || is_open.get()
                class:nav-group__btn-current=is_current
                aria-haspopup="true"
                aria-expanded=move || is_open.get().to_string()
                on:click=move |_| set_is_open.update(|open| *open = !*open)
            >
                <span>{group.label()}</span>
                <span
                    class="nav-group__chevron"
                    class:nav-group__chevron-open=move || is_open.get()
                >
                    {icon("chevron-down")}
                </span>
            </button>

            <div
                class="nav-group__panel"
                class:nav-group__panel-open=move || is_open.get()
            >
                {items.into_iter().map(|route| view! {
                    <A href=route.path>
                        <span class="nav-group__link">
                            <span class="nav-group__link-title">{route.label}</span>
                            <span class="nav-group__link-desc">{route.description}</span>
                        </span>
                    </A>
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn NavMenuBar() -> impl IntoView {
    view! {
        <nav class="nav-bar" aria-label="Main">
            {NavGroup::all()
                .iter()
                .map(|&group| view! { <NavGroupMenu group=group /> })
                .collect_view()}
        </nav>
    }
}
