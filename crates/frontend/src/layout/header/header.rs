use crate::layout::header::nav_menu::NavMenuBar;
use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use contracts::school::SCHOOL;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[component]
pub fn Header() -> impl IntoView {
    let mobile_open = RwSignal::new(false);
    let location = use_location();

    // Any navigation closes the mobile menu.
    Effect::new(move |_| {
        location.pathname.track();
        mobile_open.set(false);
    });

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <A href="/">
                    <span class="header__brand">
                        <span class="header__logo">{icon("graduation-cap")}</span>
                        <span class="header__title">{SCHOOL.short_name}</span>
                    </span>
                </A>
                <div
                    class="header__nav"
                    class:header__nav-open=move || mobile_open.get()
                >
                    <NavMenuBar />
                </div>
            </div>
            <div class="header__actions">
                <ThemeToggle />
                <button
                    class="header__icon-btn header__menu-btn"
                    aria-label="Toggle navigation"
                    aria-expanded=move || mobile_open.get().to_string()
                    on:click=move |_| mobile_open.update(|open| *open = !*open)
                >
                    {move || if mobile_open.get() { icon("x") } else { icon("menu") }}
                </button>
            </div>
        </header>
    }
}
