pub mod footer;
pub mod header;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Page chrome shared by every route.
///
/// ```text
/// +------------------------------------------+
/// |  Header (brand, nav groups, theme)       |
/// +------------------------------------------+
/// |  Routed page                             |
/// +------------------------------------------+
/// |  Footer (contacts, quick links)          |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let location = use_location();

    // New pages start at the top.
    Effect::new(move |_| {
        location.pathname.track();
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    view! {
        <div class="site-layout">
            <a class="skip-link" href="#main-content">"Skip to content"</a>
            <header::Header />
            <main id="main-content" class="site-main" tabindex="-1">
                {children()}
            </main>
            <footer::Footer />
        </div>
    }
}
