use crate::shared::icons::icon;
use leptos::prelude::*;

/// Lazy-loaded remote image that swaps to a placeholder when loading fails.
#[component]
pub fn RemoteImage(
    src: &'static str,
    #[prop(into)]
    alt: String,
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    let failed = RwSignal::new(false);
    let class = if class.is_empty() {
        "remote-image".to_string()
    } else {
        format!("remote-image {}", class)
    };
    let placeholder_class = format!("{} remote-image--placeholder", class);

    view! {
        <Show
            when=move || !failed.get()
            fallback=move || view! {
                <div class=placeholder_class.clone() role="img" aria-label="Image unavailable">
                    {icon("image")}
                </div>
            }
        >
            <img
                class=class.clone()
                src=src
                alt=alt.clone()
                loading="lazy"
                on:error=move |_| {
                    log::warn!("image failed to load: {}", src);
                    failed.set(true);
                }
            />
        </Show>
    }
}
