use leptos::prelude::*;

/// Small pill label.
#[component]
pub fn Badge(
    /// "primary", "success", "warning", "accent" or "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    children: Children,
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "accent" => "badge--accent",
        _ => "badge--neutral",
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}
