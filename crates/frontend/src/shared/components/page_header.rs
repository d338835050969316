use leptos::prelude::*;

/// Title block at the top of every page.
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,
    /// Small label above the title.
    #[prop(optional, into)]
    eyebrow: MaybeProp<String>,
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
    /// Actions rendered on the right (buttons, links).
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <header class="page-header">
            <div class="page-header__text">
                {move || eyebrow.get().map(|e| view! {
                    <div class="page-header__eyebrow">{e}</div>
                })}
                <h1 class="page-header__title">{title}</h1>
                {move || subtitle.get().map(|s| view! {
                    <p class="page-header__subtitle">{s}</p>
                })}
            </div>
            {children.map(|c| view! {
                <div class="page-header__actions">{c()}</div>
            })}
        </header>
    }
}
