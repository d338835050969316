use crate::shared::icons::icon;
use leptos::prelude::*;

/// Headline figure with an icon, used on the home and about pages.
#[component]
pub fn StatCard(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: String,
    /// Icon name from [`icon`].
    #[prop(into)]
    icon_name: String,
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__icon">{icon(&icon_name)}</div>
            <div class="stat-card__body">
                <div class="stat-card__value">{value}</div>
                <div class="stat-card__label">{label}</div>
                {move || subtitle.get().map(|s| view! {
                    <div class="stat-card__subtitle">{s}</div>
                })}
            </div>
        </div>
    }
}
