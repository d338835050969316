use crate::shared::components::ui::button::Button;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Shown in place of a grid when the current query matches nothing.
#[component]
pub fn EmptyState(
    #[prop(into)]
    message: String,
    /// Clears the query; the button is hidden without it.
    #[prop(optional)]
    on_reset: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="empty-state" role="status">
            <div class="empty-state__icon">{icon("search")}</div>
            <p class="empty-state__message">{message}</p>
            {on_reset.map(|reset| view! {
                <Button variant="secondary" size="sm" on_click=Callback::new(move |_| reset.run(()))>
                    "Clear filters"
                </Button>
            })}
        </div>
    }
}
