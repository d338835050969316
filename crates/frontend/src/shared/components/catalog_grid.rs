use crate::shared::catalog_state::CatalogController;
use crate::shared::components::empty_state::EmptyState;
use contracts::shared::catalog::{Categorized, Searchable, Sortable};
use leptos::prelude::*;

/// Renders the controller's visible records with `card`, or an empty state
/// with a reset action when nothing matches.
#[component]
pub fn CatalogGrid<T, F>(
    controller: CatalogController<T>,
    /// Builds one card from a record and its position in the view.
    card: F,
    #[prop(into)]
    empty_message: String,
    /// Extra classes for the grid container (column count).
    #[prop(optional, into)]
    class: String,
) -> impl IntoView
where
    T: Searchable + Categorized + Sortable + PartialEq + Send + Sync + 'static,
    F: Fn(&'static T, usize) -> AnyView + Send + Sync + 'static,
{
    let grid_class = if class.is_empty() {
        "card-grid".to_string()
    } else {
        format!("card-grid {}", class)
    };
    let on_reset = Callback::new(move |_| controller.reset());

    move || {
        let visible = controller.visible.get();
        if visible.is_empty() {
            view! { <EmptyState message=empty_message.clone() on_reset=on_reset /> }.into_any()
        } else {
            let cards = visible
                .into_iter()
                .enumerate()
                .map(|(index, record)| card(record, index))
                .collect_view();
            view! { <div class=grid_class.clone()>{cards}</div> }.into_any()
        }
    }
}
