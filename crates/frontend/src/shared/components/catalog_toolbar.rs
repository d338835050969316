//! Category chips, search box and sort selector bound to a [`CatalogController`].

use crate::shared::catalog_state::CatalogController;
use crate::shared::components::ui::badge::Badge;
use crate::shared::icons::icon;
use contracts::shared::catalog::{CategoryFilter, Categorized, Choice, Searchable, Sortable};
use leptos::prelude::*;

fn chip_class(active: bool) -> &'static str {
    if active {
        "chip chip--active"
    } else {
        "chip"
    }
}

/// `"2 filters"`; `None` when nothing narrows the catalog.
fn filters_label(count: usize) -> Option<String> {
    match count {
        0 => None,
        1 => Some("1 filter".to_string()),
        n => Some(format!("{} filters", n)),
    }
}

#[component]
pub fn CatalogToolbar<T>(
    controller: CatalogController<T>,
    /// Placeholder of the search box.
    #[prop(into)]
    search_placeholder: String,
    /// Label of the "all" chip, e.g. "All departments".
    #[prop(optional, into)]
    all_label: Option<String>,
    /// Hides the sort selector for catalogs with a single order.
    #[prop(optional)]
    hide_sort: bool,
) -> impl IntoView
where
    T: Searchable + Categorized + Sortable + PartialEq + Send + Sync + 'static,
{
    let query = controller.query;
    let total = controller.catalog.len();
    let counts = controller.catalog.count_by_category();
    let all_label = all_label.unwrap_or_else(|| "All".to_string());

    let is_selected = move |filter: CategoryFilter<T::Category>| {
        query.with(|q| q.category == filter)
    };

    let all_chip = view! {
        <button
            type="button"
            class=move || chip_class(is_selected(CategoryFilter::All))
            aria-pressed=move || is_selected(CategoryFilter::All).to_string()
            on:click=move |_| controller.set_category(CategoryFilter::All)
        >
            {all_label}
            <span class="chip__count">{total}</span>
        </button>
    };

    let category_chips = counts
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .map(|(category, count)| {
            let filter = CategoryFilter::Only(category);
            view! {
                <button
                    type="button"
                    class=move || chip_class(is_selected(filter))
                    aria-pressed=move || is_selected(filter).to_string()
                    on:click=move |_| controller.set_category(filter)
                >
                    {category.label()}
                    <span class="chip__count">{count}</span>
                </button>
            }
        })
        .collect_view();

    let sort_options = T::SortKey::all()
        .iter()
        .map(|key| view! { <option value=key.code()>{key.label()}</option> })
        .collect_view();

    let shown = move || controller.visible.with(|v| v.len());
    let is_active = move || query.with(|q| q.is_active());
    let filters_badge = move || {
        filters_label(query.with(|q| q.active_filters_count()))
            .map(|label| view! { <Badge variant="primary">{label}</Badge> })
    };

    view! {
        <div class="catalog-toolbar">
            <div class="catalog-toolbar__chips" role="group" aria-label="Filter by category">
                {all_chip}
                {category_chips}
            </div>
            <div class="catalog-toolbar__controls">
                <label class="search-box">
                    <span class="search-box__icon">{icon("search")}</span>
                    <input
                        type="search"
                        class="search-box__input"
                        placeholder=search_placeholder.clone()
                        aria-label=search_placeholder
                        prop:value=move || query.with(|q| q.search.clone())
                        on:input=move |ev| controller.set_search(event_target_value(&ev))
                    />
                </label>
                {(!hide_sort).then(|| view! {
                    <select
                        class="catalog-toolbar__sort"
                        aria-label="Sort order"
                        prop:value=move || query.with(|q| q.sort.map(|s| s.code()).unwrap_or(""))
                        on:change=move |ev| {
                            let code = event_target_value(&ev);
                            controller.set_sort(T::SortKey::from_code(&code));
                        }
                    >
                        <option value="">"Default order"</option>
                        {sort_options}
                    </select>
                })}
            </div>
            <div class="catalog-toolbar__summary" aria-live="polite">
                <span>{move || format!("Showing {} of {}", shown(), total)}</span>
                {filters_badge}
                <Show when=is_active>
                    <button
                        type="button"
                        class="catalog-toolbar__reset"
                        on:click=move |_| controller.reset()
                    >
                        "Reset"
                    </button>
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_label() {
        assert_eq!(filters_label(0), None);
        assert_eq!(filters_label(1).as_deref(), Some("1 filter"));
        assert_eq!(filters_label(2).as_deref(), Some("2 filters"));
    }
}
