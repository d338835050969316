//! Reactive wrappers over the catalog query and the detail selection.

use contracts::shared::catalog::{
    Catalog, CategoryFilter, Categorized, Choice, QueryFor, Searchable, Sortable,
};
use contracts::shared::selection::DetailSelection;
use leptos::prelude::*;

/// Filter/search/sort state of one catalog on one page, plus the derived view.
pub struct CatalogController<T>
where
    T: Categorized + Sortable + Send + Sync + 'static,
{
    pub catalog: Catalog<'static, T>,
    pub query: RwSignal<QueryFor<T>>,
    /// Records to render, in order.
    pub visible: Memo<Vec<&'static T>>,
}

impl<T> Clone for CatalogController<T>
where
    T: Categorized + Sortable + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for CatalogController<T> where T: Categorized + Sortable + Send + Sync + 'static {}

impl<T> CatalogController<T>
where
    T: Searchable + Categorized + Sortable + PartialEq + Send + Sync + 'static,
{
    pub fn new(catalog: Catalog<'static, T>) -> Self {
        Self::with_query(catalog, QueryFor::<T>::default())
    }

    pub fn with_query(catalog: Catalog<'static, T>, initial: QueryFor<T>) -> Self {
        let query = RwSignal::new(initial);
        let visible = Memo::new(move |_| query.with(|q| catalog.view(q)));
        Self {
            catalog,
            query,
            visible,
        }
    }

    pub fn set_category(&self, category: CategoryFilter<T::Category>) {
        self.query.update(|q| q.category = category);
        self.log_query();
    }

    pub fn set_search(&self, search: String) {
        self.query.update(|q| q.search = search);
        self.log_query();
    }

    pub fn set_sort(&self, sort: Option<T::SortKey>) {
        self.query.update(|q| q.sort = sort);
        self.log_query();
    }

    pub fn reset(&self) {
        self.query.set(QueryFor::<T>::default());
        self.log_query();
    }

    pub fn search_text(&self) -> Signal<String> {
        let query = self.query;
        Signal::derive(move || query.with(|q| q.search.clone()))
    }

    pub fn is_empty(&self) -> bool {
        self.visible.with(|v| v.is_empty())
    }

    fn log_query(&self) {
        self.query.with_untracked(|q| {
            log::debug!(
                "catalog query: category={} search={:?} sort={}",
                q.category.code(),
                q.search,
                q.sort.map(|s| s.code()).unwrap_or("none"),
            );
        });
    }
}

/// Reactive [`DetailSelection`] for a page's detail overlay.
pub struct DetailState<T: Send + Sync + 'static> {
    selection: RwSignal<DetailSelection<&'static T>>,
}

impl<T: Send + Sync + 'static> Clone for DetailState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for DetailState<T> {}

impl<T: Send + Sync + 'static> DetailState<T> {
    pub fn new() -> Self {
        Self {
            selection: RwSignal::new(DetailSelection::new()),
        }
    }

    /// Replaces whatever is open.
    pub fn open(&self, record: &'static T) {
        self.selection.update(|s| s.open(record));
    }

    pub fn close(&self) {
        if self.selection.with_untracked(|s| s.is_open()) {
            self.selection.update(|s| s.close());
        }
    }

    pub fn current(&self) -> Option<&'static T> {
        self.selection.with(|s| s.current().copied())
    }

    pub fn on_close(&self) -> Callback<()> {
        let this = *self;
        Callback::new(move |_| this.close())
    }

    pub fn on_open(&self) -> Callback<&'static T> {
        let this = *self;
        Callback::new(move |record| this.open(record))
    }
}

impl<T: Send + Sync + 'static> Default for DetailState<T> {
    fn default() -> Self {
        Self::new()
    }
}
