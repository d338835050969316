//! Generic filter / search / sort engine over a static record catalog.
//!
//! Every page of the site renders one or more catalogs (staff, clubs, routes...).
//! Instead of repeating the filtering logic per page, each record type declares
//! its searchable text, its category and its sort keys through the traits below,
//! and [`Catalog::view`] derives the ordered sequence to render.

use std::cmp::Ordering;
use std::fmt::Debug;

/// Low-cardinality option shown in a selector (categories, sort keys).
pub trait Choice: Copy + Eq + Debug + Send + Sync + 'static {
    /// Stable machine code, used for `<select>` values and logging.
    fn code(self) -> &'static str;

    /// Human readable label.
    fn label(self) -> &'static str;

    /// All options in display order.
    fn all() -> &'static [Self];

    fn from_code(code: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.code() == code)
    }
}

/// Record with a stable identifier unique within its catalog.
pub trait Record {
    fn id(&self) -> &str;
}

/// Record that can be matched against a free-text query.
pub trait Searchable {
    /// Text fields the query is matched against.
    fn search_fields(&self) -> Vec<&str>;

    /// Case-insensitive substring match. `needle` must already be lowercase.
    fn matches_filter(&self, needle: &str) -> bool {
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Record classified by a single category field.
pub trait Categorized {
    type Category: Choice;

    fn category(&self) -> Self::Category;
}

/// Record that can be ordered by one of several keys.
pub trait Sortable {
    type SortKey: Choice;

    /// Full comparison for `key`, including its direction.
    fn compare_by(&self, other: &Self, key: Self::SortKey) -> Ordering;
}

/// Category selector with the "all" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter<C> {
    All,
    Only(C),
}

pub const ALL_CODE: &str = "all";

impl<C: Choice> CategoryFilter<C> {
    pub fn code(self) -> &'static str {
        match self {
            CategoryFilter::All => ALL_CODE,
            CategoryFilter::Only(c) => c.code(),
        }
    }

    /// Unknown codes fall back to `All`.
    pub fn from_code(code: &str) -> Self {
        C::from_code(code).map_or(CategoryFilter::All, CategoryFilter::Only)
    }

    pub fn accepts(self, category: C) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => c == category,
        }
    }
}

impl<C> Default for CategoryFilter<C> {
    fn default() -> Self {
        CategoryFilter::All
    }
}

/// Active filter, search and sort parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery<C, S> {
    pub category: CategoryFilter<C>,
    pub search: String,
    /// `None` keeps catalog order.
    pub sort: Option<S>,
}

impl<C, S> Default for CatalogQuery<C, S> {
    fn default() -> Self {
        Self {
            category: CategoryFilter::All,
            search: String::new(),
            sort: None,
        }
    }
}

impl<C: Choice, S: Choice> CatalogQuery<C, S> {
    pub fn with_category(mut self, category: CategoryFilter<C>) -> Self {
        self.category = category;
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_sort(mut self, sort: Option<S>) -> Self {
        self.sort = sort;
        self
    }

    /// True when any parameter narrows or reorders the catalog.
    pub fn is_active(&self) -> bool {
        self.category != CategoryFilter::All || !self.search.trim().is_empty() || self.sort.is_some()
    }

    /// Number of narrowing filters (category, search), for badges.
    pub fn active_filters_count(&self) -> usize {
        let mut count = 0;
        if self.category != CategoryFilter::All {
            count += 1;
        }
        if !self.search.trim().is_empty() {
            count += 1;
        }
        count
    }
}

/// Shorthand for the query type of a record.
pub type QueryFor<T> = CatalogQuery<<T as Categorized>::Category, <T as Sortable>::SortKey>;

/// Immutable ordered record set.
#[derive(Debug)]
pub struct Catalog<'a, T> {
    items: &'a [T],
}

impl<'a, T> Clone for Catalog<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for Catalog<'a, T> {}

impl<'a, T> Catalog<'a, T> {
    pub const fn new(items: &'a [T]) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &'a [T] {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a, T: Record> Catalog<'a, T> {
    pub fn find(&self, id: &str) -> Option<&'a T> {
        self.items.iter().find(|item| item.id() == id)
    }
}

impl<'a, T: Categorized> Catalog<'a, T> {
    pub fn filter_by_category(&self, filter: CategoryFilter<T::Category>) -> Vec<&'a T> {
        self.items
            .iter()
            .filter(|item| filter.accepts(item.category()))
            .collect()
    }

    /// Records per category, in [`Choice::all`] order. Empty categories are kept.
    pub fn count_by_category(&self) -> Vec<(T::Category, usize)> {
        T::Category::all()
            .iter()
            .map(|&c| (c, self.items.iter().filter(|i| i.category() == c).count()))
            .collect()
    }
}

impl<'a, T: Searchable> Catalog<'a, T> {
    pub fn search(&self, query: &str) -> Vec<&'a T> {
        search_refs(self.items.iter().collect(), query)
    }
}

impl<'a, T: Searchable + Categorized + Sortable> Catalog<'a, T> {
    /// Category filter, then text search, then stable sort.
    pub fn view(&self, query: &QueryFor<T>) -> Vec<&'a T> {
        let by_category = self.filter_by_category(query.category);
        let mut found = search_refs(by_category, &query.search);
        if let Some(key) = query.sort {
            sort_refs(&mut found, key);
        }
        found
    }
}

/// Keeps records matching `query`. Blank queries keep everything.
pub fn search_refs<'a, T: Searchable>(items: Vec<&'a T>, query: &str) -> Vec<&'a T> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.matches_filter(&needle))
        .collect()
}

/// Stable sort by `key`; equal records keep their relative order.
pub fn sort_refs<T: Sortable>(items: &mut [&T], key: T::SortKey) {
    items.sort_by(|a, b| a.compare_by(b, key));
}

/// Case-insensitive string ordering used by name/title keys.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Splits `text` into `(segment, is_match)` parts around case-insensitive
/// occurrences of `query`. Used to highlight search hits.
pub fn highlight_segments<'t>(text: &'t str, query: &str) -> Vec<(&'t str, bool)> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return vec![(text, false)];
    }

    // Lowercasing can change byte lengths outside ASCII, so keep the offsets of
    // every original char boundary in both strings.
    let mut lower = String::with_capacity(text.len());
    let mut bounds: Vec<(usize, usize)> = Vec::with_capacity(text.len() + 1);
    for (i, ch) in text.char_indices() {
        bounds.push((lower.len(), i));
        lower.extend(ch.to_lowercase());
    }
    bounds.push((lower.len(), text.len()));
    let to_original = |pos: usize| {
        bounds
            .binary_search_by_key(&pos, |&(l, _)| l)
            .ok()
            .map(|i| bounds[i].1)
    };

    let mut parts = Vec::new();
    let mut last = 0;
    let mut from = 0;
    while let Some(pos) = lower[from..].find(&needle) {
        let start = from + pos;
        let end = start + needle.len();
        match (to_original(start), to_original(end)) {
            (Some(s), Some(e)) => {
                if s > last {
                    parts.push((&text[last..s], false));
                }
                parts.push((&text[s..e], true));
                last = e;
                from = end;
            }
            // Match splits the lowercase expansion of a single char.
            _ => {
                from = start + lower[start..].chars().next().map_or(1, char::len_utf8);
            }
        }
    }
    if last < text.len() {
        parts.push((&text[last..], false));
    }
    parts
}

/// Ids that occur more than once, in first-repeat order.
#[cfg(test)]
pub(crate) fn duplicate_ids<T: Record>(items: &[T]) -> Vec<&str> {
    let mut seen = std::collections::HashSet::new();
    items
        .iter()
        .map(Record::id)
        .filter(|id| !seen.insert(*id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Dept {
        Science,
        Arts,
        Sport,
    }

    impl Choice for Dept {
        fn code(self) -> &'static str {
            match self {
                Dept::Science => "science",
                Dept::Arts => "arts",
                Dept::Sport => "sport",
            }
        }

        fn label(self) -> &'static str {
            match self {
                Dept::Science => "Science",
                Dept::Arts => "Arts",
                Dept::Sport => "Sport",
            }
        }

        fn all() -> &'static [Self] {
            &[Dept::Science, Dept::Arts, Dept::Sport]
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Key {
        Name,
        Tenure,
    }

    impl Choice for Key {
        fn code(self) -> &'static str {
            match self {
                Key::Name => "name",
                Key::Tenure => "tenure",
            }
        }

        fn label(self) -> &'static str {
            match self {
                Key::Name => "Name",
                Key::Tenure => "Years at school",
            }
        }

        fn all() -> &'static [Self] {
            &[Key::Name, Key::Tenure]
        }
    }

    #[derive(Debug, PartialEq)]
    struct Person {
        id: &'static str,
        name: &'static str,
        email: &'static str,
        dept: Dept,
        years: u32,
    }

    impl Record for Person {
        fn id(&self) -> &str {
            self.id
        }
    }

    impl Searchable for Person {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name, self.email]
        }
    }

    impl Categorized for Person {
        type Category = Dept;

        fn category(&self) -> Dept {
            self.dept
        }
    }

    impl Sortable for Person {
        type SortKey = Key;

        fn compare_by(&self, other: &Self, key: Key) -> Ordering {
            match key {
                Key::Name => compare_text(self.name, other.name),
                Key::Tenure => other.years.cmp(&self.years),
            }
        }
    }

    fn people() -> Vec<Person> {
        vec![
            Person { id: "p1", name: "Ada Brooks", email: "ada@school.test", dept: Dept::Science, years: 4 },
            Person { id: "p2", name: "Ben Carter", email: "ben@school.test", dept: Dept::Arts, years: 12 },
            Person { id: "p3", name: "Cleo Diaz", email: "cleo@school.test", dept: Dept::Sport, years: 4 },
            Person { id: "p4", name: "Dan Evans", email: "dan@school.test", dept: Dept::Science, years: 9 },
            Person { id: "p5", name: "Eve Foster", email: "eve@school.test", dept: Dept::Arts, years: 1 },
            Person { id: "p6", name: "Finn Gray", email: "finn@school.test", dept: Dept::Arts, years: 7 },
        ]
    }

    fn ids(items: &[&Person]) -> Vec<&'static str> {
        items.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_category_filter_keeps_original_order() {
        let data = people();
        let catalog = Catalog::new(&data);
        let query = QueryFor::<Person>::default().with_category(CategoryFilter::Only(Dept::Science));

        let view = catalog.view(&query);
        assert_eq!(ids(&view), vec!["p1", "p4"]);
        assert!(view.iter().all(|p| p.dept == Dept::Science));
    }

    #[test]
    fn test_categories_partition_catalog() {
        let data = people();
        let catalog = Catalog::new(&data);

        let mut seen: Vec<&str> = Dept::all()
            .iter()
            .flat_map(|&d| catalog.filter_by_category(CategoryFilter::Only(d)))
            .map(|p| p.id)
            .collect();
        seen.sort();
        assert_eq!(seen, vec!["p1", "p2", "p3", "p4", "p5", "p6"]);
        assert_eq!(catalog.filter_by_category(CategoryFilter::All).len(), data.len());
    }

    #[test]
    fn test_search_is_subset_of_empty_query() {
        let data = people();
        let catalog = Catalog::new(&data);
        let everything = catalog.search("");
        assert_eq!(everything.len(), data.len());
        assert_eq!(catalog.search("   ").len(), data.len());

        for q in ["a", "EV", "school.test", "zzz", "n g"] {
            let hits = catalog.search(q);
            assert!(hits.iter().all(|h| everything.contains(h)), "query {q}");
        }
    }

    #[test]
    fn test_search_is_case_insensitive_over_all_fields() {
        let data = people();
        let catalog = Catalog::new(&data);
        assert_eq!(ids(&catalog.search("BROOKS")), vec!["p1"]);
        assert_eq!(ids(&catalog.search("finn@")), vec!["p6"]);
        assert_eq!(ids(&catalog.search("  cleo ")), vec!["p3"]);
    }

    #[test]
    fn test_no_match_yields_empty_view() {
        let data = people();
        let catalog = Catalog::new(&data);
        let query = QueryFor::<Person>::default().with_search("nobody here");
        assert!(catalog.view(&query).is_empty());
    }

    #[test]
    fn test_descending_sort_is_stable_and_idempotent() {
        let data = people();
        let catalog = Catalog::new(&data);
        let query = QueryFor::<Person>::default().with_sort(Some(Key::Tenure));

        let sorted = catalog.view(&query);
        assert_eq!(ids(&sorted), vec!["p2", "p4", "p6", "p1", "p3", "p5"]);

        let mut again = sorted.clone();
        sort_refs(&mut again, Key::Tenure);
        assert_eq!(ids(&again), ids(&sorted));
    }

    #[test]
    fn test_view_combines_filter_search_sort() {
        let data = people();
        let catalog = Catalog::new(&data);
        let query = QueryFor::<Person>::default()
            .with_category(CategoryFilter::Only(Dept::Arts))
            .with_search("n")
            .with_sort(Some(Key::Name));
        assert_eq!(ids(&catalog.view(&query)), vec!["p2", "p6"]);
        assert_eq!(query.active_filters_count(), 2);
        assert!(query.is_active());
        assert!(!QueryFor::<Person>::default().is_active());
    }

    #[test]
    fn test_count_by_category_and_find() {
        let data = people();
        let catalog = Catalog::new(&data);
        assert_eq!(
            catalog.count_by_category(),
            vec![(Dept::Science, 2), (Dept::Arts, 3), (Dept::Sport, 1)]
        );
        assert_eq!(catalog.find("p5").map(|p| p.name), Some("Eve Foster"));
        assert!(catalog.find("missing").is_none());
    }

    #[test]
    fn test_duplicate_ids() {
        let mut data = people();
        assert!(duplicate_ids(&data).is_empty());
        data.push(Person { id: "p2", name: "Ben Clone", email: "ben2@school.test", dept: Dept::Arts, years: 0 });
        assert_eq!(duplicate_ids(&data), vec!["p2"]);
    }

    #[test]
    fn test_category_filter_codes() {
        assert_eq!(CategoryFilter::<Dept>::from_code("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::<Dept>::from_code("arts"), CategoryFilter::Only(Dept::Arts));
        assert_eq!(CategoryFilter::<Dept>::from_code("bogus"), CategoryFilter::All);
        assert_eq!(CategoryFilter::Only(Dept::Sport).code(), "sport");
    }

    #[test]
    fn test_highlight_segments() {
        assert_eq!(
            highlight_segments("Robotics Club", "bot"),
            vec![("Ro", false), ("bot", true), ("ics Club", false)]
        );
        assert_eq!(highlight_segments("Choir", ""), vec![("Choir", false)]);
        assert_eq!(
            highlight_segments("aXa", "a"),
            vec![("a", true), ("X", false), ("a", true)]
        );
    }

    #[test]
    fn test_highlight_segments_non_ascii_case_mapping() {
        assert_eq!(
            highlight_segments("Lycée Saint", "LYCÉE"),
            vec![("Lycée", true), (" Saint", false)]
        );
        // Kelvin sign lowercases to one byte, Ⱥ to three: same total length, shifted boundaries.
        assert_eq!(
            highlight_segments("\u{212A}\u{023A}\u{023A}", "\u{2C65}"),
            vec![("\u{212A}", false), ("\u{023A}", true), ("\u{023A}", true)]
        );
        assert_eq!(
            highlight_segments("\u{212A}elvin scale", "kelvin"),
            vec![("\u{212A}elvin", true), (" scale", false)]
        );
        // "İ" lowercases to "i" plus a combining dot; a bare "i" does not match half of it.
        assert_eq!(highlight_segments("\u{130}stanbul", "i"), vec![("\u{130}stanbul", false)]);
        assert_eq!(
            highlight_segments("\u{130}stanbul", "stan"),
            vec![("\u{130}", false), ("stan", true), ("bul", false)]
        );
    }
}
