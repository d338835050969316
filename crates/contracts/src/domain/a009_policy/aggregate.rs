use crate::shared::catalog::{compare_text, Categorized, Choice, Record, Searchable, Sortable};
use crate::shared::date_utils::parse_iso_date;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyArea {
    Safeguarding,
    Academic,
    Conduct,
    Privacy,
}

impl Choice for PolicyArea {
    fn code(self) -> &'static str {
        match self {
            PolicyArea::Safeguarding => "safeguarding",
            PolicyArea::Academic => "academic",
            PolicyArea::Conduct => "conduct",
            PolicyArea::Privacy => "privacy",
        }
    }

    fn label(self) -> &'static str {
        match self {
            PolicyArea::Safeguarding => "Safeguarding & wellbeing",
            PolicyArea::Academic => "Academic",
            PolicyArea::Conduct => "Conduct",
            PolicyArea::Privacy => "Privacy & data",
        }
    }

    fn all() -> &'static [Self] {
        &[
            PolicyArea::Safeguarding,
            PolicyArea::Academic,
            PolicyArea::Conduct,
            PolicyArea::Privacy,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicySort {
    Title,
    RecentlyUpdated,
}

impl Choice for PolicySort {
    fn code(self) -> &'static str {
        match self {
            PolicySort::Title => "title",
            PolicySort::RecentlyUpdated => "updated",
        }
    }

    fn label(self) -> &'static str {
        match self {
            PolicySort::Title => "Title (A-Z)",
            PolicySort::RecentlyUpdated => "Recently updated",
        }
    }

    fn all() -> &'static [Self] {
        &[PolicySort::Title, PolicySort::RecentlyUpdated]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Policy {
    pub id: &'static str,
    pub title: &'static str,
    pub area: PolicyArea,
    pub summary: &'static str,
    /// ISO date of the last review.
    pub updated: &'static str,
    pub document_url: &'static str,
}

impl Record for Policy {
    fn id(&self) -> &str {
        self.id
    }
}

impl Searchable for Policy {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title, self.summary]
    }
}

impl Categorized for Policy {
    type Category = PolicyArea;

    fn category(&self) -> PolicyArea {
        self.area
    }
}

impl Sortable for Policy {
    type SortKey = PolicySort;

    fn compare_by(&self, other: &Self, key: PolicySort) -> Ordering {
        match key {
            PolicySort::Title => compare_text(self.title, other.title),
            PolicySort::RecentlyUpdated => parse_iso_date(other.updated).cmp(&parse_iso_date(self.updated)),
        }
    }
}
