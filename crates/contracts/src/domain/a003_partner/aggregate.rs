use crate::shared::catalog::{compare_text, Categorized, Choice, Record, Searchable, Sortable};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartnerKind {
    University,
    Business,
    Cultural,
    Community,
}

impl Choice for PartnerKind {
    fn code(self) -> &'static str {
        match self {
            PartnerKind::University => "university",
            PartnerKind::Business => "business",
            PartnerKind::Cultural => "cultural",
            PartnerKind::Community => "community",
        }
    }

    fn label(self) -> &'static str {
        match self {
            PartnerKind::University => "Universities",
            PartnerKind::Business => "Businesses",
            PartnerKind::Cultural => "Cultural institutions",
            PartnerKind::Community => "Community organisations",
        }
    }

    fn all() -> &'static [Self] {
        &[
            PartnerKind::University,
            PartnerKind::Business,
            PartnerKind::Cultural,
            PartnerKind::Community,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartnerSort {
    Name,
    /// Oldest partnership first.
    Longest,
}

impl Choice for PartnerSort {
    fn code(self) -> &'static str {
        match self {
            PartnerSort::Name => "name",
            PartnerSort::Longest => "longest",
        }
    }

    fn label(self) -> &'static str {
        match self {
            PartnerSort::Name => "Name (A-Z)",
            PartnerSort::Longest => "Longest partnership",
        }
    }

    fn all() -> &'static [Self] {
        &[PartnerSort::Name, PartnerSort::Longest]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partner {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: PartnerKind,
    pub description: &'static str,
    pub since_year: u16,
    pub website: &'static str,
    pub logo_url: &'static str,
    pub benefits: &'static [&'static str],
}

impl Record for Partner {
    fn id(&self) -> &str {
        self.id
    }
}

impl Searchable for Partner {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name, self.description]
    }
}

impl Categorized for Partner {
    type Category = PartnerKind;

    fn category(&self) -> PartnerKind {
        self.kind
    }
}

impl Sortable for Partner {
    type SortKey = PartnerSort;

    fn compare_by(&self, other: &Self, key: PartnerSort) -> Ordering {
        match key {
            PartnerSort::Name => compare_text(self.name, other.name),
            PartnerSort::Longest => self.since_year.cmp(&other.since_year),
        }
    }
}
