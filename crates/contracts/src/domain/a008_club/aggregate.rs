use crate::shared::catalog::{compare_text, Categorized, Choice, Record, Searchable, Sortable};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClubKind {
    Stem,
    Arts,
    Sports,
    Service,
}

impl Choice for ClubKind {
    fn code(self) -> &'static str {
        match self {
            ClubKind::Stem => "stem",
            ClubKind::Arts => "arts",
            ClubKind::Sports => "sports",
            ClubKind::Service => "service",
        }
    }

    fn label(self) -> &'static str {
        match self {
            ClubKind::Stem => "STEM",
            ClubKind::Arts => "Arts & Music",
            ClubKind::Sports => "Sports",
            ClubKind::Service => "Service & Leadership",
        }
    }

    fn all() -> &'static [Self] {
        &[ClubKind::Stem, ClubKind::Arts, ClubKind::Sports, ClubKind::Service]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClubSort {
    Name,
    HighestRated,
    MostMembers,
}

impl Choice for ClubSort {
    fn code(self) -> &'static str {
        match self {
            ClubSort::Name => "name",
            ClubSort::HighestRated => "rating",
            ClubSort::MostMembers => "members",
        }
    }

    fn label(self) -> &'static str {
        match self {
            ClubSort::Name => "Name (A-Z)",
            ClubSort::HighestRated => "Highest rated",
            ClubSort::MostMembers => "Most members",
        }
    }

    fn all() -> &'static [Self] {
        &[ClubSort::Name, ClubSort::HighestRated, ClubSort::MostMembers]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Club {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: ClubKind,
    pub schedule: &'static str,
    pub advisor: &'static str,
    pub description: &'static str,
    pub members: u16,
    /// Student survey score out of 5.
    pub rating: f32,
    pub image_url: &'static str,
}

impl Record for Club {
    fn id(&self) -> &str {
        self.id
    }
}

impl Searchable for Club {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name, self.description, self.advisor]
    }
}

impl Categorized for Club {
    type Category = ClubKind;

    fn category(&self) -> ClubKind {
        self.kind
    }
}

impl Sortable for Club {
    type SortKey = ClubSort;

    fn compare_by(&self, other: &Self, key: ClubSort) -> Ordering {
        match key {
            ClubSort::Name => compare_text(self.name, other.name),
            ClubSort::HighestRated => other.rating.total_cmp(&self.rating),
            ClubSort::MostMembers => other.members.cmp(&self.members),
        }
    }
}
