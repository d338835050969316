use crate::shared::catalog::{compare_text, Categorized, Choice, Record, Searchable, Sortable};
use crate::shared::date_utils::parse_iso_date;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AchievementCategory {
    Academic,
    Sports,
    Arts,
    Community,
}

impl Choice for AchievementCategory {
    fn code(self) -> &'static str {
        match self {
            AchievementCategory::Academic => "academic",
            AchievementCategory::Sports => "sports",
            AchievementCategory::Arts => "arts",
            AchievementCategory::Community => "community",
        }
    }

    fn label(self) -> &'static str {
        match self {
            AchievementCategory::Academic => "Academic",
            AchievementCategory::Sports => "Sports",
            AchievementCategory::Arts => "Arts",
            AchievementCategory::Community => "Community",
        }
    }

    fn all() -> &'static [Self] {
        &[
            AchievementCategory::Academic,
            AchievementCategory::Sports,
            AchievementCategory::Arts,
            AchievementCategory::Community,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AchievementSort {
    MostRecent,
    Title,
}

impl Choice for AchievementSort {
    fn code(self) -> &'static str {
        match self {
            AchievementSort::MostRecent => "recent",
            AchievementSort::Title => "title",
        }
    }

    fn label(self) -> &'static str {
        match self {
            AchievementSort::MostRecent => "Most recent",
            AchievementSort::Title => "Title (A-Z)",
        }
    }

    fn all() -> &'static [Self] {
        &[AchievementSort::MostRecent, AchievementSort::Title]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Achievement {
    pub id: &'static str,
    pub title: &'static str,
    pub category: AchievementCategory,
    /// ISO date of the award.
    pub date: &'static str,
    pub award: &'static str,
    pub description: &'static str,
    pub participants: &'static [&'static str],
    pub image_url: &'static str,
}

impl Record for Achievement {
    fn id(&self) -> &str {
        self.id
    }
}

impl Searchable for Achievement {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title, self.description, self.award];
        fields.extend(self.participants.iter().copied());
        fields
    }
}

impl Categorized for Achievement {
    type Category = AchievementCategory;

    fn category(&self) -> AchievementCategory {
        self.category
    }
}

impl Sortable for Achievement {
    type SortKey = AchievementSort;

    fn compare_by(&self, other: &Self, key: AchievementSort) -> Ordering {
        match key {
            // Unparseable dates sort last.
            AchievementSort::MostRecent => parse_iso_date(other.date).cmp(&parse_iso_date(self.date)),
            AchievementSort::Title => compare_text(self.title, other.title),
        }
    }
}
