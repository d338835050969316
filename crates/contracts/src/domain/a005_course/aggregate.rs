use crate::shared::catalog::{compare_text, Categorized, Choice, Record, Searchable, Sortable};
use std::cmp::Ordering;

/// Course stage within the school.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CourseLevel {
    Foundation,
    Core,
    Advanced,
    Elective,
}

impl Choice for CourseLevel {
    fn code(self) -> &'static str {
        match self {
            CourseLevel::Foundation => "foundation",
            CourseLevel::Core => "core",
            CourseLevel::Advanced => "advanced",
            CourseLevel::Elective => "elective",
        }
    }

    fn label(self) -> &'static str {
        match self {
            CourseLevel::Foundation => "Foundation (6-8)",
            CourseLevel::Core => "Core (9-10)",
            CourseLevel::Advanced => "Advanced (11-12)",
            CourseLevel::Elective => "Electives",
        }
    }

    fn all() -> &'static [Self] {
        &[
            CourseLevel::Foundation,
            CourseLevel::Core,
            CourseLevel::Advanced,
            CourseLevel::Elective,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseSort {
    Title,
    /// Most weekly hours first.
    Hours,
}

impl Choice for CourseSort {
    fn code(self) -> &'static str {
        match self {
            CourseSort::Title => "title",
            CourseSort::Hours => "hours",
        }
    }

    fn label(self) -> &'static str {
        match self {
            CourseSort::Title => "Title (A-Z)",
            CourseSort::Hours => "Weekly hours",
        }
    }

    fn all() -> &'static [Self] {
        &[CourseSort::Title, CourseSort::Hours]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: &'static str,
    pub title: &'static str,
    pub level: CourseLevel,
    pub subject_area: &'static str,
    pub grades: &'static [u8],
    pub weekly_hours: u8,
    pub description: &'static str,
    /// Id of the lead teacher in the staff directory.
    pub teacher_id: &'static str,
}

impl Course {
    /// `"Grades 9-10"` or `"Grade 12"`.
    pub fn grades_label(&self) -> String {
        match (self.grades.first(), self.grades.last()) {
            (Some(first), Some(last)) if first == last => format!("Grade {first}"),
            (Some(first), Some(last)) => format!("Grades {first}-{last}"),
            _ => String::new(),
        }
    }
}

impl Record for Course {
    fn id(&self) -> &str {
        self.id
    }
}

impl Searchable for Course {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title, self.subject_area, self.description]
    }
}

impl Categorized for Course {
    type Category = CourseLevel;

    fn category(&self) -> CourseLevel {
        self.level
    }
}

impl Sortable for Course {
    type SortKey = CourseSort;

    fn compare_by(&self, other: &Self, key: CourseSort) -> Ordering {
        match key {
            CourseSort::Title => compare_text(self.title, other.title),
            CourseSort::Hours => other.weekly_hours.cmp(&self.weekly_hours),
        }
    }
}
