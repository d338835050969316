use crate::shared::catalog::{compare_text, Categorized, Choice, Record, Searchable, Sortable};
use std::cmp::Ordering;

/// Teaching and support departments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Department {
    Leadership,
    Sciences,
    Mathematics,
    Humanities,
    Languages,
    Arts,
    PhysicalEducation,
    StudentSupport,
}

impl Choice for Department {
    fn code(self) -> &'static str {
        match self {
            Department::Leadership => "leadership",
            Department::Sciences => "sciences",
            Department::Mathematics => "mathematics",
            Department::Humanities => "humanities",
            Department::Languages => "languages",
            Department::Arts => "arts",
            Department::PhysicalEducation => "pe",
            Department::StudentSupport => "support",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Department::Leadership => "Leadership",
            Department::Sciences => "Sciences",
            Department::Mathematics => "Mathematics",
            Department::Humanities => "Humanities",
            Department::Languages => "Languages",
            Department::Arts => "Arts",
            Department::PhysicalEducation => "Physical Education",
            Department::StudentSupport => "Student Support",
        }
    }

    fn all() -> &'static [Self] {
        &[
            Department::Leadership,
            Department::Sciences,
            Department::Mathematics,
            Department::Humanities,
            Department::Languages,
            Department::Arts,
            Department::PhysicalEducation,
            Department::StudentSupport,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaffSort {
    Name,
    /// Longest serving first.
    Tenure,
}

impl Choice for StaffSort {
    fn code(self) -> &'static str {
        match self {
            StaffSort::Name => "name",
            StaffSort::Tenure => "tenure",
        }
    }

    fn label(self) -> &'static str {
        match self {
            StaffSort::Name => "Name (A-Z)",
            StaffSort::Tenure => "Years at Northbridge",
        }
    }

    fn all() -> &'static [Self] {
        &[StaffSort::Name, StaffSort::Tenure]
    }
}

/// Member of the staff directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffMember {
    pub id: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub department: Department,
    pub email: &'static str,
    pub phone: &'static str,
    pub bio: &'static str,
    pub subjects: &'static [&'static str],
    pub qualifications: &'static [&'static str],
    pub years_at_school: u8,
    pub photo_url: &'static str,
}

impl Record for StaffMember {
    fn id(&self) -> &str {
        self.id
    }
}

impl Searchable for StaffMember {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name, self.role];
        fields.extend(self.subjects.iter().copied());
        fields
    }
}

impl Categorized for StaffMember {
    type Category = Department;

    fn category(&self) -> Department {
        self.department
    }
}

impl Sortable for StaffMember {
    type SortKey = StaffSort;

    fn compare_by(&self, other: &Self, key: StaffSort) -> Ordering {
        match key {
            StaffSort::Name => compare_text(self.name, other.name),
            StaffSort::Tenure => other.years_at_school.cmp(&self.years_at_school),
        }
    }
}
