use crate::shared::catalog::{Categorized, Choice, Record, Searchable, Sortable};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaqTopic {
    Admissions,
    Fees,
    Academics,
    DailyLife,
}

impl Choice for FaqTopic {
    fn code(self) -> &'static str {
        match self {
            FaqTopic::Admissions => "admissions",
            FaqTopic::Fees => "fees",
            FaqTopic::Academics => "academics",
            FaqTopic::DailyLife => "daily-life",
        }
    }

    fn label(self) -> &'static str {
        match self {
            FaqTopic::Admissions => "Admissions",
            FaqTopic::Fees => "Fees & payment",
            FaqTopic::Academics => "Academics",
            FaqTopic::DailyLife => "Daily life",
        }
    }

    fn all() -> &'static [Self] {
        &[FaqTopic::Admissions, FaqTopic::Fees, FaqTopic::Academics, FaqTopic::DailyLife]
    }
}

/// FAQs keep their source order, so there is no key to sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaqSort {}

impl Choice for FaqSort {
    fn code(self) -> &'static str {
        match self {}
    }

    fn label(self) -> &'static str {
        match self {}
    }

    fn all() -> &'static [Self] {
        &[]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Faq {
    pub id: &'static str,
    pub topic: FaqTopic,
    pub question: &'static str,
    pub answer: &'static str,
}

impl Record for Faq {
    fn id(&self) -> &str {
        self.id
    }
}

impl Searchable for Faq {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.question, self.answer]
    }
}

impl Categorized for Faq {
    type Category = FaqTopic;

    fn category(&self) -> FaqTopic {
        self.topic
    }
}

impl Sortable for Faq {
    type SortKey = FaqSort;

    fn compare_by(&self, _other: &Self, key: FaqSort) -> Ordering {
        match key {}
    }
}
