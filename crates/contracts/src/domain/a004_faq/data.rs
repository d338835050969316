use super::aggregate::{Faq, FaqTopic};
use crate::shared::catalog::Catalog;

pub static FAQS: &[Faq] = &[
    Faq {
        id: "entry-grades",
        topic: FaqTopic::Admissions,
        question: "Which grades can my child apply for?",
        answer: "We admit students into grades 6 to 12. Places in grades 11 and 12 are limited and depend on subject availability.",
    },
    Faq {
        id: "assessment",
        topic: FaqTopic::Admissions,
        question: "Is there an entrance assessment?",
        answer: "Applicants sit a short English and mathematics assessment and meet a member of the leadership team. There is no pass mark; it helps us place students in the right sets.",
    },
    Faq {
        id: "documents",
        topic: FaqTopic::Admissions,
        question: "What documents do I need to apply?",
        answer: "The last two school reports, a copy of the birth certificate or passport, and immunisation records.",
    },
    Faq {
        id: "payment-plans",
        topic: FaqTopic::Fees,
        question: "Can fees be paid in installments?",
        answer: "Yes. Families can pay annually, termly (three installments) or monthly (ten installments). Annual payment carries a 5% discount.",
    },
    Faq {
        id: "sibling-discount",
        topic: FaqTopic::Fees,
        question: "Do you offer a sibling discount?",
        answer: "Tuition is reduced by 10% for each enrolled sibling, up to a maximum of 25%.",
    },
    Faq {
        id: "scholarships",
        topic: FaqTopic::Fees,
        question: "Are scholarships available?",
        answer: "Academic and music scholarships covering up to half of tuition are awarded each spring. Means-tested bursaries are also available.",
    },
    Faq {
        id: "class-size",
        topic: FaqTopic::Academics,
        question: "How big are classes?",
        answer: "Classes average 22 students, and senior elective groups are usually under 15.",
    },
    Faq {
        id: "homework",
        topic: FaqTopic::Academics,
        question: "How much homework is set?",
        answer: "Around 45 minutes a night in grades 6-8, rising to about two hours in the senior years.",
    },
    Faq {
        id: "school-day",
        topic: FaqTopic::DailyLife,
        question: "What are the school hours?",
        answer: "Lessons run from 8:15 to 15:20. The library and supervised study hall stay open until 17:30.",
    },
    Faq {
        id: "lunch",
        topic: FaqTopic::DailyLife,
        question: "Is lunch provided?",
        answer: "The canteen serves a hot lunch with vegetarian and allergy-aware options every day.",
    },
    Faq {
        id: "uniform",
        topic: FaqTopic::DailyLife,
        question: "Is there a uniform?",
        answer: "Yes. Uniform can be bought from the school shop, which also runs a second-hand exchange each term.",
    },
];

pub fn faq_catalog() -> Catalog<'static, Faq> {
    Catalog::new(FAQS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_faq::aggregate::FaqSort;
    use crate::shared::catalog::{duplicate_ids, CategoryFilter, Choice, QueryFor};

    #[test]
    fn test_ids_unique() {
        assert!(duplicate_ids(FAQS).is_empty(), "{:?}", duplicate_ids(FAQS));
    }

    #[test]
    fn test_every_topic_has_questions() {
        for (topic, count) in faq_catalog().count_by_category() {
            assert!(count > 0, "{topic:?}");
        }
    }

    #[test]
    fn test_default_view_keeps_source_order() {
        let ids: Vec<_> = faq_catalog().view(&QueryFor::<Faq>::default()).iter().map(|f| f.id).collect();
        let source: Vec<_> = FAQS.iter().map(|f| f.id).collect();
        assert_eq!(ids, source);
        assert!(FaqSort::all().is_empty());
    }

    #[test]
    fn test_search_within_topic() {
        let query = QueryFor::<Faq>::default()
            .with_category(CategoryFilter::Only(FaqTopic::Fees))
            .with_search("DISCOUNT");
        let ids: Vec<_> = faq_catalog().view(&query).iter().map(|f| f.id).collect();
        assert_eq!(ids, vec!["payment-plans", "sibling-discount"]);
    }
}
