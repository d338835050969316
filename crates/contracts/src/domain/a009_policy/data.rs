use super::aggregate::{Policy, PolicyArea};
use crate::shared::catalog::Catalog;

pub static POLICIES: &[Policy] = &[
    Policy {
        id: "child-protection",
        title: "Child Protection & Safeguarding",
        area: PolicyArea::Safeguarding,
        summary: "How staff recognise, record and report concerns about a student's safety.",
        updated: "2025-08-20",
        document_url: "https://northbridge.school/docs/child-protection.pdf",
    },
    Policy {
        id: "anti-bullying",
        title: "Anti-bullying",
        area: PolicyArea::Conduct,
        summary: "Our definition of bullying, including online, and the steps we take when it is reported.",
        updated: "2025-01-15",
        document_url: "https://northbridge.school/docs/anti-bullying.pdf",
    },
    Policy {
        id: "behaviour",
        title: "Behaviour & Rewards",
        area: PolicyArea::Conduct,
        summary: "Expectations for conduct in class and around school, house points and sanctions.",
        updated: "2024-09-01",
        document_url: "https://northbridge.school/docs/behaviour.pdf",
    },
    Policy {
        id: "assessment",
        title: "Assessment & Reporting",
        area: PolicyArea::Academic,
        summary: "How work is assessed, when reports are issued and how grades are moderated.",
        updated: "2024-11-04",
        document_url: "https://northbridge.school/docs/assessment.pdf",
    },
    Policy {
        id: "academic-integrity",
        title: "Academic Integrity",
        area: PolicyArea::Academic,
        summary: "Citation, collaboration and the responsible use of AI tools in coursework.",
        updated: "2025-06-30",
        document_url: "https://northbridge.school/docs/academic-integrity.pdf",
    },
    Policy {
        id: "privacy-notice",
        title: "Privacy Notice",
        area: PolicyArea::Privacy,
        summary: "What personal data we hold about students and families, and for how long.",
        updated: "2025-03-12",
        document_url: "https://northbridge.school/docs/privacy-notice.pdf",
    },
    Policy {
        id: "acceptable-use",
        title: "Acceptable Use of Technology",
        area: PolicyArea::Privacy,
        summary: "Rules for school devices, networks and personal phones during the school day.",
        updated: "2024-08-26",
        document_url: "https://northbridge.school/docs/acceptable-use.pdf",
    },
    Policy {
        id: "wellbeing",
        title: "Student Wellbeing",
        area: PolicyArea::Safeguarding,
        summary: "Pastoral care, counselling access and our approach to mental health.",
        updated: "2025-05-09",
        document_url: "https://northbridge.school/docs/wellbeing.pdf",
    },
];

pub fn policy_catalog() -> Catalog<'static, Policy> {
    Catalog::new(POLICIES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a009_policy::aggregate::PolicySort;
    use crate::shared::catalog::{duplicate_ids, QueryFor};

    #[test]
    fn test_ids_unique() {
        assert!(duplicate_ids(POLICIES).is_empty(), "{:?}", duplicate_ids(POLICIES));
    }

    #[test]
    fn test_recently_updated_first() {
        let query = QueryFor::<Policy>::default().with_sort(Some(PolicySort::RecentlyUpdated));
        let view = policy_catalog().view(&query);
        assert_eq!(view[0].id, "child-protection");
        assert_eq!(view.last().map(|p| p.id), Some("acceptable-use"));
    }
}
