use super::aggregate::{Department, StaffMember};
use crate::shared::catalog::Catalog;

pub static STAFF: &[StaffMember] = &[
    StaffMember {
        id: "margaret-okafor",
        name: "Margaret Okafor",
        role: "Principal",
        department: Department::Leadership,
        email: "m.okafor@northbridge.school",
        phone: "+1 (555) 014-2201",
        bio: "Margaret joined Northbridge as a chemistry teacher and has led the school since 2015. She chairs the regional heads' forum on student wellbeing.",
        subjects: &[],
        qualifications: &["MEd Educational Leadership", "BSc Chemistry"],
        years_at_school: 19,
        photo_url: "https://i.pravatar.cc/300?img=47",
    },
    StaffMember {
        id: "daniel-reyes",
        name: "Daniel Reyes",
        role: "Deputy Principal, Academics",
        department: Department::Leadership,
        email: "d.reyes@northbridge.school",
        phone: "+1 (555) 014-2202",
        bio: "Daniel oversees curriculum planning and the senior-years diploma programme.",
        subjects: &["History"],
        qualifications: &["MA History", "PGCE"],
        years_at_school: 11,
        photo_url: "https://i.pravatar.cc/300?img=12",
    },
    StaffMember {
        id: "aisha-rahman",
        name: "Aisha Rahman",
        role: "Head of Sciences",
        department: Department::Sciences,
        email: "a.rahman@northbridge.school",
        phone: "+1 (555) 014-2210",
        bio: "Aisha runs the science olympiad squad and the year 10 field ecology trip.",
        subjects: &["Biology", "Environmental Science"],
        qualifications: &["PhD Marine Biology"],
        years_at_school: 8,
        photo_url: "https://i.pravatar.cc/300?img=45",
    },
    StaffMember {
        id: "tomas-novak",
        name: "Tomas Novak",
        role: "Physics Teacher",
        department: Department::Sciences,
        email: "t.novak@northbridge.school",
        phone: "+1 (555) 014-2211",
        bio: "Tomas coaches the robotics team and maintains the school observatory.",
        subjects: &["Physics", "Robotics"],
        qualifications: &["MSc Applied Physics"],
        years_at_school: 5,
        photo_url: "https://i.pravatar.cc/300?img=14",
    },
    StaffMember {
        id: "grace-whitfield",
        name: "Grace Whitfield",
        role: "Chemistry Teacher",
        department: Department::Sciences,
        email: "g.whitfield@northbridge.school",
        phone: "+1 (555) 014-2212",
        bio: "Grace teaches chemistry across the upper years and leads lab safety training.",
        subjects: &["Chemistry"],
        qualifications: &["BSc Chemistry", "PGCE"],
        years_at_school: 3,
        photo_url: "https://i.pravatar.cc/300?img=32",
    },
    StaffMember {
        id: "samuel-oduya",
        name: "Samuel Oduya",
        role: "Head of Mathematics",
        department: Department::Mathematics,
        email: "s.oduya@northbridge.school",
        phone: "+1 (555) 014-2220",
        bio: "Samuel introduced the peer tutoring programme and coaches the maths challenge team.",
        subjects: &["Mathematics", "Statistics"],
        qualifications: &["MSc Mathematics"],
        years_at_school: 14,
        photo_url: "https://i.pravatar.cc/300?img=59",
    },
    StaffMember {
        id: "lena-hoffmann",
        name: "Lena Hoffmann",
        role: "Mathematics Teacher",
        department: Department::Mathematics,
        email: "l.hoffmann@northbridge.school",
        phone: "+1 (555) 014-2221",
        bio: "Lena teaches middle-years mathematics and runs the chess club.",
        subjects: &["Mathematics", "Computer Science"],
        qualifications: &["BSc Mathematics", "MEd"],
        years_at_school: 6,
        photo_url: "https://i.pravatar.cc/300?img=44",
    },
    StaffMember {
        id: "priya-menon",
        name: "Priya Menon",
        role: "English Literature Teacher",
        department: Department::Humanities,
        email: "p.menon@northbridge.school",
        phone: "+1 (555) 014-2230",
        bio: "Priya edits the student literary magazine and directs the spring debate tournament.",
        subjects: &["English Literature", "Debate"],
        qualifications: &["MA English Literature"],
        years_at_school: 9,
        photo_url: "https://i.pravatar.cc/300?img=26",
    },
    StaffMember {
        id: "jean-luc-martin",
        name: "Jean-Luc Martin",
        role: "Head of Languages",
        department: Department::Languages,
        email: "jl.martin@northbridge.school",
        phone: "+1 (555) 014-2240",
        bio: "Jean-Luc organises the annual exchange with our partner school in Lyon.",
        subjects: &["French", "Spanish"],
        qualifications: &["MA Modern Languages"],
        years_at_school: 12,
        photo_url: "https://i.pravatar.cc/300?img=53",
    },
    StaffMember {
        id: "yuki-tanaka",
        name: "Yuki Tanaka",
        role: "Art & Design Teacher",
        department: Department::Arts,
        email: "y.tanaka@northbridge.school",
        phone: "+1 (555) 014-2250",
        bio: "Yuki curates the end-of-year exhibition and teaches ceramics and digital design.",
        subjects: &["Visual Art", "Design"],
        qualifications: &["MFA Ceramics"],
        years_at_school: 4,
        photo_url: "https://i.pravatar.cc/300?img=49",
    },
    StaffMember {
        id: "marcus-bell",
        name: "Marcus Bell",
        role: "Director of Sport",
        department: Department::PhysicalEducation,
        email: "m.bell@northbridge.school",
        phone: "+1 (555) 014-2260",
        bio: "Marcus coaches the senior basketball team and coordinates inter-school fixtures.",
        subjects: &["Physical Education", "Health"],
        qualifications: &["BSc Sports Science"],
        years_at_school: 10,
        photo_url: "https://i.pravatar.cc/300?img=68",
    },
    StaffMember {
        id: "helen-castillo",
        name: "Helen Castillo",
        role: "School Counsellor",
        department: Department::StudentSupport,
        email: "h.castillo@northbridge.school",
        phone: "+1 (555) 014-2270",
        bio: "Helen supports students with wellbeing, study skills and university applications.",
        subjects: &["Careers Guidance"],
        qualifications: &["MA Counselling Psychology"],
        years_at_school: 7,
        photo_url: "https://i.pravatar.cc/300?img=40",
    },
];

pub fn staff_catalog() -> Catalog<'static, StaffMember> {
    Catalog::new(STAFF)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_staff_member::aggregate::StaffSort;
    use crate::shared::catalog::{duplicate_ids, CategoryFilter, QueryFor};

    #[test]
    fn test_ids_unique() {
        assert!(duplicate_ids(STAFF).is_empty(), "{:?}", duplicate_ids(STAFF));
    }

    #[test]
    fn test_department_filter() {
        let query = QueryFor::<StaffMember>::default()
            .with_category(CategoryFilter::Only(Department::Mathematics));
        let names: Vec<_> = staff_catalog().view(&query).iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Samuel Oduya", "Lena Hoffmann"]);
    }

    #[test]
    fn test_search_by_subject() {
        let query = QueryFor::<StaffMember>::default().with_search("robotics");
        let found = staff_catalog().view(&query);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].email, "t.novak@northbridge.school");
    }

    #[test]
    fn test_tenure_sort_puts_principal_first() {
        let query = QueryFor::<StaffMember>::default().with_sort(Some(StaffSort::Tenure));
        assert_eq!(staff_catalog().view(&query)[0].id, "margaret-okafor");
    }
}
