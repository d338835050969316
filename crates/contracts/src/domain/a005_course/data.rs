use super::aggregate::{Course, CourseLevel};
use crate::shared::catalog::Catalog;

pub static COURSES: &[Course] = &[
    Course {
        id: "integrated-science",
        title: "Integrated Science",
        level: CourseLevel::Foundation,
        subject_area: "Sciences",
        grades: &[6, 7, 8],
        weekly_hours: 4,
        description: "Hands-on introduction to biology, chemistry and physics through weekly lab investigations.",
        teacher_id: "aisha-rahman",
    },
    Course {
        id: "foundation-maths",
        title: "Foundation Mathematics",
        level: CourseLevel::Foundation,
        subject_area: "Mathematics",
        grades: &[6, 7, 8],
        weekly_hours: 5,
        description: "Number, algebra and geometry with an emphasis on reasoning and problem solving.",
        teacher_id: "lena-hoffmann",
    },
    Course {
        id: "english-6-8",
        title: "English Language & Literature",
        level: CourseLevel::Foundation,
        subject_area: "Humanities",
        grades: &[6, 7, 8],
        weekly_hours: 5,
        description: "Reading widely, writing with purpose and speaking with confidence.",
        teacher_id: "priya-menon",
    },
    Course {
        id: "core-biology",
        title: "Biology",
        level: CourseLevel::Core,
        subject_area: "Sciences",
        grades: &[9, 10],
        weekly_hours: 3,
        description: "Cells, genetics, ecology and human physiology, including a coastal field study.",
        teacher_id: "aisha-rahman",
    },
    Course {
        id: "core-physics",
        title: "Physics",
        level: CourseLevel::Core,
        subject_area: "Sciences",
        grades: &[9, 10],
        weekly_hours: 3,
        description: "Forces, energy, waves and electricity with practical data logging.",
        teacher_id: "tomas-novak",
    },
    Course {
        id: "core-maths",
        title: "Mathematics",
        level: CourseLevel::Core,
        subject_area: "Mathematics",
        grades: &[9, 10],
        weekly_hours: 5,
        description: "Functions, trigonometry, probability and an introduction to proof.",
        teacher_id: "samuel-oduya",
    },
    Course {
        id: "world-history",
        title: "World History",
        level: CourseLevel::Core,
        subject_area: "Humanities",
        grades: &[9, 10],
        weekly_hours: 3,
        description: "Source-based study of the twentieth century, from empire to globalisation.",
        teacher_id: "daniel-reyes",
    },
    Course {
        id: "advanced-chemistry",
        title: "Advanced Chemistry",
        level: CourseLevel::Advanced,
        subject_area: "Sciences",
        grades: &[11, 12],
        weekly_hours: 5,
        description: "Diploma-level chemistry with an independent investigation in year 12.",
        teacher_id: "grace-whitfield",
    },
    Course {
        id: "calculus",
        title: "Calculus & Analysis",
        level: CourseLevel::Advanced,
        subject_area: "Mathematics",
        grades: &[11, 12],
        weekly_hours: 6,
        description: "Differential and integral calculus, series and an introduction to analysis.",
        teacher_id: "samuel-oduya",
    },
    Course {
        id: "literature-seminar",
        title: "Literature Seminar",
        level: CourseLevel::Advanced,
        subject_area: "Humanities",
        grades: &[11, 12],
        weekly_hours: 4,
        description: "Seminar-style study of drama, poetry and the novel across four centuries.",
        teacher_id: "priya-menon",
    },
    Course {
        id: "french",
        title: "French",
        level: CourseLevel::Elective,
        subject_area: "Languages",
        grades: &[7, 8, 9, 10, 11, 12],
        weekly_hours: 3,
        description: "Communicative French from beginner to diploma level, with the Lyon exchange in year 10.",
        teacher_id: "jean-luc-martin",
    },
    Course {
        id: "computer-science",
        title: "Computer Science",
        level: CourseLevel::Elective,
        subject_area: "Mathematics",
        grades: &[9, 10, 11, 12],
        weekly_hours: 3,
        description: "Programming in Python, algorithms, data and the basics of computer architecture.",
        teacher_id: "lena-hoffmann",
    },
    Course {
        id: "studio-art",
        title: "Studio Art",
        level: CourseLevel::Elective,
        subject_area: "Arts",
        grades: &[9, 10, 11, 12],
        weekly_hours: 2,
        description: "Drawing, ceramics and digital design, culminating in the end-of-year exhibition.",
        teacher_id: "yuki-tanaka",
    },
    Course {
        id: "grade-12-capstone",
        title: "Capstone Project",
        level: CourseLevel::Advanced,
        subject_area: "Interdisciplinary",
        grades: &[12],
        weekly_hours: 2,
        description: "A year-long independent research project presented to a panel in spring.",
        teacher_id: "helen-castillo",
    },
];

pub fn course_catalog() -> Catalog<'static, Course> {
    Catalog::new(COURSES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_staff_member::data::staff_catalog;
    use crate::shared::catalog::duplicate_ids;

    #[test]
    fn test_ids_unique() {
        assert!(duplicate_ids(COURSES).is_empty(), "{:?}", duplicate_ids(COURSES));
    }

    #[test]
    fn test_every_course_has_a_known_teacher() {
        let staff = staff_catalog();
        for course in COURSES {
            assert!(staff.find(course.teacher_id).is_some(), "{}", course.id);
        }
    }

    #[test]
    fn test_grades_label() {
        let catalog = course_catalog();
        assert_eq!(catalog.find("core-maths").map(|c| c.grades_label()), Some("Grades 9-10".to_string()));
        assert_eq!(catalog.find("grade-12-capstone").map(|c| c.grades_label()), Some("Grade 12".to_string()));
    }
}
