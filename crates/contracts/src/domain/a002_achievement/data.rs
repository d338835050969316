use super::aggregate::{Achievement, AchievementCategory};
use crate::shared::catalog::Catalog;

pub static ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        id: "regional-science-olympiad-2025",
        title: "Regional Science Olympiad Champions",
        category: AchievementCategory::Academic,
        date: "2025-04-12",
        award: "1st place, team event",
        description: "Our year 11 team won the regional olympiad with a perfect score in the practical round.",
        participants: &["Science Olympiad Squad"],
        image_url: "https://picsum.photos/seed/olympiad/640/400",
    },
    Achievement {
        id: "basketball-league-2025",
        title: "Senior Basketball League Title",
        category: AchievementCategory::Sports,
        date: "2025-03-02",
        award: "League champions",
        description: "The senior boys' team finished the season unbeaten, winning the final 64-58.",
        participants: &["Senior Basketball Team"],
        image_url: "https://picsum.photos/seed/basketball/640/400",
    },
    Achievement {
        id: "youth-art-biennale-2024",
        title: "Youth Art Biennale Selection",
        category: AchievementCategory::Arts,
        date: "2024-11-18",
        award: "Three works exhibited",
        description: "Three ceramics pieces by year 12 students were selected for the national youth biennale.",
        participants: &["Ines Park", "Oliver Grant", "Mia Chen"],
        image_url: "https://picsum.photos/seed/biennale/640/400",
    },
    Achievement {
        id: "coastal-cleanup-2024",
        title: "Coastal Clean-up Record",
        category: AchievementCategory::Community,
        date: "2024-09-21",
        award: "City council commendation",
        description: "Two hundred students and parents removed over a tonne of litter from Harbour Beach.",
        participants: &["Eco Council", "Parents' Association"],
        image_url: "https://picsum.photos/seed/cleanup/640/400",
    },
    Achievement {
        id: "maths-challenge-2024",
        title: "National Maths Challenge Gold",
        category: AchievementCategory::Academic,
        date: "2024-06-08",
        award: "4 gold certificates",
        description: "Four students earned gold certificates, the school's best result to date.",
        participants: &["Maths Challenge Team"],
        image_url: "https://picsum.photos/seed/maths/640/400",
    },
    Achievement {
        id: "robotics-cup-2025",
        title: "Robotics Cup Innovation Award",
        category: AchievementCategory::Academic,
        date: "2025-05-17",
        award: "Innovation award",
        description: "Our robot sorted recyclables by material using a home-built colour sensor.",
        participants: &["Robotics Club"],
        image_url: "https://picsum.photos/seed/robotics/640/400",
    },
    Achievement {
        id: "choir-festival-2025",
        title: "Choral Festival Gold Diploma",
        category: AchievementCategory::Arts,
        date: "2025-02-14",
        award: "Gold diploma",
        description: "The chamber choir earned a gold diploma at the international choral festival.",
        participants: &["Chamber Choir"],
        image_url: "https://picsum.photos/seed/choir/640/400",
    },
    Achievement {
        id: "athletics-relay-2024",
        title: "4x100m Relay Record",
        category: AchievementCategory::Sports,
        date: "2024-05-25",
        award: "District record",
        description: "The girls' relay team set a new district record of 48.9 seconds.",
        participants: &["Amara Osei", "Lucy Ward", "Sofia Ruiz", "Hana Kim"],
        image_url: "https://picsum.photos/seed/relay/640/400",
    },
];

pub fn achievement_catalog() -> Catalog<'static, Achievement> {
    Catalog::new(ACHIEVEMENTS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_achievement::aggregate::AchievementSort;
    use crate::shared::catalog::{duplicate_ids, sort_refs, QueryFor};
    use crate::shared::date_utils::parse_iso_date;

    #[test]
    fn test_ids_unique() {
        assert!(duplicate_ids(ACHIEVEMENTS).is_empty(), "{:?}", duplicate_ids(ACHIEVEMENTS));
    }

    #[test]
    fn test_dates_parse() {
        for a in ACHIEVEMENTS {
            assert!(parse_iso_date(a.date).is_some(), "{}", a.id);
        }
    }

    #[test]
    fn test_most_recent_first() {
        let query = QueryFor::<Achievement>::default().with_sort(Some(AchievementSort::MostRecent));
        let view = achievement_catalog().view(&query);
        assert_eq!(view[0].id, "robotics-cup-2025");
        assert_eq!(view.last().map(|a| a.id), Some("athletics-relay-2024"));

        let mut again = view.clone();
        sort_refs(&mut again, AchievementSort::MostRecent);
        assert_eq!(again, view);
    }

    #[test]
    fn test_search_participants() {
        let query = QueryFor::<Achievement>::default().with_search("lucy");
        let view = achievement_catalog().view(&query);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, "athletics-relay-2024");
    }
}
