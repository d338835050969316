use super::aggregate::{Club, ClubKind};
use crate::shared::catalog::Catalog;

pub static CLUBS: &[Club] = &[
    Club {
        id: "robotics",
        name: "Robotics Club",
        kind: ClubKind::Stem,
        schedule: "Tue & Thu, 15:30-17:00",
        advisor: "Tomas Novak",
        description: "Design, build and program robots for the regional Robotics Cup.",
        members: 28,
        rating: 4.8,
        image_url: "https://picsum.photos/seed/club-robotics/640/400",
    },
    Club {
        id: "chess",
        name: "Chess Club",
        kind: ClubKind::Stem,
        schedule: "Mon, 15:30-16:30",
        advisor: "Lena Hoffmann",
        description: "Casual games, puzzles and a ladder tournament open to every grade.",
        members: 35,
        rating: 4.5,
        image_url: "https://picsum.photos/seed/club-chess/640/400",
    },
    Club {
        id: "chamber-choir",
        name: "Chamber Choir",
        kind: ClubKind::Arts,
        schedule: "Wed, 15:30-17:00",
        advisor: "Yuki Tanaka",
        description: "Auditioned choir performing at festivals and the winter concert.",
        members: 24,
        rating: 4.9,
        image_url: "https://picsum.photos/seed/club-choir/640/400",
    },
    Club {
        id: "drama",
        name: "Drama Society",
        kind: ClubKind::Arts,
        schedule: "Thu, 15:30-17:30",
        advisor: "Priya Menon",
        description: "Stages a full musical every spring and a one-act festival in autumn.",
        members: 41,
        rating: 4.7,
        image_url: "https://picsum.photos/seed/club-drama/640/400",
    },
    Club {
        id: "basketball",
        name: "Basketball",
        kind: ClubKind::Sports,
        schedule: "Mon, Wed & Fri, 16:00-17:30",
        advisor: "Marcus Bell",
        description: "Junior and senior squads competing in the city schools league.",
        members: 36,
        rating: 4.6,
        image_url: "https://picsum.photos/seed/club-basketball/640/400",
    },
    Club {
        id: "sailing",
        name: "Sailing Club",
        kind: ClubKind::Sports,
        schedule: "Sat, 09:00-12:00 (spring & summer terms)",
        advisor: "Marcus Bell",
        description: "Dinghy sailing at the harbour with certified instructors.",
        members: 18,
        rating: 4.4,
        image_url: "https://picsum.photos/seed/club-sailing/640/400",
    },
    Club {
        id: "eco-council",
        name: "Eco Council",
        kind: ClubKind::Service,
        schedule: "Fri, 12:30-13:15",
        advisor: "Aisha Rahman",
        description: "Runs recycling, the school garden and the annual coastal clean-up.",
        members: 22,
        rating: 4.3,
        image_url: "https://picsum.photos/seed/club-eco/640/400",
    },
    Club {
        id: "debate",
        name: "Debate Union",
        kind: ClubKind::Service,
        schedule: "Tue, 15:30-17:00",
        advisor: "Priya Menon",
        description: "Competitive debating and Model UN conferences.",
        members: 30,
        rating: 4.6,
        image_url: "https://picsum.photos/seed/club-debate/640/400",
    },
];

pub fn club_catalog() -> Catalog<'static, Club> {
    Catalog::new(CLUBS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a008_club::aggregate::ClubSort;
    use crate::shared::catalog::{duplicate_ids, sort_refs, QueryFor};

    #[test]
    fn test_ids_unique() {
        assert!(duplicate_ids(CLUBS).is_empty(), "{:?}", duplicate_ids(CLUBS));
    }

    #[test]
    fn test_highest_rated_first_and_ties_keep_order() {
        let query = QueryFor::<Club>::default().with_sort(Some(ClubSort::HighestRated));
        let ids: Vec<_> = club_catalog().view(&query).iter().map(|c| c.id).collect();
        assert_eq!(ids[0], "chamber-choir");
        // basketball and debate both score 4.6; catalog order is preserved
        let b = ids.iter().position(|&i| i == "basketball");
        let d = ids.iter().position(|&i| i == "debate");
        assert!(b < d);
    }

    #[test]
    fn test_sort_idempotent() {
        let query = QueryFor::<Club>::default().with_sort(Some(ClubSort::MostMembers));
        let view = club_catalog().view(&query);
        let mut again = view.clone();
        sort_refs(&mut again, ClubSort::MostMembers);
        assert_eq!(again, view);
    }

    #[test]
    fn test_search_by_advisor() {
        let query = QueryFor::<Club>::default().with_search("marcus");
        assert_eq!(club_catalog().view(&query).len(), 2);
    }
}
