use super::aggregate::{Partner, PartnerKind};
use crate::shared::catalog::Catalog;

pub static PARTNERS: &[Partner] = &[
    Partner {
        id: "harbour-university",
        name: "Harbour State University",
        kind: PartnerKind::University,
        description: "Dual-enrolment courses and lab access for senior science students.",
        since_year: 2008,
        website: "https://harbour.edu",
        logo_url: "https://picsum.photos/seed/harbour-uni/240/240",
        benefits: &["University credit for year 12 courses", "Weekend lab placements"],
    },
    Partner {
        id: "tidewater-tech",
        name: "Tidewater Technologies",
        kind: PartnerKind::Business,
        description: "Mentors our robotics club and hosts summer engineering internships.",
        since_year: 2016,
        website: "https://tidewater.tech",
        logo_url: "https://picsum.photos/seed/tidewater/240/240",
        benefits: &["Summer internships", "Robotics mentoring", "Equipment grants"],
    },
    Partner {
        id: "city-museum",
        name: "Northbridge City Museum",
        kind: PartnerKind::Cultural,
        description: "Curated student exhibitions and a history-in-practice workshop series.",
        since_year: 1998,
        website: "https://northbridgemuseum.org",
        logo_url: "https://picsum.photos/seed/museum/240/240",
        benefits: &["Free student entry", "Exhibition space each spring"],
    },
    Partner {
        id: "lyon-lycee",
        name: "Lycée Saint-Exupéry, Lyon",
        kind: PartnerKind::Cultural,
        description: "Our sister school in France, hosting the annual year 10 language exchange.",
        since_year: 2004,
        website: "https://lycee-saint-exupery.fr",
        logo_url: "https://picsum.photos/seed/lyon/240/240",
        benefits: &["Two-week exchange", "Joint online classes"],
    },
    Partner {
        id: "harbour-health",
        name: "Harbour Health Clinic",
        kind: PartnerKind::Community,
        description: "Provides the school nurse service and wellbeing workshops.",
        since_year: 2012,
        website: "https://harbourhealth.org",
        logo_url: "https://picsum.photos/seed/clinic/240/240",
        benefits: &["On-site nurse", "First-aid certification"],
    },
    Partner {
        id: "greenline-energy",
        name: "Greenline Energy",
        kind: PartnerKind::Business,
        description: "Funded the rooftop solar array and sponsors the eco council.",
        since_year: 2020,
        website: "https://greenline.energy",
        logo_url: "https://picsum.photos/seed/greenline/240/240",
        benefits: &["Solar data for physics classes", "Eco council grants"],
    },
];

pub fn partner_catalog() -> Catalog<'static, Partner> {
    Catalog::new(PARTNERS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_partner::aggregate::PartnerSort;
    use crate::shared::catalog::{duplicate_ids, QueryFor};

    #[test]
    fn test_ids_unique() {
        assert!(duplicate_ids(PARTNERS).is_empty(), "{:?}", duplicate_ids(PARTNERS));
    }

    #[test]
    fn test_longest_partnership_first() {
        let query = QueryFor::<Partner>::default().with_sort(Some(PartnerSort::Longest));
        let years: Vec<_> = partner_catalog().view(&query).iter().map(|p| p.since_year).collect();
        assert!(years.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(years[0], 1998);
    }

    #[test]
    fn test_counts_cover_catalog() {
        let total: usize = partner_catalog().count_by_category().iter().map(|(_, n)| n).sum();
        assert_eq!(total, PARTNERS.len());
    }
}
