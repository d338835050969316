//! School-wide configuration read by every page at render time.

/// Inclusive grade range with its annual tuition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeBand {
    pub min_grade: u8,
    pub max_grade: u8,
    pub annual_tuition: u64,
    pub label: &'static str,
}

impl FeeBand {
    pub fn covers(&self, grade: u8) -> bool {
        (self.min_grade..=self.max_grade).contains(&grade)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdmissionDeadline {
    pub label: &'static str,
    /// ISO date.
    pub date: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub network: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchoolConfig {
    pub name: &'static str,
    pub short_name: &'static str,
    pub motto: &'static str,
    pub founded: u16,
    pub address: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub admissions_email: &'static str,
    pub office_hours: &'static str,
    pub currency: &'static str,
    pub grades: &'static [u8],
    pub student_count: u32,
    pub teacher_count: u32,
    pub university_placement_percent: u8,
    pub fee_bands: &'static [FeeBand],
    pub registration_fee: u64,
    /// Applied to tuition per enrolled sibling, capped by `max_sibling_discount_percent`.
    pub sibling_discount_percent: u8,
    pub max_sibling_discount_percent: u8,
    pub deadlines: &'static [AdmissionDeadline],
    pub social: &'static [SocialLink],
}

pub static SCHOOL: SchoolConfig = SchoolConfig {
    name: "Northbridge Secondary School",
    short_name: "Northbridge",
    motto: "Curiosity, character, community",
    founded: 1962,
    address: "48 Harbour Road, Northbridge",
    phone: "+1 (555) 014-2290",
    email: "office@northbridge.school",
    admissions_email: "admissions@northbridge.school",
    office_hours: "Mon-Fri 7:30-16:30",
    currency: "USD",
    grades: &[6, 7, 8, 9, 10, 11, 12],
    student_count: 840,
    teacher_count: 72,
    university_placement_percent: 94,
    fee_bands: &[
        FeeBand { min_grade: 6, max_grade: 8, annual_tuition: 9_600, label: "Middle years (6-8)" },
        FeeBand { min_grade: 9, max_grade: 10, annual_tuition: 11_400, label: "Upper years (9-10)" },
        FeeBand { min_grade: 11, max_grade: 12, annual_tuition: 12_900, label: "Senior years (11-12)" },
    ],
    registration_fee: 450,
    sibling_discount_percent: 10,
    max_sibling_discount_percent: 25,
    deadlines: &[
        AdmissionDeadline { label: "Applications open", date: "2025-10-01" },
        AdmissionDeadline { label: "Early application deadline", date: "2025-12-15" },
        AdmissionDeadline { label: "Entrance assessment day", date: "2026-01-24" },
        AdmissionDeadline { label: "Final application deadline", date: "2026-03-01" },
        AdmissionDeadline { label: "Offers sent", date: "2026-04-10" },
    ],
    social: &[
        SocialLink { network: "facebook", url: "https://facebook.com/northbridgeschool" },
        SocialLink { network: "instagram", url: "https://instagram.com/northbridgeschool" },
        SocialLink { network: "youtube", url: "https://youtube.com/@northbridgeschool" },
    ],
};

impl SchoolConfig {
    pub fn fee_band_for(&self, grade: u8) -> Option<&'static FeeBand> {
        self.fee_bands.iter().find(|b| b.covers(grade))
    }

    pub fn years_open(&self, current_year: i32) -> i32 {
        current_year - i32::from(self.founded)
    }

    /// `1234` -> `"USD 1,234"`.
    pub fn format_money(&self, amount: u64) -> String {
        format!("{} {}", self.currency, format_thousands(amount))
    }
}

pub fn format_thousands(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_grade_covered_by_exactly_one_band() {
        for &grade in SCHOOL.grades {
            let covering = SCHOOL.fee_bands.iter().filter(|b| b.covers(grade)).count();
            assert_eq!(covering, 1, "grade {grade}");
        }
    }

    #[test]
    fn test_bands_are_well_formed() {
        for band in SCHOOL.fee_bands {
            assert!(band.min_grade <= band.max_grade, "{}", band.label);
            assert!(band.annual_tuition > 0);
        }
    }

    #[test]
    fn test_format_money() {
        assert_eq!(SCHOOL.format_money(0), "USD 0");
        assert_eq!(SCHOOL.format_money(950), "USD 950");
        assert_eq!(SCHOOL.format_money(12_900), "USD 12,900");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_deadlines_are_chronological() {
        let dates: Vec<_> = SCHOOL
            .deadlines
            .iter()
            .map(|d| crate::shared::date_utils::parse_iso_date(d.date).expect("iso date"))
            .collect();
        assert!(dates.windows(2).all(|w| w[0] < w[1]));
    }
}
