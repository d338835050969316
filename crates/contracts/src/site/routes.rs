//! Route table shared by the client router, the navigation menus and the
//! server-side sitemap.

/// Header menu group a page belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavGroup {
    School,
    Learning,
    Joining,
    Contact,
}

impl NavGroup {
    pub fn label(&self) -> &'static str {
        match self {
            NavGroup::School => "Our School",
            NavGroup::Learning => "Learning",
            NavGroup::Joining => "Joining Us",
            NavGroup::Contact => "Contact",
        }
    }

    pub fn all() -> &'static [NavGroup] {
        &[NavGroup::School, NavGroup::Learning, NavGroup::Joining, NavGroup::Contact]
    }
}

/// Page identifier used by the router to pick a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKey {
    Home,
    About,
    Staff,
    Partners,
    Policies,
    Academics,
    StudentLife,
    Admissions,
    Transport,
    Contact,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteRoute {
    pub key: PageKey,
    pub path: &'static str,
    /// Menu label.
    pub label: &'static str,
    /// `<title>` text, without the school suffix.
    pub title: &'static str,
    /// `<meta name="description">` text.
    pub description: &'static str,
    /// `None` keeps the page out of the header menu.
    pub group: Option<NavGroup>,
    /// Sitemap priority, 0.0..=1.0.
    pub priority: f32,
}

pub static SITE_ROUTES: &[SiteRoute] = &[
    SiteRoute {
        key: PageKey::Home,
        path: "/",
        label: "Home",
        title: "Welcome",
        description: "Northbridge Secondary School: an independent school for grades 6 to 12 on the Northbridge harbour front.",
        group: None,
        priority: 1.0,
    },
    SiteRoute {
        key: PageKey::About,
        path: "/about",
        label: "About us",
        title: "About us",
        description: "Our history, mission and values since 1962.",
        group: Some(NavGroup::School),
        priority: 0.8,
    },
    SiteRoute {
        key: PageKey::Staff,
        path: "/staff",
        label: "Staff directory",
        title: "Staff directory",
        description: "Meet the teachers and support staff of Northbridge Secondary School.",
        group: Some(NavGroup::School),
        priority: 0.7,
    },
    SiteRoute {
        key: PageKey::Partners,
        path: "/partners",
        label: "Partners",
        title: "Our partners",
        description: "Universities, businesses and cultural institutions we work with.",
        group: Some(NavGroup::School),
        priority: 0.5,
    },
    SiteRoute {
        key: PageKey::Policies,
        path: "/policies",
        label: "Policies",
        title: "School policies",
        description: "Safeguarding, conduct, academic and privacy policies.",
        group: Some(NavGroup::School),
        priority: 0.4,
    },
    SiteRoute {
        key: PageKey::Academics,
        path: "/academics",
        label: "Academics",
        title: "Academics",
        description: "Courses from foundation years to the senior diploma, plus electives.",
        group: Some(NavGroup::Learning),
        priority: 0.8,
    },
    SiteRoute {
        key: PageKey::StudentLife,
        path: "/student-life",
        label: "Student life",
        title: "Student life",
        description: "Clubs, teams and the achievements of our students.",
        group: Some(NavGroup::Learning),
        priority: 0.7,
    },
    SiteRoute {
        key: PageKey::Admissions,
        path: "/admissions",
        label: "Admissions",
        title: "Admissions",
        description: "How to apply, key dates, tuition fees and frequently asked questions.",
        group: Some(NavGroup::Joining),
        priority: 0.9,
    },
    SiteRoute {
        key: PageKey::Transport,
        path: "/transport",
        label: "School transport",
        title: "School transport",
        description: "Bus routes, stops, timetables and fees.",
        group: Some(NavGroup::Joining),
        priority: 0.5,
    },
    SiteRoute {
        key: PageKey::Contact,
        path: "/contact",
        label: "Contact",
        title: "Contact us",
        description: "Address, phone, email and office hours.",
        group: Some(NavGroup::Contact),
        priority: 0.6,
    },
];

pub fn route_for(key: PageKey) -> &'static SiteRoute {
    SITE_ROUTES
        .iter()
        .find(|r| r.key == key)
        .unwrap_or(&SITE_ROUTES[0])
}

/// Exact match; a single trailing slash is ignored.
pub fn find_by_path(path: &str) -> Option<&'static SiteRoute> {
    let normalized = if path.len() > 1 { path.trim_end_matches('/') } else { path };
    SITE_ROUTES.iter().find(|r| r.path == normalized)
}

pub fn routes_in_group(group: NavGroup) -> impl Iterator<Item = &'static SiteRoute> {
    SITE_ROUTES.iter().filter(move |r| r.group == Some(group))
}

/// Browser title: `"Staff directory | Northbridge"`.
pub fn page_title(route: &SiteRoute, school_short_name: &str) -> String {
    format!("{} | {}", route.title, school_short_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_paths_and_keys_unique() {
        let paths: HashSet<_> = SITE_ROUTES.iter().map(|r| r.path).collect();
        let keys: HashSet<_> = SITE_ROUTES.iter().map(|r| r.key).collect();
        assert_eq!(paths.len(), SITE_ROUTES.len());
        assert_eq!(keys.len(), SITE_ROUTES.len());
    }

    #[test]
    fn test_every_page_key_has_a_route() {
        let keys = [
            PageKey::Home,
            PageKey::About,
            PageKey::Staff,
            PageKey::Partners,
            PageKey::Policies,
            PageKey::Academics,
            PageKey::StudentLife,
            PageKey::Admissions,
            PageKey::Transport,
            PageKey::Contact,
        ];
        for key in keys {
            assert_eq!(route_for(key).key, key);
        }
    }

    #[test]
    fn test_find_by_path() {
        assert_eq!(find_by_path("/staff").map(|r| r.key), Some(PageKey::Staff));
        assert_eq!(find_by_path("/staff/").map(|r| r.key), Some(PageKey::Staff));
        assert_eq!(find_by_path("/").map(|r| r.key), Some(PageKey::Home));
        assert!(find_by_path("/login").is_none());
    }

    #[test]
    fn test_every_group_has_entries() {
        for group in NavGroup::all() {
            assert!(routes_in_group(*group).count() > 0, "{:?}", group);
        }
    }

    #[test]
    fn test_page_title() {
        assert_eq!(page_title(route_for(PageKey::Staff), "Northbridge"), "Staff directory | Northbridge");
    }
}
