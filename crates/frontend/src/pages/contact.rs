use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::page_header::PageHeader;
use crate::shared::head::PageHead;
use crate::shared::icons::icon;
use contracts::domain::a001_staff_member::aggregate::{Department, StaffMember};
use contracts::domain::a001_staff_member::data::STAFF;
use contracts::school::SCHOOL;
use contracts::site::routes::PageKey;
use leptos::prelude::*;

/// Staff listed as direct contacts: leadership and student support.
fn key_contacts() -> Vec<&'static StaffMember> {
    STAFF
        .iter()
        .filter(|s| matches!(s.department, Department::Leadership | Department::StudentSupport))
        .collect()
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let contacts = key_contacts()
        .into_iter()
        .map(|member| view! {
            <li class="contact-person">
                <div class="contact-person__name">{member.name}</div>
                <div class="details__muted">{member.role}</div>
                <a href=format!("mailto:{}", member.email)>{member.email}</a>
            </li>
        })
        .collect_view();

    let map_query = SCHOOL.address.replace(' ', "+");

    view! {
        <PageHead page=PageKey::Contact />
        <section class="page">
            <PageHeader
                eyebrow="Contact"
                title="Contact us"
                subtitle="The school office is happy to help with visits, admissions and general questions."
            />
            <div class="two-columns">
                <CardAnimated class="contact-card">
                    <h2 class="section-title">"School office"</h2>
                    <dl class="details__facts">
                        <dt>{icon("map-pin")}"Address"</dt>
                        <dd>
                            <a
                                href=format!("https://www.openstreetmap.org/search?query={}", map_query)
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                {SCHOOL.address}
                            </a>
                        </dd>
                        <dt>{icon("phone")}"Phone"</dt>
                        <dd><a href=format!("tel:{}", SCHOOL.phone)>{SCHOOL.phone}</a></dd>
                        <dt>{icon("mail")}"Email"</dt>
                        <dd><a href=format!("mailto:{}", SCHOOL.email)>{SCHOOL.email}</a></dd>
                        <dt>{icon("graduation-cap")}"Admissions"</dt>
                        <dd>
                            <a href=format!("mailto:{}", SCHOOL.admissions_email)>{SCHOOL.admissions_email}</a>
                        </dd>
                        <dt>{icon("clock")}"Office hours"</dt>
                        <dd>{SCHOOL.office_hours}</dd>
                    </dl>
                </CardAnimated>
                <CardAnimated delay_ms=60 class="contact-card">
                    <h2 class="section-title">"Key contacts"</h2>
                    <ul class="contact-list">{contacts}</ul>
                </CardAnimated>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_contacts_include_principal_and_counsellor() {
        let ids: Vec<_> = key_contacts().iter().map(|s| s.id).collect();
        assert!(ids.contains(&"margaret-okafor"));
        assert!(ids.contains(&"helen-castillo"));
        assert!(!ids.contains(&"tomas-novak"));
    }
}
