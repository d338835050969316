use crate::shared::components::card_animated::{stagger_delay, CardAnimated};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::remote_image::RemoteImage;
use crate::shared::head::PageHead;
use crate::shared::icons::icon;
use contracts::domain::a001_staff_member::aggregate::Department;
use contracts::domain::a001_staff_member::data::staff_catalog;
use contracts::school::SCHOOL;
use contracts::shared::catalog::CategoryFilter;
use contracts::site::routes::PageKey;
use leptos::prelude::*;
use leptos_router::components::A;

const MILESTONES: &[(u16, &str)] = &[
    (1962, "Northbridge opens with 120 students in the old harbour customs house."),
    (1988, "The science wing and observatory are completed."),
    (2004, "The senior diploma programme is introduced."),
    (2015, "A new arts centre opens, with a theatre and ceramics studios."),
    (2021, "Northbridge becomes a carbon-neutral campus."),
];

const VALUES: &[(&str, &str, &str)] = &[
    ("star", "Curiosity", "We ask good questions and follow them further than the syllabus."),
    ("users", "Character", "Honesty, kindness and responsibility matter as much as grades."),
    ("handshake", "Community", "We learn with families, partners and the city around us."),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    let values = VALUES
        .iter()
        .enumerate()
        .map(|(i, (icon_name, title, text))| view! {
            <CardAnimated delay_ms=stagger_delay(i) class="pillar-card">
                <div class="pillar-card__icon">{icon(icon_name)}</div>
                <h3>{*title}</h3>
                <p>{*text}</p>
            </CardAnimated>
        })
        .collect_view();

    let timeline = MILESTONES
        .iter()
        .map(|(year, text)| view! {
            <li class="timeline__item">
                <span class="timeline__date">{*year}</span>
                <span class="timeline__label">{*text}</span>
            </li>
        })
        .collect_view();

    let leaders = staff_catalog()
        .filter_by_category(CategoryFilter::Only(Department::Leadership))
        .into_iter()
        .map(|member| view! {
            <div class="leader">
                <RemoteImage src=member.photo_url alt=member.name class="leader__photo" />
                <div>
                    <div class="leader__name">{member.name}</div>
                    <div class="details__muted">{member.role}</div>
                </div>
            </div>
        })
        .collect_view();

    view! {
        <PageHead page=PageKey::About />
        <section class="page">
            <PageHeader
                eyebrow="Our school"
                title="About us"
                subtitle=format!("An independent school on the Northbridge harbour front since {}.", SCHOOL.founded)
            />
            <p class="lead">
                {format!(
                    "{} teaches {} students in grades 6 to 12. Our motto, \"{}\", describes what we hope every student leaves with.",
                    SCHOOL.name, SCHOOL.student_count, SCHOOL.motto
                )}
            </p>

            <h2 class="section-title">"Our values"</h2>
            <div class="card-grid card-grid--3">{values}</div>

            <div class="two-columns">
                <div>
                    <h2 class="section-title">"Our history"</h2>
                    <ol class="timeline">{timeline}</ol>
                </div>
                <div>
                    <h2 class="section-title">"Leadership"</h2>
                    <div class="leaders">{leaders}</div>
                    <A href="/staff">
                        <span class="link-arrow">"Meet all our staff"{icon("arrow-right")}</span>
                    </A>
                </div>
            </div>
        </section>
    }
}
