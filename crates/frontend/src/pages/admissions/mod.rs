mod fee_calculator;

use crate::domain::a004_faq::ui::list::FaqAccordion;
use crate::shared::catalog_state::CatalogController;
use crate::shared::components::card_animated::{stagger_delay, CardAnimated};
use crate::shared::components::catalog_toolbar::CatalogToolbar;
use crate::shared::components::page_header::PageHeader;
use crate::shared::head::PageHead;
use crate::shared::icons::icon;
use contracts::domain::a004_faq::data::faq_catalog;
use contracts::school::SCHOOL;
use contracts::shared::date_utils::format_long_date;
use contracts::site::routes::PageKey;
use fee_calculator::FeeCalculator;
use leptos::prelude::*;

const STEPS: &[(&str, &str)] = &[
    ("Visit", "Join an open morning or book a personal tour with the admissions team."),
    ("Apply", "Submit the online application with the last two school reports."),
    ("Assess", "Candidates sit a short assessment in English and mathematics and meet a teacher."),
    ("Enrol", "Accept your offer and pay the registration fee to secure a place."),
];

#[component]
pub fn AdmissionsPage() -> impl IntoView {
    let faqs = CatalogController::new(faq_catalog());

    let steps = STEPS
        .iter()
        .enumerate()
        .map(|(i, (title, text))| view! {
            <CardAnimated delay_ms=stagger_delay(i) class="step-card">
                <div class="step-card__number">{i + 1}</div>
                <h3 class="step-card__title">{*title}</h3>
                <p>{*text}</p>
            </CardAnimated>
        })
        .collect_view();

    let deadlines = SCHOOL
        .deadlines
        .iter()
        .map(|d| view! {
            <li class="timeline__item">
                <span class="timeline__date">{icon("calendar")}{format_long_date(d.date)}</span>
                <span class="timeline__label">{d.label}</span>
            </li>
        })
        .collect_view();

    let bands = SCHOOL
        .fee_bands
        .iter()
        .map(|band| view! {
            <tr>
                <td>{band.label}</td>
                <td class="num">{SCHOOL.format_money(band.annual_tuition)}</td>
            </tr>
        })
        .collect_view();

    view! {
        <PageHead page=PageKey::Admissions />
        <section class="page">
            <PageHeader
                eyebrow="Joining us"
                title="Admissions"
                subtitle=format!("Places are offered in grades {} to {}.", first_grade(), last_grade())
            >
                <a class="button button--primary" href=format!("mailto:{}", SCHOOL.admissions_email)>
                    {icon("mail")}"Contact admissions"
                </a>
            </PageHeader>

            <h2 class="section-title">"How to apply"</h2>
            <div class="card-grid card-grid--4">{steps}</div>

            <div class="two-columns">
                <div>
                    <h2 class="section-title">"Key dates"</h2>
                    <ol class="timeline">{deadlines}</ol>
                </div>
                <div>
                    <h2 class="section-title">"Tuition"</h2>
                    <table class="fee-table">
                        <thead>
                            <tr><th>"Years"</th><th class="num">"Annual tuition"</th></tr>
                        </thead>
                        <tbody>{bands}</tbody>
                    </table>
                    <p class="details__muted">
                        {format!(
                            "One-off registration fee {}. Siblings receive {}% off tuition each, up to {}%.",
                            SCHOOL.format_money(SCHOOL.registration_fee),
                            SCHOOL.sibling_discount_percent,
                            SCHOOL.max_sibling_discount_percent
                        )}
                    </p>
                </div>
            </div>

            <h2 class="section-title" id="fees">"Fee calculator"</h2>
            <FeeCalculator />

            <h2 class="section-title" id="faq">"Frequently asked questions"</h2>
            <CatalogToolbar
                controller=faqs
                search_placeholder="Search questions"
                all_label="All topics"
                hide_sort=true
            />
            <FaqAccordion controller=faqs />
        </section>
    }
}

fn first_grade() -> u8 {
    SCHOOL.grades.first().copied().unwrap_or_default()
}

fn last_grade() -> u8 {
    SCHOOL.grades.last().copied().unwrap_or_default()
}
