use crate::domain::a005_course::ui::details::CourseDetails;
use crate::domain::a005_course::ui::list::CourseList;
use crate::shared::catalog_state::{CatalogController, DetailState};
use crate::shared::components::catalog_toolbar::CatalogToolbar;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::head::PageHead;
use contracts::domain::a005_course::aggregate::{Course, CourseLevel};
use contracts::domain::a005_course::data::course_catalog;
use contracts::school::SCHOOL;
use contracts::shared::catalog::CategoryFilter;
use contracts::site::routes::PageKey;
use leptos::prelude::*;

#[component]
pub fn AcademicsPage() -> impl IntoView {
    let catalog = course_catalog();
    let controller = CatalogController::new(catalog);
    let details = DetailState::<Course>::new();

    let advanced = catalog
        .filter_by_category(CategoryFilter::Only(CourseLevel::Advanced))
        .len();
    let electives = catalog
        .filter_by_category(CategoryFilter::Only(CourseLevel::Elective))
        .len();

    view! {
        <PageHead page=PageKey::Academics />
        <section class="page">
            <PageHeader
                eyebrow="Learning"
                title="Academics"
                subtitle="A broad foundation in the middle years, then depth and choice in the senior diploma."
            />
            <div class="stat-grid">
                <StatCard label="Courses offered" value=catalog.len().to_string() icon_name="book" />
                <StatCard label="Advanced courses" value=advanced.to_string() icon_name="graduation-cap" />
                <StatCard label="Electives" value=electives.to_string() icon_name="star" />
                <StatCard
                    label="University placement"
                    value=format!("{}%", SCHOOL.university_placement_percent)
                    icon_name="award"
                />
            </div>
            <CatalogToolbar
                controller=controller
                search_placeholder="Search courses or subjects"
                all_label="All levels"
            />
            <CourseList controller=controller on_open=details.on_open() />
        </section>
        {move || details.current().map(|course| view! {
            <CourseDetails course=course on_close=details.on_close() />
        })}
    }
}
