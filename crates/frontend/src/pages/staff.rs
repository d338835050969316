use crate::domain::a001_staff_member::ui::details::StaffDetails;
use crate::domain::a001_staff_member::ui::list::StaffList;
use crate::shared::catalog_state::{CatalogController, DetailState};
use crate::shared::components::catalog_toolbar::CatalogToolbar;
use crate::shared::components::page_header::PageHeader;
use crate::shared::head::PageHead;
use contracts::domain::a001_staff_member::aggregate::StaffMember;
use contracts::domain::a001_staff_member::data::staff_catalog;
use contracts::school::SCHOOL;
use contracts::site::routes::PageKey;
use leptos::prelude::*;

#[component]
pub fn StaffPage() -> impl IntoView {
    let controller = CatalogController::new(staff_catalog());
    let details = DetailState::<StaffMember>::new();

    view! {
        <PageHead page=PageKey::Staff />
        <section class="page">
            <PageHeader
                eyebrow="Our school"
                title="Staff directory"
                subtitle=format!(
                    "{} teachers and specialists who know every student by name.",
                    SCHOOL.teacher_count
                )
            />
            <CatalogToolbar
                controller=controller
                search_placeholder="Search by name, role or subject"
                all_label="All departments"
            />
            <StaffList controller=controller on_open=details.on_open() />
        </section>
        {move || details.current().map(|member| view! {
            <StaffDetails member=member on_close=details.on_close() />
        })}
    }
}
