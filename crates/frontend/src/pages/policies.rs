use crate::domain::a009_policy::ui::list::PolicyList;
use crate::shared::catalog_state::CatalogController;
use crate::shared::components::catalog_toolbar::CatalogToolbar;
use crate::shared::components::page_header::PageHeader;
use crate::shared::head::PageHead;
use contracts::domain::a009_policy::data::policy_catalog;
use contracts::school::SCHOOL;
use contracts::site::routes::PageKey;
use leptos::prelude::*;

#[component]
pub fn PoliciesPage() -> impl IntoView {
    let controller = CatalogController::new(policy_catalog());

    view! {
        <PageHead page=PageKey::Policies />
        <section class="page">
            <PageHeader
                eyebrow="Our school"
                title="School policies"
                subtitle=format!(
                    "Printed copies are available from the school office. Questions: {}",
                    SCHOOL.email
                )
            />
            <CatalogToolbar
                controller=controller
                search_placeholder="Search policies"
                all_label="All areas"
            />
            <PolicyList controller=controller />
        </section>
    }
}
