use crate::domain::a003_partner::ui::details::PartnerDetails;
use crate::domain::a003_partner::ui::list::PartnerList;
use crate::shared::catalog_state::{CatalogController, DetailState};
use crate::shared::components::catalog_toolbar::CatalogToolbar;
use crate::shared::components::page_header::PageHeader;
use crate::shared::head::PageHead;
use contracts::domain::a003_partner::aggregate::Partner;
use contracts::domain::a003_partner::data::partner_catalog;
use contracts::site::routes::PageKey;
use leptos::prelude::*;

#[component]
pub fn PartnersPage() -> impl IntoView {
    let controller = CatalogController::new(partner_catalog());
    let details = DetailState::<Partner>::new();

    view! {
        <PageHead page=PageKey::Partners />
        <section class="page">
            <PageHeader
                eyebrow="Our school"
                title="Our partners"
                subtitle="Universities, employers and cultural institutions that open doors for our students."
            />
            <CatalogToolbar
                controller=controller
                search_placeholder="Search partners"
                all_label="All partners"
            />
            <PartnerList controller=controller on_open=details.on_open() />
        </section>
        {move || details.current().map(|partner| view! {
            <PartnerDetails partner=partner on_close=details.on_close() />
        })}
    }
}
