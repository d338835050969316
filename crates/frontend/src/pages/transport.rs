use crate::domain::a006_bus_route::ui::list::BusRouteList;
use crate::shared::catalog_state::CatalogController;
use crate::shared::components::catalog_toolbar::CatalogToolbar;
use crate::shared::components::page_header::PageHeader;
use crate::shared::head::PageHead;
use crate::shared::icons::icon;
use contracts::domain::a006_bus_route::data::bus_route_catalog;
use contracts::school::fees::TRANSPORT_MONTHS;
use contracts::school::SCHOOL;
use contracts::site::routes::PageKey;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn TransportPage() -> impl IntoView {
    let controller = CatalogController::new(bus_route_catalog());

    view! {
        <PageHead page=PageKey::Transport />
        <section class="page">
            <PageHeader
                eyebrow="Joining us"
                title="School transport"
                subtitle="Supervised buses cover the city and the coast. Every route arrives before the first bell."
            />
            <div class="notice">
                {icon("bus")}
                <p>
                    {format!(
                        "Fees are billed for {} school months and can be added to any payment plan. Register through {}.",
                        TRANSPORT_MONTHS,
                        SCHOOL.admissions_email
                    )}
                    " "
                    <A href="/admissions">"Estimate your total fees"</A>
                </p>
            </div>
            <CatalogToolbar
                controller=controller
                search_placeholder="Search by route or stop"
                all_label="All zones"
            />
            <BusRouteList controller=controller />
        </section>
    }
}
