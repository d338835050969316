use crate::shared::catalog_state::CatalogController;
use crate::shared::components::card_animated::{stagger_delay, CardAnimated};
use crate::shared::components::catalog_grid::CatalogGrid;
use crate::shared::components::ui::badge::Badge;
use crate::shared::icons::icon;
use crate::shared::list_utils::Highlight;
use contracts::domain::a006_bus_route::aggregate::BusRoute;
use contracts::school::SCHOOL;
use contracts::shared::catalog::Choice;
use leptos::prelude::*;

/// Route cards with the full stop sequence; transport has no detail overlay.
#[component]
pub fn BusRouteList(controller: CatalogController<BusRoute>) -> impl IntoView {
    let query = controller.search_text();

    view! {
        <CatalogGrid
            controller=controller
            empty_message="No bus routes serve that stop."
            class="card-grid--2"
            card=move |route: &'static BusRoute, index: usize| {
                let stops = route
                    .stops
                    .iter()
                    .map(|stop| view! { <li><Highlight text=*stop query=query /></li> })
                    .collect_view();
                view! {
                    <CardAnimated delay_ms=stagger_delay(index) class="route-card">
                        <div class="route-card__header">
                            <span class="route-card__icon">{icon("bus")}</span>
                            <h3 class="route-card__name">
                                <Highlight text=route.name query=query />
                            </h3>
                            <Badge>{route.zone.label()}</Badge>
                        </div>
                        <ol class="route-card__stops">{stops}</ol>
                        <div class="route-card__footer">
                            <span>{icon("clock")}{format!("Departs {} · Returns {}", route.morning_departure, route.afternoon_departure)}</span>
                            <strong>{format!("{} / month", SCHOOL.format_money(route.monthly_fee))}</strong>
                        </div>
                    </CardAnimated>
                }
                .into_any()
            }
        />
    }
}
