use crate::shared::catalog_state::CatalogController;
use crate::shared::components::card_animated::{stagger_delay, CardAnimated};
use crate::shared::components::catalog_grid::CatalogGrid;
use crate::shared::components::remote_image::RemoteImage;
use crate::shared::components::ui::badge::Badge;
use crate::shared::list_utils::Highlight;
use contracts::domain::a003_partner::aggregate::Partner;
use contracts::shared::catalog::Choice;
use leptos::prelude::*;

#[component]
pub fn PartnerList(
    controller: CatalogController<Partner>,
    on_open: Callback<&'static Partner>,
) -> impl IntoView {
    let query = controller.search_text();

    view! {
        <CatalogGrid
            controller=controller
            empty_message="No partners match your search."
            class="card-grid--3"
            card=move |partner: &'static Partner, index: usize| view! {
                <CardAnimated delay_ms=stagger_delay(index) class="partner-card">
                    <button
                        type="button"
                        class="card-button"
                        on:click=move |_| on_open.run(partner)
                    >
                        <RemoteImage src=partner.logo_url alt=partner.name class="partner-card__logo" />
                        <div class="partner-card__body">
                            <h3 class="partner-card__name">
                                <Highlight text=partner.name query=query />
                            </h3>
                            <div class="partner-card__meta">
                                <Badge>{partner.kind.label()}</Badge>
                                <span class="details__muted">{format!("Since {}", partner.since_year)}</span>
                            </div>
                            <p class="partner-card__description">{partner.description}</p>
                        </div>
                    </button>
                </CardAnimated>
            }.into_any()
        />
    }
}
