use crate::shared::catalog_state::CatalogController;
use crate::shared::components::card_animated::{stagger_delay, CardAnimated};
use crate::shared::components::catalog_grid::CatalogGrid;
use crate::shared::components::ui::badge::Badge;
use crate::shared::icons::icon;
use crate::shared::list_utils::Highlight;
use contracts::domain::a009_policy::aggregate::Policy;
use contracts::shared::catalog::Choice;
use contracts::shared::date_utils::format_long_date;
use leptos::prelude::*;

#[component]
pub fn PolicyList(controller: CatalogController<Policy>) -> impl IntoView {
    let query = controller.search_text();

    view! {
        <CatalogGrid
            controller=controller
            empty_message="No policies match your search."
            class="card-grid--2"
            card=move |policy: &'static Policy, index: usize| view! {
                <CardAnimated delay_ms=stagger_delay(index) class="policy-card">
                    <div class="policy-card__header">
                        <span class="policy-card__icon">{icon("file-text")}</span>
                        <h3 class="policy-card__title">
                            <Highlight text=policy.title query=query />
                        </h3>
                    </div>
                    <p class="policy-card__summary">
                        <Highlight text=policy.summary query=query />
                    </p>
                    <div class="policy-card__footer">
                        <Badge>{policy.area.label()}</Badge>
                        <span class="details__muted">{format!("Updated {}", format_long_date(policy.updated))}</span>
                        <a class="details__link" href=policy.document_url target="_blank" rel="noopener noreferrer">
                            {icon("external-link")}"Read policy"
                        </a>
                    </div>
                </CardAnimated>
            }.into_any()
        />
    }
}
