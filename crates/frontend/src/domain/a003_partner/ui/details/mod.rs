use crate::shared::components::remote_image::RemoteImage;
use crate::shared::components::ui::badge::Badge;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a003_partner::aggregate::Partner;
use contracts::shared::catalog::Choice;
use leptos::prelude::*;

#[component]
pub fn PartnerDetails(partner: &'static Partner, on_close: Callback<()>) -> impl IntoView {
    let benefits = partner
        .benefits
        .iter()
        .map(|b| view! { <li>{*b}</li> })
        .collect_view();

    view! {
        <Modal
            title=partner.name
            subtitle=format!("{} partner since {}", partner.kind.label(), partner.since_year)
            on_close=on_close
        >
            <div class="details">
                <RemoteImage src=partner.logo_url alt=partner.name class="details__logo" />
                <p class="details__text">{partner.description}</p>
                <h4 class="details__heading">"What students gain"</h4>
                <ul class="details__list">{benefits}</ul>
                <div class="details__meta">
                    <Badge>{partner.kind.label()}</Badge>
                    <a class="details__link" href=partner.website target="_blank" rel="noopener noreferrer">
                        {icon("external-link")}"Visit website"
                    </a>
                </div>
            </div>
        </Modal>
    }
}
