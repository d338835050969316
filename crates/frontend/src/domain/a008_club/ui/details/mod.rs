use crate::domain::a008_club::ui::list::format_rating;
use crate::shared::components::remote_image::RemoteImage;
use crate::shared::components::ui::badge::Badge;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a008_club::aggregate::Club;
use contracts::shared::catalog::Choice;
use leptos::prelude::*;

#[component]
pub fn ClubDetails(club: &'static Club, on_close: Callback<()>) -> impl IntoView {
    view! {
        <Modal title=club.name subtitle=club.kind.label() on_close=on_close>
            <div class="details">
                <RemoteImage src=club.image_url alt=club.name class="details__banner" />
                <div class="details__meta">
                    <Badge variant="primary">{club.kind.label()}</Badge>
                    <span class="details__muted">{icon("star")}{format!("{} / 5", format_rating(club.rating))}</span>
                    <span class="details__muted">{icon("users")}{format!("{} members", club.members)}</span>
                </div>
                <p class="details__text">{club.description}</p>
                <dl class="details__facts">
                    <dt>{icon("calendar")}"Meets"</dt>
                    <dd>{club.schedule}</dd>
                    <dt>{icon("users")}"Advisor"</dt>
                    <dd>{club.advisor}</dd>
                </dl>
            </div>
        </Modal>
    }
}
