use crate::shared::catalog_state::CatalogController;
use crate::shared::components::card_animated::{stagger_delay, CardAnimated};
use crate::shared::components::catalog_grid::CatalogGrid;
use crate::shared::components::remote_image::RemoteImage;
use crate::shared::components::ui::badge::Badge;
use crate::shared::icons::icon;
use crate::shared::list_utils::Highlight;
use contracts::domain::a008_club::aggregate::Club;
use contracts::shared::catalog::Choice;
use leptos::prelude::*;

/// Ratings always carry one decimal.
pub fn format_rating(rating: f32) -> String {
    format!("{:.1}", rating)
}

#[component]
pub fn ClubList(controller: CatalogController<Club>, on_open: Callback<&'static Club>) -> impl IntoView {
    let query = controller.search_text();

    view! {
        <CatalogGrid
            controller=controller
            empty_message="No clubs match your search."
            class="card-grid--3"
            card=move |club: &'static Club, index: usize| view! {
                <CardAnimated delay_ms=stagger_delay(index) class="club-card">
                    <button
                        type="button"
                        class="card-button"
                        on:click=move |_| on_open.run(club)
                    >
                        <RemoteImage src=club.image_url alt=club.name class="club-card__image" />
                        <div class="club-card__body">
                            <div class="club-card__meta">
                                <Badge variant="primary">{club.kind.label()}</Badge>
                                <span class="club-card__rating" title="Student rating">
                                    {icon("star")}{format_rating(club.rating)}
                                </span>
                            </div>
                            <h3 class="club-card__name">
                                <Highlight text=club.name query=query />
                            </h3>
                            <div class="club-card__schedule">{icon("calendar")}<span>{club.schedule}</span></div>
                            <div class="club-card__members">{icon("users")}<span>{format!("{} members", club.members)}</span></div>
                        </div>
                    </button>
                </CardAnimated>
            }.into_any()
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(4.7), "4.7");
        assert_eq!(format_rating(5.0), "5.0");
    }
}
