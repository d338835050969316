use crate::domain::a002_achievement::ui::details::AchievementDetails;
use crate::domain::a002_achievement::ui::list::AchievementList;
use crate::domain::a008_club::ui::details::ClubDetails;
use crate::domain::a008_club::ui::list::ClubList;
use crate::shared::catalog_state::{CatalogController, DetailState};
use crate::shared::components::catalog_toolbar::CatalogToolbar;
use crate::shared::components::page_header::PageHeader;
use crate::shared::head::PageHead;
use contracts::domain::a002_achievement::aggregate::{Achievement, AchievementSort};
use contracts::domain::a002_achievement::data::achievement_catalog;
use contracts::domain::a008_club::aggregate::Club;
use contracts::domain::a008_club::data::club_catalog;
use contracts::shared::catalog::QueryFor;
use contracts::site::routes::PageKey;
use leptos::prelude::*;

#[component]
pub fn StudentLifePage() -> impl IntoView {
    let clubs = CatalogController::new(club_catalog());
    let achievements = CatalogController::with_query(
        achievement_catalog(),
        QueryFor::<Achievement>::default().with_sort(Some(AchievementSort::MostRecent)),
    );

    // Two catalogs share the page; opening one overlay closes the other.
    let club_details = DetailState::<Club>::new();
    let achievement_details = DetailState::<Achievement>::new();
    let open_club = Callback::new(move |club: &'static Club| {
        achievement_details.close();
        club_details.open(club);
    });
    let open_achievement = Callback::new(move |item: &'static Achievement| {
        club_details.close();
        achievement_details.open(item);
    });

    view! {
        <PageHead page=PageKey::StudentLife />
        <section class="page">
            <PageHeader
                eyebrow="Learning"
                title="Student life"
                subtitle="Clubs, teams and service projects run every afternoon of the week."
            />
            <h2 class="section-title" id="clubs">"Clubs & activities"</h2>
            <CatalogToolbar
                controller=clubs
                search_placeholder="Search clubs or advisors"
                all_label="All clubs"
            />
            <ClubList controller=clubs on_open=open_club />

            <h2 class="section-title" id="achievements">"Achievements"</h2>
            <CatalogToolbar
                controller=achievements
                search_placeholder="Search achievements or students"
                all_label="All categories"
            />
            <AchievementList controller=achievements on_open=open_achievement />
        </section>
        {move || club_details.current().map(|club| view! {
            <ClubDetails club=club on_close=club_details.on_close() />
        })}
        {move || achievement_details.current().map(|item| view! {
            <AchievementDetails item=item on_close=achievement_details.on_close() />
        })}
    }
}
