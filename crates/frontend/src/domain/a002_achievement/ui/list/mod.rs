use crate::shared::catalog_state::CatalogController;
use crate::shared::components::card_animated::{stagger_delay, CardAnimated};
use crate::shared::components::catalog_grid::CatalogGrid;
use crate::shared::components::remote_image::RemoteImage;
use crate::shared::components::ui::badge::Badge;
use crate::shared::list_utils::Highlight;
use contracts::domain::a002_achievement::aggregate::{Achievement, AchievementCategory};
use contracts::shared::catalog::Choice;
use contracts::shared::date_utils::format_month_year;
use leptos::prelude::*;

pub fn category_variant(category: AchievementCategory) -> &'static str {
    match category {
        AchievementCategory::Academic => "primary",
        AchievementCategory::Sports => "success",
        AchievementCategory::Arts => "accent",
        AchievementCategory::Community => "warning",
    }
}

#[component]
pub fn AchievementList(
    controller: CatalogController<Achievement>,
    on_open: Callback<&'static Achievement>,
) -> impl IntoView {
    let query = controller.search_text();

    view! {
        <CatalogGrid
            controller=controller
            empty_message="No achievements match your search."
            class="card-grid--3"
            card=move |item: &'static Achievement, index: usize| view! {
                <CardAnimated delay_ms=stagger_delay(index) class="achievement-card">
                    <button
                        type="button"
                        class="card-button"
                        on:click=move |_| on_open.run(item)
                    >
                        <RemoteImage src=item.image_url alt=item.title class="achievement-card__image" />
                        <div class="achievement-card__body">
                            <div class="achievement-card__meta">
                                <Badge variant=category_variant(item.category)>{item.category.label()}</Badge>
                                <span class="details__muted">{format_month_year(item.date)}</span>
                            </div>
                            <h3 class="achievement-card__title">
                                <Highlight text=item.title query=query />
                            </h3>
                            <div class="achievement-card__award">{item.award}</div>
                        </div>
                    </button>
                </CardAnimated>
            }.into_any()
        />
    }
}
