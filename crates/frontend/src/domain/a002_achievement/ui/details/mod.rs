use crate::domain::a002_achievement::ui::list::category_variant;
use crate::shared::components::remote_image::RemoteImage;
use crate::shared::components::ui::badge::Badge;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a002_achievement::aggregate::Achievement;
use contracts::shared::catalog::Choice;
use contracts::shared::date_utils::format_long_date;
use leptos::prelude::*;

#[component]
pub fn AchievementDetails(item: &'static Achievement, on_close: Callback<()>) -> impl IntoView {
    let participants = item
        .participants
        .iter()
        .map(|p| view! { <li>{icon("users")}<span>{*p}</span></li> })
        .collect_view();

    view! {
        <Modal title=item.title subtitle=item.award on_close=on_close>
            <div class="details">
                <RemoteImage src=item.image_url alt=item.title class="details__banner" />
                <div class="details__meta">
                    <Badge variant=category_variant(item.category)>{item.category.label()}</Badge>
                    <span class="details__muted">{icon("calendar")}{format_long_date(item.date)}</span>
                </div>
                <p class="details__text">{item.description}</p>
                <h4 class="details__heading">"Participants"</h4>
                <ul class="details__list details__list--icons">{participants}</ul>
            </div>
        </Modal>
    }
}
