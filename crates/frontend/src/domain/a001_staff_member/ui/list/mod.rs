use crate::shared::catalog_state::CatalogController;
use crate::shared::components::card_animated::{stagger_delay, CardAnimated};
use crate::shared::components::catalog_grid::CatalogGrid;
use crate::shared::components::remote_image::RemoteImage;
use crate::shared::components::ui::badge::Badge;
use crate::shared::list_utils::Highlight;
use contracts::domain::a001_staff_member::aggregate::StaffMember;
use contracts::shared::catalog::Choice;
use leptos::prelude::*;

#[component]
pub fn StaffCard(
    member: &'static StaffMember,
    #[prop(into)]
    query: Signal<String>,
    on_open: Callback<&'static StaffMember>,
    #[prop(optional)]
    delay_ms: u32,
) -> impl IntoView {
    view! {
        <CardAnimated delay_ms=delay_ms class="staff-card">
            <button
                type="button"
                class="card-button"
                aria-label=format!("Show details for {}", member.name)
                on:click=move |_| on_open.run(member)
            >
                <RemoteImage src=member.photo_url alt=member.name class="staff-card__photo" />
                <div class="staff-card__body">
                    <h3 class="staff-card__name">
                        <Highlight text=member.name query=query />
                    </h3>
                    <div class="staff-card__role">
                        <Highlight text=member.role query=query />
                    </div>
                    <Badge variant="primary">{member.department.label()}</Badge>
                    <div class="staff-card__subjects">{member.subjects.join(" · ")}</div>
                </div>
            </button>
        </CardAnimated>
    }
}

#[component]
pub fn StaffList(
    controller: CatalogController<StaffMember>,
    on_open: Callback<&'static StaffMember>,
) -> impl IntoView {
    let query = controller.search_text();

    view! {
        <CatalogGrid
            controller=controller
            empty_message="No staff members match your search."
            class="card-grid--4"
            card=move |member: &'static StaffMember, index: usize| view! {
                <StaffCard
                    member=member
                    query=query
                    on_open=on_open
                    delay_ms=stagger_delay(index)
                />
            }.into_any()
        />
    }
}
