use crate::shared::catalog_state::CatalogController;
use crate::shared::components::card_animated::{stagger_delay, CardAnimated};
use crate::shared::components::catalog_grid::CatalogGrid;
use crate::shared::components::ui::badge::Badge;
use crate::shared::icons::icon;
use crate::shared::list_utils::Highlight;
use contracts::domain::a005_course::aggregate::{Course, CourseLevel};
use contracts::shared::catalog::Choice;
use leptos::prelude::*;

pub fn level_variant(level: CourseLevel) -> &'static str {
    match level {
        CourseLevel::Foundation => "neutral",
        CourseLevel::Core => "primary",
        CourseLevel::Advanced => "warning",
        CourseLevel::Elective => "accent",
    }
}

#[component]
pub fn CourseList(
    controller: CatalogController<Course>,
    on_open: Callback<&'static Course>,
) -> impl IntoView {
    let query = controller.search_text();

    view! {
        <CatalogGrid
            controller=controller
            empty_message="No courses match your search."
            class="card-grid--3"
            card=move |course: &'static Course, index: usize| view! {
                <CardAnimated delay_ms=stagger_delay(index) class="course-card">
                    <button
                        type="button"
                        class="card-button"
                        on:click=move |_| on_open.run(course)
                    >
                        <div class="course-card__meta">
                            <Badge variant=level_variant(course.level)>{course.level.label()}</Badge>
                            <span class="details__muted">{course.grades_label()}</span>
                        </div>
                        <h3 class="course-card__title">
                            <Highlight text=course.title query=query />
                        </h3>
                        <div class="course-card__area">{course.subject_area}</div>
                        <div class="course-card__hours">
                            {icon("clock")}
                            <span>{format!("{} hours / week", course.weekly_hours)}</span>
                        </div>
                    </button>
                </CardAnimated>
            }.into_any()
        />
    }
}
