use crate::domain::a005_course::ui::list::level_variant;
use crate::shared::components::remote_image::RemoteImage;
use crate::shared::components::ui::badge::Badge;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a001_staff_member::data::staff_catalog;
use contracts::domain::a005_course::aggregate::Course;
use contracts::shared::catalog::Choice;
use leptos::prelude::*;

#[component]
pub fn CourseDetails(course: &'static Course, on_close: Callback<()>) -> impl IntoView {
    let teacher = staff_catalog().find(course.teacher_id);
    if teacher.is_none() {
        log::warn!("course {} references unknown teacher {}", course.id, course.teacher_id);
    }

    view! {
        <Modal title=course.title subtitle=course.subject_area on_close=on_close>
            <div class="details">
                <div class="details__meta">
                    <Badge variant=level_variant(course.level)>{course.level.label()}</Badge>
                    <span class="details__muted">{course.grades_label()}</span>
                    <span class="details__muted">
                        {icon("clock")}{format!("{} hours / week", course.weekly_hours)}
                    </span>
                </div>
                <p class="details__text">{course.description}</p>
                {teacher.map(|t| view! {
                    <h4 class="details__heading">"Taught by"</h4>
                    <div class="details__person">
                        <RemoteImage src=t.photo_url alt=t.name class="details__avatar" />
                        <div>
                            <div class="details__person-name">{t.name}</div>
                            <a href=format!("mailto:{}", t.email)>{t.email}</a>
                        </div>
                    </div>
                })}
            </div>
        </Modal>
    }
}
