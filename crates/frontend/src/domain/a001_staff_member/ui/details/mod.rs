use crate::shared::components::remote_image::RemoteImage;
use crate::shared::components::ui::badge::Badge;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a001_staff_member::aggregate::StaffMember;
use contracts::school::SCHOOL;
use contracts::shared::catalog::Choice;
use leptos::prelude::*;

fn tenure_label(years: u8) -> String {
    match years {
        0 => "Joined this year".to_string(),
        1 => format!("1 year at {}", SCHOOL.short_name),
        n => format!("{} years at {}", n, SCHOOL.short_name),
    }
}

#[component]
pub fn StaffDetails(member: &'static StaffMember, on_close: Callback<()>) -> impl IntoView {
    let subjects = member
        .subjects
        .iter()
        .map(|s| view! { <Badge>{*s}</Badge> })
        .collect_view();
    let qualifications = member
        .qualifications
        .iter()
        .map(|q| view! { <li>{*q}</li> })
        .collect_view();

    view! {
        <Modal title=member.name subtitle=member.role on_close=on_close>
            <div class="details details--person">
                <RemoteImage src=member.photo_url alt=member.name class="details__photo" />
                <div class="details__main">
                    <div class="details__meta">
                        <Badge variant="primary">{member.department.label()}</Badge>
                        <span class="details__muted">{tenure_label(member.years_at_school)}</span>
                    </div>
                    <p class="details__text">{member.bio}</p>
                    <dl class="details__facts">
                        <dt>{icon("mail")}"Email"</dt>
                        <dd><a class="staff-email" href=format!("mailto:{}", member.email)>{member.email}</a></dd>
                        <dt>{icon("phone")}"Phone"</dt>
                        <dd><a href=format!("tel:{}", member.phone)>{member.phone}</a></dd>
                    </dl>
                    {(!member.subjects.is_empty()).then(|| view! {
                        <h4 class="details__heading">"Teaches"</h4>
                        <div class="details__tags">{subjects}</div>
                    })}
                    <h4 class="details__heading">"Qualifications"</h4>
                    <ul class="details__list">{qualifications}</ul>
                </div>
            </div>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tenure_label() {
        assert_eq!(tenure_label(0), "Joined this year");
        assert_eq!(tenure_label(1), "1 year at Northbridge");
        assert_eq!(tenure_label(19), "19 years at Northbridge");
    }
}
