use crate::shared::icons::icon;
use contracts::school::SCHOOL;
use contracts::site::routes::{routes_in_group, NavGroup};
use leptos::prelude::*;
use leptos_router::components::A;

fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = current_year();

    let columns = NavGroup::all()
        .iter()
        .map(|&group| {
            let links = routes_in_group(group)
                .map(|route| view! { <li><A href=route.path>{route.label}</A></li> })
                .collect_view();
            view! {
                <div class="footer__column">
                    <h3 class="footer__heading">{group.label()}</h3>
                    <ul class="footer__links">{links}</ul>
                </div>
            }
        })
        .collect_view();

    let social = SCHOOL
        .social
        .iter()
        .map(|link| view! {
            <a class="footer__social" href=link.url target="_blank" rel="noopener noreferrer">
                {link.network}
            </a>
        })
        .collect_view();

    view! {
        <footer data-zone="footer" class="footer">
            <div class="footer__grid">
                <div class="footer__column footer__column--contact">
                    <h3 class="footer__heading">{SCHOOL.name}</h3>
                    <p class="footer__motto">{SCHOOL.motto}</p>
                    <p class="footer__line">{icon("map-pin")}<span>{SCHOOL.address}</span></p>
                    <p class="footer__line">
                        {icon("phone")}
                        <a href=format!("tel:{}", SCHOOL.phone)>{SCHOOL.phone}</a>
                    </p>
                    <p class="footer__line">
                        {icon("mail")}
                        <a href=format!("mailto:{}", SCHOOL.email)>{SCHOOL.email}</a>
                    </p>
                    <p class="footer__line">{icon("clock")}<span>{SCHOOL.office_hours}</span></p>
                </div>
                {columns}
            </div>
            <div class="footer__bottom">
                <span>{format!("© {} {}", year, SCHOOL.name)}</span>
                <span class="footer__social-list">{social}</span>
            </div>
        </footer>
    }
}
