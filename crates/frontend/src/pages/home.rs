use crate::shared::components::card_animated::{stagger_delay, CardAnimated};
use crate::shared::components::remote_image::RemoteImage;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::badge::Badge;
use crate::shared::head::PageHead;
use crate::shared::icons::icon;
use contracts::domain::a002_achievement::aggregate::{Achievement, AchievementSort};
use contracts::domain::a002_achievement::data::achievement_catalog;
use contracts::school::SCHOOL;
use contracts::shared::catalog::{Choice, QueryFor};
use contracts::shared::date_utils::format_month_year;
use contracts::site::routes::PageKey;
use leptos::prelude::*;
use leptos_router::components::A;

const HIGHLIGHTS_SHOWN: usize = 3;

struct Pillar {
    icon_name: &'static str,
    title: &'static str,
    text: &'static str,
    href: &'static str,
}

const PILLARS: &[Pillar] = &[
    Pillar {
        icon_name: "book",
        title: "Academic depth",
        text: "Small classes, specialist teachers and a senior diploma recognised by universities worldwide.",
        href: "/academics",
    },
    Pillar {
        icon_name: "users",
        title: "A full life outside class",
        text: "More than thirty clubs and teams, from robotics to rowing, every afternoon of the week.",
        href: "/student-life",
    },
    Pillar {
        icon_name: "handshake",
        title: "Connected to the city",
        text: "Partnerships with universities, employers and museums bring real projects into school.",
        href: "/partners",
    },
];

fn latest_achievements() -> Vec<&'static Achievement> {
    let query = QueryFor::<Achievement>::default().with_sort(Some(AchievementSort::MostRecent));
    achievement_catalog()
        .view(&query)
        .into_iter()
        .take(HIGHLIGHTS_SHOWN)
        .collect()
}

fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}

#[component]
pub fn HomePage() -> impl IntoView {
    let pillars = PILLARS
        .iter()
        .enumerate()
        .map(|(i, p)| view! {
            <CardAnimated delay_ms=stagger_delay(i) class="pillar-card">
                <div class="pillar-card__icon">{icon(p.icon_name)}</div>
                <h3>{p.title}</h3>
                <p>{p.text}</p>
                <A href=p.href>
                    <span class="link-arrow">"Learn more"{icon("arrow-right")}</span>
                </A>
            </CardAnimated>
        })
        .collect_view();

    let highlights = latest_achievements()
        .into_iter()
        .enumerate()
        .map(|(i, item)| view! {
            <CardAnimated delay_ms=stagger_delay(i) class="achievement-card">
                <RemoteImage src=item.image_url alt=item.title class="achievement-card__image" />
                <div class="achievement-card__body">
                    <div class="achievement-card__meta">
                        <Badge variant="primary">{item.category.label()}</Badge>
                        <span class="details__muted">{format_month_year(item.date)}</span>
                    </div>
                    <h3 class="achievement-card__title">{item.title}</h3>
                    <div class="achievement-card__award">{item.award}</div>
                </div>
            </CardAnimated>
        })
        .collect_view();

    view! {
        <PageHead page=PageKey::Home />
        <section class="hero">
            <div class="hero__content">
                <div class="hero__eyebrow">{format!("Grades 6-12 · Since {}", SCHOOL.founded)}</div>
                <h1 class="hero__title">{SCHOOL.name}</h1>
                <p class="hero__motto">{SCHOOL.motto}</p>
                <div class="hero__actions">
                    <A href="/admissions"><span class="button button--primary">"Apply now"</span></A>
                    <A href="/contact"><span class="button button--secondary">"Book a visit"</span></A>
                </div>
            </div>
        </section>
        <section class="page">
            <div class="stat-grid">
                <StatCard label="Students" value=SCHOOL.student_count.to_string() icon_name="users" />
                <StatCard label="Teachers" value=SCHOOL.teacher_count.to_string() icon_name="graduation-cap" />
                <StatCard
                    label="University placement"
                    value=format!("{}%", SCHOOL.university_placement_percent)
                    icon_name="award"
                />
                <StatCard
                    label="Years of teaching"
                    value=SCHOOL.years_open(current_year()).to_string()
                    icon_name="calendar"
                />
            </div>

            <h2 class="section-title">{format!("Why {}", SCHOOL.short_name)}</h2>
            <div class="card-grid card-grid--3">{pillars}</div>

            <div class="section-heading">
                <h2 class="section-title">"Recent achievements"</h2>
                <A href="/student-life">
                    <span class="link-arrow">"All achievements"{icon("arrow-right")}</span>
                </A>
            </div>
            <div class="card-grid card-grid--3">{highlights}</div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::date_utils::parse_iso_date;

    #[test]
    fn test_latest_achievements_newest_first() {
        let latest = latest_achievements();
        assert_eq!(latest.len(), HIGHLIGHTS_SHOWN);
        let dates: Vec<_> = latest.iter().map(|a| parse_iso_date(a.date)).collect();
        assert!(dates.windows(2).all(|w| w[0] >= w[1]));
    }
}
