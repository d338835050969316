use crate::domain::a007_payment_plan::ui::picker::PaymentPlanPicker;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::icons::icon;
use contracts::domain::a006_bus_route::aggregate::BusRoute;
use contracts::domain::a006_bus_route::data::BUS_ROUTES;
use contracts::domain::a007_payment_plan::aggregate::PaymentPlan;
use contracts::domain::a007_payment_plan::data::PAYMENT_PLANS;
use contracts::school::fees::{quote, FeeError, FeeQuote, FeeRequest};
use contracts::school::SCHOOL;
use leptos::prelude::*;

const MAX_SIBLINGS: u8 = 4;

/// `"3 installments of USD 4,000 (first USD 4,001)"`.
fn installments_summary(installments: &[u64]) -> String {
    match installments {
        [] => String::new(),
        [single] => format!("One payment of {}", SCHOOL.format_money(*single)),
        [first, rest @ ..] => {
            let regular = rest[0];
            if *first == regular {
                format!("{} installments of {}", installments.len(), SCHOOL.format_money(regular))
            } else {
                format!(
                    "{} installments of {} (first {})",
                    installments.len(),
                    SCHOOL.format_money(regular),
                    SCHOOL.format_money(*first)
                )
            }
        }
    }
}

fn breakdown(q: &FeeQuote) -> impl IntoView {
    let discount_row = |label: &'static str, amount: u64| {
        (amount > 0).then(|| view! {
            <tr class="fee-breakdown__discount">
                <td>{label}</td>
                <td class="num">{format!("-{}", SCHOOL.format_money(amount))}</td>
            </tr>
        })
    };

    view! {
        <table class="fee-breakdown">
            <tbody>
                <tr>
                    <td>{format!("Tuition, {}", q.band_label)}</td>
                    <td class="num">{SCHOOL.format_money(q.annual_tuition)}</td>
                </tr>
                {discount_row("Sibling discount", q.sibling_discount)}
                {discount_row("Payment plan discount", q.plan_discount)}
                <tr>
                    <td>"Registration fee"</td>
                    <td class="num">{SCHOOL.format_money(q.registration_fee)}</td>
                </tr>
                {(q.transport > 0).then(|| view! {
                    <tr>
                        <td>"School transport"</td>
                        <td class="num">{SCHOOL.format_money(q.transport)}</td>
                    </tr>
                })}
            </tbody>
            <tfoot>
                <tr class="fee-breakdown__total">
                    <td>"First-year total"</td>
                    <td class="num">{SCHOOL.format_money(q.total)}</td>
                </tr>
                {(q.total_discount() > 0).then(|| view! {
                    <tr>
                        <td colspan="2" class="details__muted">
                            {format!("Discounts applied: {}", SCHOOL.format_money(q.total_discount()))}
                        </td>
                    </tr>
                })}
                <tr>
                    <td colspan="2" class="details__muted">{installments_summary(&q.installments)}</td>
                </tr>
            </tfoot>
        </table>
    }
}

/// Estimates first-year fees from the configured fee bands.
#[component]
pub fn FeeCalculator() -> impl IntoView {
    let Some(default_plan) = PAYMENT_PLANS.first() else {
        log::warn!("fee calculator: no payment plans configured");
        return ().into_any();
    };

    let grade = RwSignal::new(SCHOOL.grades.first().copied().unwrap_or_default());
    let plan = RwSignal::<&'static PaymentPlan>::new(default_plan);
    let siblings = RwSignal::new(0u8);
    let bus_route = RwSignal::<Option<&'static BusRoute>>::new(None);

    let result = Memo::new(move |_| {
        let req = FeeRequest {
            grade: grade.get(),
            plan: plan.get(),
            siblings: siblings.get(),
            bus_route: bus_route.get(),
        };
        let result = quote(&SCHOOL, &req);
        if let Err(err) = &result {
            log::warn!("fee calculator: {}", err);
        }
        result
    });

    let grade_options = SCHOOL
        .grades
        .iter()
        .map(|g| view! { <option value=g.to_string()>{format!("Grade {}", g)}</option> })
        .collect_view();
    let sibling_options = (0..=MAX_SIBLINGS)
        .map(|n| view! { <option value=n.to_string()>{n}</option> })
        .collect_view();
    let route_options = BUS_ROUTES
        .iter()
        .map(|r| view! {
            <option value=r.id>
                {format!("{} ({} / month)", r.name, SCHOOL.format_money(r.monthly_fee))}
            </option>
        })
        .collect_view();

    view! {
        <div class="fee-calculator">
            <CardAnimated class="fee-calculator__form">
                <label class="form__field">
                    <span class="form__label">"Entering grade"</span>
                    <select
                        prop:value=move || grade.get().to_string()
                        on:change=move |ev| {
                            if let Ok(g) = event_target_value(&ev).parse::<u8>() {
                                grade.set(g);
                            }
                        }
                    >
                        {grade_options}
                    </select>
                </label>
                <label class="form__field">
                    <span class="form__label">"Siblings already enrolled"</span>
                    <select
                        prop:value=move || siblings.get().to_string()
                        on:change=move |ev| {
                            siblings.set(event_target_value(&ev).parse::<u8>().unwrap_or(0));
                        }
                    >
                        {sibling_options}
                    </select>
                </label>
                <label class="form__field">
                    <span class="form__label">"School transport"</span>
                    <select
                        prop:value=move || bus_route.get().map(|r| r.id).unwrap_or("")
                        on:change=move |ev| {
                            let id = event_target_value(&ev);
                            bus_route.set(BUS_ROUTES.iter().find(|r| r.id == id));
                        }
                    >
                        <option value="">"No transport"</option>
                        {route_options}
                    </select>
                </label>
                <PaymentPlanPicker selected=plan />
            </CardAnimated>
            <CardAnimated delay_ms=60 class="fee-calculator__result">
                <h3 class="fee-calculator__title">{icon("calculator")}"Your estimate"</h3>
                {move || match result.get() {
                    Ok(q) => breakdown(&q).into_any(),
                    Err(err) => view! {
                        <p class="fee-calculator__error" role="alert">
                            {match err {
                                FeeError::GradeNotCovered(_) => format!(
                                    "{}. Please contact {} for a quote.",
                                    err, SCHOOL.admissions_email
                                ),
                                FeeError::InvalidPlan(_) => err.to_string(),
                            }}
                        </p>
                    }
                    .into_any(),
                }}
                <p class="details__muted">
                    "Estimates only. The admissions office confirms fees with every offer."
                </p>
            </CardAnimated>
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_installments_summary() {
        assert_eq!(installments_summary(&[9_570]), "One payment of USD 9,570");
        assert_eq!(
            installments_summary(&[3_000, 3_000, 3_000]),
            "3 installments of USD 3,000"
        );
        assert_eq!(
            installments_summary(&[3_001, 3_000, 3_000]),
            "3 installments of USD 3,000 (first USD 3,001)"
        );
        assert_eq!(installments_summary(&[]), "");
    }
}
