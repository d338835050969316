use contracts::domain::a007_payment_plan::aggregate::PaymentPlan;
use contracts::domain::a007_payment_plan::data::PAYMENT_PLANS;
use leptos::prelude::*;

fn plan_hint(plan: &PaymentPlan) -> String {
    match (plan.installments, plan.discount_percent) {
        (1, 0) => "Single payment".to_string(),
        (1, d) => format!("Single payment, {}% off tuition", d),
        (n, 0) => format!("{} payments", n),
        (n, d) => format!("{} payments, {}% off tuition", n, d),
    }
}

/// Radio group over the payment plans.
#[component]
pub fn PaymentPlanPicker(selected: RwSignal<&'static PaymentPlan>) -> impl IntoView {
    let options = PAYMENT_PLANS
        .iter()
        .map(|plan| {
            let is_checked = move || selected.with(|s| s.id == plan.id);
            view! {
                <label class="plan-option" class:plan-option-selected=is_checked>
                    <input
                        type="radio"
                        name="payment-plan"
                        value=plan.id
                        prop:checked=is_checked
                        on:change=move |_| selected.set(plan)
                    />
                    <span class="plan-option__name">{plan.name}</span>
                    <span class="plan-option__hint">{plan_hint(plan)}</span>
                    <span class="plan-option__description">{plan.description}</span>
                </label>
            }
        })
        .collect_view();

    view! {
        <fieldset class="plan-picker">
            <legend>"Payment plan"</legend>
            {options}
        </fieldset>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_hint() {
        let plan = |installments, discount_percent| PaymentPlan {
            id: "x",
            name: "x",
            installments,
            discount_percent,
            description: "",
        };
        assert_eq!(plan_hint(&plan(1, 5)), "Single payment, 5% off tuition");
        assert_eq!(plan_hint(&plan(10, 0)), "10 payments");
        assert_eq!(plan_hint(&plan(3, 2)), "3 payments, 2% off tuition");
    }
}
