use super::aggregate::PaymentPlan;
use crate::shared::catalog::Catalog;

pub static PAYMENT_PLANS: &[PaymentPlan] = &[
    PaymentPlan {
        id: "annual",
        name: "Annual",
        installments: 1,
        discount_percent: 5,
        description: "One payment before the start of the school year.",
    },
    PaymentPlan {
        id: "termly",
        name: "Termly",
        installments: 3,
        discount_percent: 2,
        description: "Three payments, due before each term.",
    },
    PaymentPlan {
        id: "monthly",
        name: "Monthly",
        installments: 10,
        discount_percent: 0,
        description: "Ten payments from August to May.",
    },
];

pub fn payment_plan_catalog() -> Catalog<'static, PaymentPlan> {
    Catalog::new(PAYMENT_PLANS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::catalog::duplicate_ids;

    #[test]
    fn test_ids_unique() {
        assert!(duplicate_ids(PAYMENT_PLANS).is_empty(), "{:?}", duplicate_ids(PAYMENT_PLANS));
    }

    #[test]
    fn test_plans_are_valid() {
        for plan in PAYMENT_PLANS {
            assert!(plan.installments > 0, "{}", plan.id);
            assert!(plan.discount_percent <= 100);
        }
        assert!(payment_plan_catalog().find("termly").is_some());
    }
}
