//! Tuition estimate shown by the admissions fee calculator.
//!
//! Pure arithmetic over [`SchoolConfig`] numbers: nothing is charged or stored.

use super::config::SchoolConfig;
use crate::domain::a006_bus_route::aggregate::BusRoute;
use crate::domain::a007_payment_plan::aggregate::PaymentPlan;
use thiserror::Error;

/// School months billed for transport.
pub const TRANSPORT_MONTHS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeeError {
    #[error("no fee band covers grade {0}")]
    GradeNotCovered(u8),
    #[error("payment plan '{0}' has no installments")]
    InvalidPlan(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct FeeRequest<'a> {
    pub grade: u8,
    pub plan: &'a PaymentPlan,
    /// Siblings already enrolled at the school.
    pub siblings: u8,
    pub bus_route: Option<&'a BusRoute>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeQuote {
    pub band_label: &'static str,
    pub annual_tuition: u64,
    pub sibling_discount: u64,
    pub plan_discount: u64,
    pub registration_fee: u64,
    pub transport: u64,
    pub total: u64,
    /// Sums to `total`; any remainder goes to the first installment.
    pub installments: Vec<u64>,
}

impl FeeQuote {
    pub fn total_discount(&self) -> u64 {
        self.sibling_discount + self.plan_discount
    }
}

pub fn quote(config: &SchoolConfig, req: &FeeRequest<'_>) -> Result<FeeQuote, FeeError> {
    let band = config
        .fee_band_for(req.grade)
        .ok_or(FeeError::GradeNotCovered(req.grade))?;
    if req.plan.installments == 0 {
        return Err(FeeError::InvalidPlan(req.plan.id));
    }

    let annual_tuition = band.annual_tuition;
    let sibling_percent = (u64::from(req.siblings) * u64::from(config.sibling_discount_percent))
        .min(u64::from(config.max_sibling_discount_percent));
    let sibling_discount = percent_of(annual_tuition, sibling_percent);

    let discounted = annual_tuition - sibling_discount;
    let plan_discount = percent_of(discounted, u64::from(req.plan.discount_percent));

    let transport = req
        .bus_route
        .map_or(0, |route| route.monthly_fee * TRANSPORT_MONTHS);

    let total = discounted - plan_discount + config.registration_fee + transport;

    Ok(FeeQuote {
        band_label: band.label,
        annual_tuition,
        sibling_discount,
        plan_discount,
        registration_fee: config.registration_fee,
        transport,
        total,
        installments: split_installments(total, req.plan.installments),
    })
}

fn percent_of(amount: u64, percent: u64) -> u64 {
    amount * percent.min(100) / 100
}

/// Splits `total` into `count` parts. `count` must be non-zero.
pub fn split_installments(total: u64, count: u8) -> Vec<u64> {
    let n = u64::from(count.max(1));
    let base = total / n;
    let remainder = total % n;
    (0..n)
        .map(|i| if i == 0 { base + remainder } else { base })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a006_bus_route::data::BUS_ROUTES;
    use crate::domain::a007_payment_plan::data::PAYMENT_PLANS;
    use crate::school::config::SCHOOL;

    fn plan(id: &str) -> &'static PaymentPlan {
        PAYMENT_PLANS.iter().find(|p| p.id == id).expect("plan")
    }

    #[test]
    fn test_annual_plan_single_installment() {
        let req = FeeRequest { grade: 7, plan: plan("annual"), siblings: 0, bus_route: None };
        let q = quote(&SCHOOL, &req).expect("quote");
        assert_eq!(q.annual_tuition, 9_600);
        // 5% upfront discount
        assert_eq!(q.plan_discount, 480);
        assert_eq!(q.total_discount(), 480);
        assert_eq!(q.total, 9_600 - 480 + 450);
        assert_eq!(q.installments, vec![q.total]);
    }

    #[test]
    fn test_siblings_and_transport() {
        let route = &BUS_ROUTES[0];
        let req = FeeRequest { grade: 11, plan: plan("termly"), siblings: 1, bus_route: Some(route) };
        let q = quote(&SCHOOL, &req).expect("quote");
        assert_eq!(q.sibling_discount, 1_290);
        assert_eq!(q.total_discount(), q.sibling_discount + q.plan_discount);
        assert_eq!(q.transport, route.monthly_fee * TRANSPORT_MONTHS);
        assert_eq!(q.installments.len(), 3);
        assert_eq!(q.installments.iter().sum::<u64>(), q.total);
    }

    #[test]
    fn test_sibling_discount_is_capped() {
        let req = FeeRequest { grade: 9, plan: plan("monthly"), siblings: 5, bus_route: None };
        let q = quote(&SCHOOL, &req).expect("quote");
        assert_eq!(q.sibling_discount, 11_400 * 25 / 100);
    }

    #[test]
    fn test_uncovered_grade_is_an_error() {
        let req = FeeRequest { grade: 3, plan: plan("annual"), siblings: 0, bus_route: None };
        assert_eq!(quote(&SCHOOL, &req), Err(FeeError::GradeNotCovered(3)));
    }

    #[test]
    fn test_zero_installment_plan_is_rejected() {
        let broken = PaymentPlan {
            id: "broken",
            name: "Broken",
            installments: 0,
            discount_percent: 0,
            description: "",
        };
        let req = FeeRequest { grade: 8, plan: &broken, siblings: 0, bus_route: None };
        assert_eq!(quote(&SCHOOL, &req), Err(FeeError::InvalidPlan("broken")));
    }

    #[test]
    fn test_split_installments_sums_to_total() {
        assert_eq!(split_installments(100, 3), vec![34, 33, 33]);
        assert_eq!(split_installments(0, 4), vec![0, 0, 0, 0]);
        for plan in PAYMENT_PLANS {
            let parts = split_installments(12_345, plan.installments);
            assert_eq!(parts.iter().sum::<u64>(), 12_345, "{}", plan.id);
        }
    }
}
