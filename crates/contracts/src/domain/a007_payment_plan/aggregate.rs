use crate::shared::catalog::Record;

/// How a family spreads tuition over the school year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentPlan {
    pub id: &'static str,
    pub name: &'static str,
    pub installments: u8,
    pub discount_percent: u8,
    pub description: &'static str,
}

impl Record for PaymentPlan {
    fn id(&self) -> &str {
        self.id
    }
}
