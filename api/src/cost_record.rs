use serde::Deserialize;
use serde::Serialize;

use crate::cost_amount::CostAmount;
use crate::currency::Currency;

/// One line item of cloud spend: what a service cost on a given day.
///
/// Serializes as
/// `{ "date": "2025-01-15", "service": "Amazon EC2", "cost": 45.67, "currency": "USD" }`.
/// Records without a `currency` field deserialize as USD.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct CostRecord {
    /// Calendar date of the charge, as `YYYY-MM-DD` text.
    pub date: String,
    /// Provider service name, e.g. "Amazon EC2".
    pub service: String,
    /// Non-negative amount billed.
    pub cost: f64,
    /// Currency the provider billed `cost` in.
    #[serde(default)]
    pub currency: Currency,
}

impl CostRecord {
    /// A record billed in the default currency (USD).
    pub fn new(date: impl Into<String>, service: impl Into<String>, cost: f64) -> Self {
        Self {
            date: date.into(),
            service: service.into(),
            cost,
            currency: Currency::default(),
        }
    }

    pub fn with_currency(self, currency: Currency) -> Self {
        Self { currency, ..self }
    }

    /// The cost as an exact amount in the record's own currency, rounded to
    /// the cent.
    pub fn amount(&self) -> CostAmount {
        CostAmount::from_float(self.cost, self.currency)
    }
}
