//! A serde model of AWS Cost Explorer `GetCostAndUsage` responses, and the
//! conversion of such a response into dashboard [`CostRecord`]s.
//!
//! Only the shape produced by a daily query grouped by the `SERVICE`
//! dimension with the `UnblendedCost` metric is modelled. No network access
//! happens here; callers hand in a response they already have (a saved
//! export, or one built by [`crate::mock_data`]).

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::cost_amount::CostAmount;
use crate::cost_amount::ParseCostAmountError;
use crate::cost_record::CostRecord;
use crate::currency::Currency;

/// The metric the dashboard reports.
pub const UNBLENDED_COST: &str = "UnblendedCost";

/// Costs below this many cents are noise and are not reported.
pub const MIN_REPORTED_MINOR_UNITS: i64 = 1;

#[derive(Error, Debug)]
pub enum ParseCostError {
    #[error("malformed cost explorer response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("group on {date} has no service key")]
    MissingServiceKey { date: String },

    #[error("group {service} on {date} has no UnblendedCost metric")]
    MissingUnblendedCost { date: String, service: String },

    #[error("unsupported cost unit: {0}")]
    UnknownCurrency(String),

    #[error("invalid amount {amount:?} for {service} on {date}: {source}")]
    InvalidAmount {
        date: String,
        service: String,
        amount: String,
        #[source]
        source: ParseCostAmountError,
    },
}

/// Top level of a `GetCostAndUsage` response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CostExplorerResponse {
    #[serde(default)]
    pub results_by_time: Vec<ResultByTime>,
    #[serde(default)]
    pub dimension_value_attributes: Vec<serde_json::Value>,
}

/// Costs for one time period (one day, for daily granularity).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResultByTime {
    pub time_period: DateInterval,
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub total: BTreeMap<String, MetricValue>,
    #[serde(default)]
    pub estimated: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DateInterval {
    pub start: String,
    pub end: String,
}

/// Costs for one group within a period. With `SERVICE` grouping the single
/// key is the service name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Group {
    #[serde(default)]
    pub keys: Vec<String>,
    #[serde(default)]
    pub metrics: BTreeMap<String, MetricValue>,
}

/// A metric amount. Cost Explorer reports amounts as decimal strings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MetricValue {
    pub amount: String,
    pub unit: String,
}

impl CostExplorerResponse {
    pub fn from_json_str(json: &str) -> Result<Self, ParseCostError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Flattens a Cost Explorer response into one `CostRecord` per service and
/// day, in response order.
///
/// Each cost is rounded to the cent and keeps the currency of its `Unit`;
/// entries that round below one cent, or are negative, are skipped.
pub fn parse_cost_data(response: &CostExplorerResponse) -> Result<Vec<CostRecord>, ParseCostError> {
    let mut records = Vec::new();

    for period in &response.results_by_time {
        let date = &period.time_period.start;

        for group in &period.groups {
            let service = group
                .keys
                .first()
                .ok_or_else(|| ParseCostError::MissingServiceKey { date: date.clone() })?;

            let metric = group.metrics.get(UNBLENDED_COST).ok_or_else(|| {
                ParseCostError::MissingUnblendedCost {
                    date: date.clone(),
                    service: service.clone(),
                }
            })?;

            let currency = Currency::from_str(&metric.unit)
                .map_err(|_| ParseCostError::UnknownCurrency(metric.unit.clone()))?;

            let amount = match CostAmount::parse(&metric.amount, currency) {
                Ok(amount) => amount,
                // Credits and refunds come back negative; like sub-cent
                // charges they are below what the dashboard reports.
                Err(ParseCostAmountError::Negative) => {
                    dioxus_logger::tracing::debug!(
                        "skipping negative {} cost {} on {}",
                        service,
                        metric.amount,
                        date
                    );
                    continue;
                }
                Err(source) => {
                    return Err(ParseCostError::InvalidAmount {
                        date: date.clone(),
                        service: service.clone(),
                        amount: metric.amount.clone(),
                        source,
                    })
                }
            };

            if amount.as_minor_units() >= MIN_REPORTED_MINOR_UNITS {
                records.push(
                    CostRecord::new(date.clone(), service.clone(), amount.as_f64())
                        .with_currency(currency),
                );
            }
        }
    }

    Ok(records)
}
