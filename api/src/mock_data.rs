//! Stand-in cost data used until the dashboard is wired to a real billing source.

use chrono::Days;
use chrono::NaiveDate;
use rand::Rng;

use crate::cost_amount::CostAmount;
use crate::cost_explorer::CostExplorerResponse;
use crate::cost_explorer::DateInterval;
use crate::cost_explorer::Group;
use crate::cost_explorer::MetricValue;
use crate::cost_explorer::ResultByTime;
use crate::cost_explorer::UNBLENDED_COST;
use crate::cost_record::CostRecord;
use crate::currency::Currency;

/// Services the generator bills for, one group each per day.
pub const MOCK_SERVICES: [&str; 10] = [
    "Amazon EC2",
    "Amazon RDS",
    "Amazon S3",
    "AWS Lambda",
    "Amazon CloudFront",
    "Amazon DynamoDB",
    "AWS Data Transfer",
    "Amazon ECS",
    "Amazon VPC",
    "Amazon Route 53",
];

/// Inclusive range of generated daily costs, in cents ($0.50 to $50.00).
pub const MOCK_COST_RANGE_CENTS: std::ops::RangeInclusive<i64> = 50..=5000;

/// The fixed records the cost dashboard shows, in display order.
pub fn dashboard_mock_records() -> Vec<CostRecord> {
    vec![
        CostRecord::new("2025-01-15", "Amazon EC2", 45.67),
        CostRecord::new("2025-01-15", "Amazon S3", 12.34),
        CostRecord::new("2025-01-15", "Amazon RDS", 89.12),
        CostRecord::new("2025-01-14", "Amazon EC2", 43.21),
        CostRecord::new("2025-01-14", "AWS Lambda", 2.15),
    ]
}

/// Builds a realistic-looking Cost Explorer response covering `days`
/// consecutive days that end on `end_date`, oldest first.
///
/// Every day carries one group per entry of [`MOCK_SERVICES`], costed
/// uniformly within [`MOCK_COST_RANGE_CENTS`] in USD.
pub fn generate_mock_cost_explorer_response<R: Rng>(
    days: u32,
    end_date: NaiveDate,
    rng: &mut R,
) -> CostExplorerResponse {
    let results_by_time = (0..days)
        .map(|i| {
            let date = end_date - Days::new(u64::from(days - i - 1));
            let next = date + Days::new(1);

            let groups = MOCK_SERVICES
                .iter()
                .map(|service| {
                    let cents = rng.gen_range(MOCK_COST_RANGE_CENTS);
                    let amount = CostAmount::from_minor(cents, Currency::USD);
                    Group {
                        keys: vec![service.to_string()],
                        metrics: [(
                            UNBLENDED_COST.to_string(),
                            MetricValue {
                                amount: amount.to_string(),
                                unit: Currency::USD.code().to_string(),
                            },
                        )]
                        .into_iter()
                        .collect(),
                    }
                })
                .collect();

            ResultByTime {
                time_period: DateInterval {
                    start: date.format("%Y-%m-%d").to_string(),
                    end: next.format("%Y-%m-%d").to_string(),
                },
                groups,
                total: Default::default(),
                estimated: false,
            }
        })
        .collect();

    CostExplorerResponse {
        results_by_time,
        dimension_value_attributes: Vec::new(),
    }
}

/// [`generate_mock_cost_explorer_response`] for the `days` ending today.
pub fn generate_mock_costs(days: u32) -> CostExplorerResponse {
    let today = chrono::Local::now().date_naive();
    generate_mock_cost_explorer_response(days, today, &mut rand::thread_rng())
}
