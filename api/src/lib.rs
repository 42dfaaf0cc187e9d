//! This crate contains the cost data model shared by every CloudSaver front end,
//! along with the mock data and billing-export parsing the dashboard runs on
//! until it is connected to a live billing source.

pub mod cost_amount;
pub mod cost_explorer;
pub mod cost_record;
pub mod currency;
pub mod mock_data;
pub mod prefs;

pub use cost_record::CostRecord;
