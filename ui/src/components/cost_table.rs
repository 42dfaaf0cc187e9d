//! A table of cost line items: one row per record, in the order given.

use api::CostRecord;
use dioxus::prelude::*;

#[component]
pub fn CostTable(records: Vec<CostRecord>) -> Element {
    rsx! {
        table {
            class: "cost-table",
            thead {
                tr {
                    th { scope: "col", "Date" }
                    th { scope: "col", "Service" }
                    th { scope: "col", "Cost" }
                }
            }
            tbody {
                for (index, record) in records.iter().enumerate() {
                    tr {
                        key: "{index}",
                        td { class: "date", "{record.date}" }
                        td { class: "service", "{record.service}" }
                        td {
                            class: "cost",
                            style: "font-weight: 500; color: var(--pico-ins-color);",
                            "{record.amount().to_display_string()}"
                        }
                    }
                }
            }
        }
    }
}
