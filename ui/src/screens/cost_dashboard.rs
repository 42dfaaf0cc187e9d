//=============================================================================
// File: src/screens/cost_dashboard.rs
//=============================================================================
use api::prefs::dashboard_prefs::DashboardPrefs;
use dioxus::prelude::*;

use crate::components::cost_table::CostTable;
use crate::components::pico::Card;
use crate::components::pico::Loading;
use crate::components::pico::Notice;
use crate::hooks::use_mock_costs::use_mock_costs;

#[component]
pub fn CostDashboard() -> Element {
    let prefs = use_hook(|| try_consume_context::<DashboardPrefs>().unwrap_or_default());
    let costs = use_mock_costs(prefs.load_delay());

    if costs.is_loading() {
        return rsx! {
            Loading { "Loading..." }
        };
    }

    let records = costs.records();

    rsx! {
        section {
            class: "cost-dashboard",
            h1 { "AWS Cost Dashboard" }
            Card {
                CostTable { records: records.read().clone() }
            }
            Notice { "📊 Showing mock data. Next week we'll connect to real AWS API!" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::cell_texts;
    use crate::test_util::run_for;
    use std::time::Duration;

    fn mount(prefs: DashboardPrefs) -> VirtualDom {
        #[component]
        fn Harness(prefs: DashboardPrefs) -> Element {
            use_context_provider(|| prefs);
            rsx! { CostDashboard {} }
        }

        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { prefs });
        dom.rebuild_in_place();
        dom
    }

    fn default_delay() -> DashboardPrefs {
        DashboardPrefs::new(Duration::from_millis(500))
    }

    #[tokio::test(start_paused = true)]
    async fn shows_only_loading_indicator_on_mount() {
        let dom = mount(default_delay());
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("Loading..."));
        assert!(!html.contains("<table"));
        assert!(!html.contains("Showing mock data"));
    }

    #[tokio::test(start_paused = true)]
    async fn swaps_to_table_exactly_at_delay() {
        let mut dom = mount(default_delay());

        run_for(&mut dom, Duration::from_millis(499)).await;
        assert!(dioxus_ssr::render(&dom).contains("Loading..."));

        run_for(&mut dom, Duration::from_millis(1)).await;
        let html = dioxus_ssr::render(&dom);
        assert!(!html.contains("Loading..."));
        assert!(html.contains("AWS Cost Dashboard"));
        assert_eq!(cell_texts(&html, "service").len(), 5);
        assert!(html.contains("Showing mock data"));
    }

    #[tokio::test(start_paused = true)]
    async fn renders_records_in_literal_order_with_formatted_costs() {
        let mut dom = mount(default_delay());
        run_for(&mut dom, Duration::from_millis(600)).await;
        let html = dioxus_ssr::render(&dom);

        assert_eq!(
            cell_texts(&html, "service"),
            ["Amazon EC2", "Amazon S3", "Amazon RDS", "Amazon EC2", "AWS Lambda"]
        );
        assert_eq!(
            cell_texts(&html, "cost"),
            ["$45.67", "$12.34", "$89.12", "$43.21", "$2.15"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn notice_follows_the_table() {
        let mut dom = mount(default_delay());
        run_for(&mut dom, Duration::from_millis(600)).await;
        let html = dioxus_ssr::render(&dom);

        let table_end = html.find("</table>").unwrap();
        let notice = html.find("Showing mock data").unwrap();
        assert!(table_end < notice);
    }

    #[tokio::test(start_paused = true)]
    async fn honours_configured_delay() {
        let mut dom = mount(DashboardPrefs::new(Duration::from_millis(50)));
        run_for(&mut dom, Duration::from_millis(60)).await;
        let html = dioxus_ssr::render(&dom);

        assert_eq!(cell_texts(&html, "cost")[0], "$45.67");
    }

    #[tokio::test(start_paused = true)]
    async fn falls_back_to_fixed_delay_without_prefs() {
        let mut dom = VirtualDom::new(CostDashboard);
        dom.rebuild_in_place();

        run_for(&mut dom, Duration::from_millis(499)).await;
        assert!(dioxus_ssr::render(&dom).contains("Loading..."));

        run_for(&mut dom, Duration::from_millis(1)).await;
        assert_eq!(cell_texts(&dioxus_ssr::render(&dom), "service").len(), 5);
    }
}
