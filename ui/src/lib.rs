// The client-side Dioxus application logic.

use dioxus::prelude::*;

pub mod compat;
mod components;
pub mod hooks;
mod screens;

use api::prefs::dashboard_prefs::DashboardPrefs;
use components::pico::Container;
use screens::cost_dashboard::CostDashboard;

/// Pico.css, served from its CDN so the bundle carries no stylesheet asset.
const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let dashboard_css = r#"
    * { box-sizing: border-box; }

    .cost-dashboard h1 {
        margin-top: 2rem;
        margin-bottom: 2rem;
    }

    /* Cost tables are wide on small screens; scroll inside the card. */
    .cost-dashboard article {
        overflow-x: auto;
        padding: 0;
    }

    .cost-table th {
        font-size: 0.75rem;
        text-transform: uppercase;
        letter-spacing: 0.05em;
        color: var(--pico-muted-color);
    }

    .cost-table td {
        white-space: nowrap;
    }

    .cost-table tbody tr:hover td {
        background-color: var(--pico-card-sectioning-background-color);
    }
"#;

    let prefs = use_context_provider(DashboardPrefs::from_env);
    use_hook(|| dioxus_logger::tracing::info!("prefs: {:#?}", prefs));

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: PICO_CSS,
        }
        style {
            "{dashboard_css}"
        }
        Container {
            CostDashboard {}
        }
    }
}

#[cfg(test)]
pub(crate) mod test_util {
    use std::time::Duration;

    use dioxus::prelude::VirtualDom;

    /// Drives `dom` for `duration` of (paused) tokio time, applying every
    /// render it schedules along the way.
    pub async fn run_for(dom: &mut VirtualDom, duration: Duration) {
        let _ = tokio::time::timeout(duration, async {
            loop {
                dom.wait_for_work().await;
                dom.render_immediate_to_vec();
            }
        })
        .await;
    }

    /// Text content of every element carrying `class="{class}"`, in document order.
    pub fn cell_texts(html: &str, class: &str) -> Vec<String> {
        let marker = format!("class=\"{class}\"");
        html.match_indices(&marker)
            .filter_map(|(at, _)| {
                let rest = &html[at..];
                let start = rest.find('>')? + 1;
                let end = rest[start..].find('<')? + start;
                Some(rest[start..end].to_string())
            })
            .collect()
    }
}
