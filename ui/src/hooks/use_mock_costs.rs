//=============================================================================
// File: src/hooks/use_mock_costs.rs
//=============================================================================

use std::time::Duration;

use api::mock_data::dashboard_mock_records;
use api::CostRecord;
use dioxus::core::spawn_forever;
use dioxus::prelude::*;

use crate::compat;

/// Component-local state of the simulated cost fetch.
#[derive(Clone, Copy, PartialEq)]
pub struct MockCosts {
    records: Signal<Vec<CostRecord>>,
    is_loading: Signal<bool>,
}

impl MockCosts {
    /// The loaded records, in display order. Empty while loading.
    /// Read it from a component to subscribe to the load.
    pub fn records(&self) -> Signal<Vec<CostRecord>> {
        self.records
    }

    pub fn is_loading(&self) -> bool {
        (self.is_loading)()
    }
}

/// Stands in for a network fetch: on mount, waits `delay` and then fills
/// in the dashboard's mock records.
pub fn use_mock_costs(delay: Duration) -> MockCosts {
    use_deferred_costs(delay, dashboard_mock_records)
}

/// Waits `delay` after mount, then runs `load` and publishes its records.
///
/// The load is spawned on the root scope, so it outlives the calling
/// component unless cancelled; the `use_drop` handler cancels it on unmount,
/// so `load` never runs for a dashboard torn down early.
pub fn use_deferred_costs(
    delay: Duration,
    load: impl FnOnce() -> Vec<CostRecord> + 'static,
) -> MockCosts {
    let mut records = use_signal(Vec::<CostRecord>::new);
    let mut is_loading = use_signal(|| true);

    let task = use_hook(move || {
        dioxus_logger::tracing::debug!("scheduling cost load in {:?}", delay);
        spawn_forever(async move {
            compat::sleep(delay).await;
            let loaded = load();
            dioxus_logger::tracing::info!("loaded {} cost records", loaded.len());
            records.set(loaded);
            is_loading.set(false);
        })
    });

    use_drop(move || {
        dioxus_logger::tracing::debug!("cost loader unmounted, cancelling pending load");
        task.cancel();
    });

    MockCosts {
        records,
        is_loading,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::run_for;
    use std::cell::Cell;
    use std::rc::Rc;

    #[component]
    fn Loader() -> Element {
        let costs = use_mock_costs(Duration::from_millis(500));
        rsx! {
            p {
                if costs.is_loading() {
                    "loading"
                } else {
                    "{costs.records().read().len()} records"
                }
            }
        }
    }

    #[component]
    fn TrackedLoader(loaded: Rc<Cell<bool>>) -> Element {
        let costs = use_deferred_costs(Duration::from_millis(500), move || {
            loaded.set(true);
            dashboard_mock_records()
        });
        rsx! {
            p {
                if costs.is_loading() {
                    "loading"
                } else {
                    "{costs.records().read().len()} records"
                }
            }
        }
    }

    #[component]
    fn UnmountEarly(loaded: Rc<Cell<bool>>) -> Element {
        let mut show = use_signal(|| true);
        use_hook(move || {
            spawn(async move {
                compat::sleep(Duration::from_millis(100)).await;
                show.set(false);
            })
        });

        rsx! {
            if show() {
                TrackedLoader { loaded }
            } else {
                p { "unmounted" }
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn fills_records_once_delay_elapses() {
        let mut dom = VirtualDom::new(Loader);
        dom.rebuild_in_place();
        assert!(dioxus_ssr::render(&dom).contains("loading"));

        run_for(&mut dom, Duration::from_millis(600)).await;
        assert!(dioxus_ssr::render(&dom).contains("5 records"));
    }

    #[tokio::test(start_paused = true)]
    async fn runs_the_loader_when_left_mounted() {
        let loaded = Rc::new(Cell::new(false));
        let mut dom = VirtualDom::new_with_props(
            TrackedLoader,
            TrackedLoaderProps {
                loaded: loaded.clone(),
            },
        );
        dom.rebuild_in_place();

        run_for(&mut dom, Duration::from_millis(600)).await;
        assert!(loaded.get());
        assert!(dioxus_ssr::render(&dom).contains("5 records"));
    }

    #[tokio::test(start_paused = true)]
    async fn unmounting_before_delay_cancels_the_load() {
        let loaded = Rc::new(Cell::new(false));
        let mut dom = VirtualDom::new_with_props(
            UnmountEarly,
            UnmountEarlyProps {
                loaded: loaded.clone(),
            },
        );
        dom.rebuild_in_place();
        assert!(dioxus_ssr::render(&dom).contains("loading"));

        // The load task lives on the root scope, so only the unmount
        // cancellation keeps it from running.
        run_for(&mut dom, Duration::from_millis(2000)).await;
        assert!(!loaded.get());
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("unmounted"));
        assert!(!html.contains("records"));
    }
}
