use std::env;
use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;

/// How long the dashboard pretends to wait for its data, unless overridden.
pub const DEFAULT_LOAD_DELAY_MS: u64 = 500;

/// Behaviour settings for the cost dashboard.
///
/// Costs are always shown in the currency they were billed in, so there is
/// no display-currency setting here.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct DashboardPrefs {
    /// Simulated fetch delay before the mock records appear.
    load_delay_ms: u64,
}

impl DashboardPrefs {
    pub fn new(load_delay: Duration) -> Self {
        Self {
            load_delay_ms: load_delay.as_millis() as u64,
        }
    }

    /// Builds prefs from environment variables, falling back to in-code
    /// defaults for anything unset or unparseable.
    ///
    /// # Environment Variables
    /// - `MOCK_LOAD_DELAY_MS`: simulated fetch delay in milliseconds.
    ///   defaults to 500
    ///
    /// wasm32 builds have no process environment, so they always get the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let load_delay_ms = match lookup("MOCK_LOAD_DELAY_MS") {
            Some(val) => val.trim().parse::<u64>().unwrap_or_else(|_| {
                dioxus_logger::tracing::warn!("ignoring malformed MOCK_LOAD_DELAY_MS {:?}", val);
                DEFAULT_LOAD_DELAY_MS
            }),
            None => DEFAULT_LOAD_DELAY_MS,
        };

        Self { load_delay_ms }
    }

    pub fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms)
    }
}

/// The fixed dashboard behaviour (500 ms). Never reads the environment; use
/// [`DashboardPrefs::from_env`] for that.
impl Default for DashboardPrefs {
    fn default() -> Self {
        Self {
            load_delay_ms: DEFAULT_LOAD_DELAY_MS,
        }
    }
}
