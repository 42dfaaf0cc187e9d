pub mod dashboard_prefs;
