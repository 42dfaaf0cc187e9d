//! The components module contains all shared components for our app. Components are the building blocks of dioxus apps.
//! They can be used to defined common UI elements like tables, banners, and loading indicators.
pub mod cost_table;
pub mod pico;
