//! Page furniture for the cost dashboard: the page container, the card the
//! cost table sits in, the mock-data banner and the busy indicator.
//!
//! Styling leans on Pico.css classes and variables; `App` links the sheet.

#![allow(non_snake_case)]

use dioxus::prelude::*;

/// The centered page column (`<main class="container">`).
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

/// Pico card (`<article>`); the dashboard puts its table in one.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

/// An informational banner, tinted with the primary color.
#[component]
pub fn Notice(children: Element) -> Element {
    rsx! {
        div {
            class: "notice",
            role: "note",
            style: "
                margin-top: 1.5rem;
                padding: 1rem;
                border: 1px solid color-mix(in srgb, var(--pico-primary), transparent 70%);
                border-radius: var(--pico-border-radius);
                background-color: color-mix(in srgb, var(--pico-primary), transparent 92%);
            ",
            p {
                style: "margin: 0; font-size: 0.875rem;",
                {children}
            }
        }
    }
}

/// Pico's busy indicator: a spinner followed by the given text.
#[component]
pub fn Loading(children: Element) -> Element {
    rsx! {
        div {
            style: "display: flex; align-items: center; justify-content: center; min-height: 100vh;",
            span {
                class: "loading",
                "aria-busy": "true",
                {children}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_marks_itself_busy() {
        let html = dioxus_ssr::render_element(rsx! { Loading { "Loading..." } });
        assert!(html.contains(r#"aria-busy="true""#), "{html}");
        assert!(html.contains(">Loading...</span>"), "{html}");
    }

    #[test]
    fn card_in_container_nests_article_in_main() {
        let html = dioxus_ssr::render_element(rsx! {
            Container { Card { Notice { "mock" } } }
        });
        let main = html.find(r#"<main class="container">"#).unwrap();
        let article = html.find("<article>").unwrap();
        let note = html.find(r#"role="note""#).unwrap();
        assert!(main < article && article < note, "{html}");
    }
}
