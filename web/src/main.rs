use dioxus::prelude::*;

fn main() {
    // Surface Rust panics in the browser console instead of a bare "unreachable".
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus_logger::tracing::info!("starting CloudSaver cost dashboard (web)");
    dioxus::launch(CloudSaverWeb);
}

#[component]
fn CloudSaverWeb() -> Element {
    ui::App()
}
