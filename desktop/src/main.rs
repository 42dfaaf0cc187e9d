use dioxus::prelude::*;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus_logger::tracing::info!("starting CloudSaver cost dashboard (desktop)");
    dioxus::launch(CloudSaverDesktop);
}

#[component]
fn CloudSaverDesktop() -> Element {
    ui::App()
}
