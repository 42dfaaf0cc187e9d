use dioxus::prelude::*;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus_logger::tracing::info!("starting CloudSaver cost dashboard (mobile)");
    dioxus::launch(CloudSaverMobile);
}

#[component]
fn CloudSaverMobile() -> Element {
    ui::App()
}
