//! Timer shims: the deferred cost load sleeps on tokio natively and on the
//! browser's timer queue in wasm builds.

#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use std::time::Duration;

    /// Sleeps on the browser's timer queue (`setTimeout`).
    pub async fn sleep(duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use std::time::Duration;

    /// Sleeps on the tokio timer, which tests drive with a paused clock.
    pub async fn sleep(duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
