//! Platform sleep used by spawned UI tasks

use std::time::Duration;

/// Sleep on whatever timer the current target provides
pub async fn sleep(duration: Duration) {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    gloo_timers::future::sleep(duration).await;

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;

    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    let _ = duration;
}
