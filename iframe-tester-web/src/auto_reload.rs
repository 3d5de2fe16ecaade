//! Periodic forced reload of the embedded frame

use dioxus::prelude::*;
use iframe_tester_common::{AutoReload, Transition, RELOAD_INTERVAL_MS};
use iframe_tester_ui::stores::{RendererState, RendererStateStoreExt};
use tracing::debug;

/// Running reload loop; dropping it cancels the task
pub struct ReloadTimer(Task);

impl Drop for ReloadTimer {
    fn drop(&mut self) {
        self.0.cancel();
    }
}

/// Bump `reload_key` every [`RELOAD_INTERVAL_MS`] while auto-reload is on.
///
/// The single timer is owned by an [`AutoReload`] and released on unmount.
pub fn use_auto_reload(state: Store<RendererState>) {
    let enabled = use_memo(move || state.config().read().auto_reload);
    let mut reloader: Signal<AutoReload<ReloadTimer>> = use_signal(AutoReload::new);

    use_effect(move || {
        let enabled = enabled();
        let transition = reloader.write().set_enabled(enabled, || {
            ReloadTimer(spawn(async move {
                loop {
                    sleep_ms(RELOAD_INTERVAL_MS).await;
                    let next = *state.reload_key().read() + 1;
                    state.reload_key().set(next);
                }
            }))
        });
        if transition != Transition::Unchanged {
            debug!("Auto-reload {:?}", transition);
        }
    });

    use_drop(move || {
        if let Ok(mut reloader) = reloader.try_write() {
            reloader.stop();
        }
    });
}

#[cfg(target_arch = "wasm32")]
async fn sleep_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep_ms(ms: u32) {
    tokio::time::sleep(std::time::Duration::from_millis(ms as u64)).await;
}
