//! Window `message` listener feeding the events sidebar

use dioxus::dioxus_core::{Runtime, RuntimeGuard};
use dioxus::prelude::*;
use iframe_tester_common::{capture_timestamp, Admission, MessageFilter, ReceivedMessage};
use iframe_tester_ui::stores::{RendererState, RendererStateStoreExt};
use iframe_tester_ui::wasm_utils::DomEventListener;
use serde_json::Value;
use tracing::debug;
use wasm_bindgen_x::{JsCast, JsValue};

/// Structured-clone payload as JSON. Values JSON can't express become `null`.
fn payload_to_json(data: &JsValue) -> Value {
    js_sys_x::JSON::stringify(data)
        .ok()
        .and_then(|s| s.as_string())
        .and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or(Value::Null)
}

/// The payload's string `type` field, read off the raw value so that
/// payloads JSON can't express are still recognized.
fn raw_payload_type(data: &JsValue) -> Option<String> {
    if !data.is_object() {
        return None;
    }
    js_sys_x::Reflect::get(data, &JsValue::from_str("type"))
        .ok()
        .and_then(|t| t.as_string())
}

/// Listen for cross-document messages for the lifetime of the component.
///
/// The listener is replaced whenever the origin filter or the target URL
/// changes, so admission always uses current values.
pub fn use_message_capture(state: Store<RendererState>) {
    let target_url = use_memo(move || state.config().read().url.clone());
    let mut listener: Signal<Option<DomEventListener>> = use_signal(|| None);

    use_effect(move || {
        let filter = MessageFilter::new(*state.filter_by_iframe_origin().read(), target_url());

        let Some(window) = web_sys_x::window() else {
            return;
        };

        // Capture the Dioxus runtime so the store can be written from the
        // wasm-bindgen callback.
        let runtime = Runtime::current();

        let handler = DomEventListener::new(window, "message", move |e: JsValue| {
            let Some(event) = e.dyn_ref::<web_sys_x::MessageEvent>() else {
                return;
            };
            let raw = event.data();
            let origin = event.origin();

            match filter.admit(raw_payload_type(&raw).as_deref(), &origin) {
                Admission::Accept => {
                    let _guard = RuntimeGuard::new(runtime.clone());
                    let data = payload_to_json(&raw);
                    state
                        .messages()
                        .write()
                        .record(ReceivedMessage::new(data, origin, capture_timestamp()));
                }
                Admission::Marker => debug!("Dropped internal marker message"),
                Admission::ForeignOrigin { expected } => {
                    debug!("Dropped message from {} (expected {})", origin, expected);
                }
            }
        });

        // Replacing the old listener detaches it
        listener.set(Some(handler));
    });

    use_drop(move || {
        if let Ok(mut listener) = listener.try_write() {
            listener.take();
        }
    });
}
