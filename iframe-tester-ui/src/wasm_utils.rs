//! WASM utilities for browser interop
//!
//! # Event Listener Cleanup Pattern
//!
//! A listener attached with a `Closure` must keep that closure alive for as
//! long as it is attached. `closure.forget()` leaks it and leaves the listener
//! attached forever, so instead the closure is stored in a struct whose `Drop`
//! removes the listener:
//!
//! ```ignore
//! let listener = DomEventListener::new(window, "message", callback);
//!
//! // Listener is removed here
//! drop(listener);
//! ```
//!
//! Store the listener in a `Signal<Option<DomEventListener>>` and set it to
//! `None` (or replace it) to detach.

use wasm_bindgen_x::prelude::*;

/// An event listener on a window, document, or element that removes itself when dropped.
pub struct DomEventListener {
    target: web_sys_x::EventTarget,
    event_name: &'static str,
    callback: Closure<dyn FnMut(wasm_bindgen_x::JsValue)>,
}

impl DomEventListener {
    /// Attaches `callback` for `event_name` on `target`.
    pub fn new(
        target: impl Into<web_sys_x::EventTarget>,
        event_name: &'static str,
        callback: impl FnMut(wasm_bindgen_x::JsValue) + 'static,
    ) -> Self {
        let target = target.into();
        let callback: Closure<dyn FnMut(wasm_bindgen_x::JsValue)> =
            Closure::wrap(Box::new(callback));

        target
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .ok();

        Self {
            target,
            event_name,
            callback,
        }
    }
}

impl Drop for DomEventListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// Read a numeric property (e.g. `clientX`) off a raw DOM event
pub fn event_f64(event: &wasm_bindgen_x::JsValue, key: &str) -> Option<f64> {
    js_sys_x::Reflect::get(event, &key.into())
        .ok()
        .and_then(|v| v.as_f64())
}
