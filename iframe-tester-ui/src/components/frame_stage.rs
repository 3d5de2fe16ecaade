//! The live iframe with four drag handles for resizing it

use crate::wasm_utils::{event_f64, DomEventListener};
use dioxus::dioxus_core::{Attribute, Runtime, RuntimeGuard};
use dioxus::prelude::*;
use iframe_tester_common::{
    DragOrigin, FrameResize, IframeAttributes, IframeConfig, ResizeEdge, ATTRIBUTE_CATALOG,
};
use std::cell::RefCell;
use tracing::warn;

thread_local! {
    static EXTRA_ATTRIBUTE_NAMES: RefCell<Vec<&'static str>> = const { RefCell::new(Vec::new()) };
}

/// Static name for a DOM attribute. Catalog names are already static; names
/// that only arrive through the page URL are interned once per distinct name.
fn attribute_name(name: &str) -> &'static str {
    if let Some(spec) = ATTRIBUTE_CATALOG.iter().find(|spec| spec.name == name) {
        return spec.name;
    }
    EXTRA_ATTRIBUTE_NAMES.with(|names| {
        let mut names = names.borrow_mut();
        if let Some(existing) = names.iter().find(|n| **n == name) {
            return *existing;
        }
        let interned: &'static str = Box::leak(name.to_owned().into_boxed_str());
        names.push(interned);
        interned
    })
}

/// Non-empty user attributes, spread onto the iframe as-is
fn frame_attributes(attributes: &IframeAttributes) -> Vec<Attribute> {
    let conflicts = attributes.conflicting_keys();
    if !conflicts.is_empty() {
        warn!("Attributes override renderer-managed ones: {:?}", conflicts);
    }
    attributes
        .applied()
        .map(|(name, value)| Attribute::new(attribute_name(name), value.to_string(), None, false))
        .collect()
}

/// Cleanup handle for drag operation listeners
struct DragListeners {
    _mousemove: DomEventListener,
    _mouseup: DomEventListener,
}

/// Renders the configured iframe, keyed by `reload_key` so every bump
/// discards and recreates it.
#[component]
pub fn FrameStage(
    config: IframeConfig,
    reload_key: u32,
    /// Called with the new width or height on every pointer move while dragging
    on_resize: EventHandler<FrameResize>,
) -> Element {
    let mut drag: Signal<Option<DragOrigin>> = use_signal(|| None);
    let mut drag_listeners: Signal<Option<DragListeners>> = use_signal(|| None);

    // Document-level listeners live only while a drag is in progress
    use_effect(move || {
        let Some(origin) = drag() else {
            drag_listeners.set(None);
            return;
        };

        let Some(document) = web_sys_x::window().and_then(|w| w.document()) else {
            return;
        };

        let runtime = Runtime::current();
        let mousemove = DomEventListener::new(
            document.clone(),
            "mousemove",
            move |e: wasm_bindgen_x::JsValue| {
                let (Some(x), Some(y)) = (event_f64(&e, "clientX"), event_f64(&e, "clientY"))
                else {
                    return;
                };
                let _guard = RuntimeGuard::new(runtime.clone());
                on_resize.call(origin.resize_to(x, y));
            },
        );
        let mouseup = DomEventListener::new(document, "mouseup", move |_| {
            drag.set(None);
        });

        drag_listeners.set(Some(DragListeners {
            _mousemove: mousemove,
            _mouseup: mouseup,
        }));
    });

    use_drop(move || {
        if let Ok(mut listeners) = drag_listeners.try_write() {
            listeners.take();
        }
    });

    let on_drag_start = EventHandler::new({
        let width = config.width.clone();
        let height = config.height.clone();
        move |(edge, x, y): (ResizeEdge, f64, f64)| {
            drag.set(Some(DragOrigin::begin(edge, x, y, &width, &height)));
        }
    });

    let extra = frame_attributes(&config.attributes);
    let is_resizing = drag().is_some();

    rsx! {
        div { class: "main-content",
            div { class: if is_resizing { "iframe-container is-resizing" } else { "iframe-container" },
                for key in [reload_key] {
                    iframe {
                        key: "{key}",
                        width: "{config.width}",
                        height: "{config.height}",
                        src: "{config.url}",
                        ..extra.clone(),
                    }
                }
                for edge in ResizeEdge::ALL {
                    ResizeHandle { key: "{edge}", edge, on_drag_start }
                }
            }
        }
    }
}

/// An edge handle; reports the edge and pointer position when a drag begins
#[component]
fn ResizeHandle(edge: ResizeEdge, on_drag_start: EventHandler<(ResizeEdge, f64, f64)>) -> Element {
    let class = format!("resize-handle resize-handle-{}", edge.as_str());
    let cursor = if edge.is_horizontal() {
        "cursor: col-resize;"
    } else {
        "cursor: row-resize;"
    };

    rsx! {
        div {
            class,
            style: cursor,
            onmousedown: move |e: MouseEvent| {
                e.prevent_default();
                let point = e.client_coordinates();
                on_drag_start.call((edge, point.x, point.y));
            },
        }
    }
}
