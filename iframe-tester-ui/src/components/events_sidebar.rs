//! Events sidebar view component
//!
//! ## Reactive State Pattern
//! Accepts `ReadStore<RendererState>` and reads fields via lenses, so the
//! list only re-renders when messages or the origin filter change.

use super::Checkbox;
use crate::stores::{RendererState, RendererStateStoreExt};
use dioxus::prelude::*;

/// Collapsible right-hand panel listing captured postMessage traffic
#[component]
pub fn EventsSidebarView(
    state: ReadStore<RendererState>,
    on_toggle: EventHandler<()>,
    on_clear: EventHandler<()>,
    on_filter_change: EventHandler<bool>,
) -> Element {
    let is_open = *state.events_sidebar_open().read();

    rsx! {
        div { class: if is_open { "events-sidebar open" } else { "events-sidebar" },
            div {
                class: "events-sidebar-toggle",
                onclick: move |_| on_toggle.call(()),
                span { class: "events-label", "EVENTS" }
            }
            if is_open {
                EventsPanel { state, on_clear, on_filter_change }
            }
        }
    }
}

#[component]
fn EventsPanel(
    state: ReadStore<RendererState>,
    on_clear: EventHandler<()>,
    on_filter_change: EventHandler<bool>,
) -> Element {
    let messages = state.messages().read().clone();
    let filter_by_origin = *state.filter_by_iframe_origin().read();
    let count = messages.len();

    rsx! {
        div { class: "events-sidebar-content",
            div { class: "events-sidebar-header",
                h3 { "Received Messages ({count})" }
                div { class: "header-controls",
                    if !messages.is_empty() {
                        button {
                            class: "clear-button",
                            onclick: move |_| on_clear.call(()),
                            "Clear"
                        }
                    }
                }
            }
            div { class: "events-filter",
                Checkbox {
                    checked: filter_by_origin,
                    onchange: move |checked| on_filter_change.call(checked),
                    label: "Only show events from iframe origin",
                }
            }
            div { class: "events-list",
                if messages.is_empty() {
                    p { class: "no-events", "No events received yet" }
                } else {
                    ul {
                        for (index , message) in messages.iter().enumerate() {
                            li { key: "{index}",
                                pre {
                                    code { {message.display_json(!filter_by_origin)} }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
