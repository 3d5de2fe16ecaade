//! Renderer state store

use dioxus::prelude::*;
use iframe_tester_common::{IframeConfig, MessageLog, PageQuery};

/// All state owned by the renderer page
#[derive(Clone, Debug, PartialEq, Store)]
pub struct RendererState {
    /// Frame configuration, mirrored into the page URL
    pub config: IframeConfig,
    /// Carried through the URL only; nothing renders from it
    pub show_message_events: bool,
    /// Bumped to discard and recreate the iframe
    pub reload_key: u32,
    /// Captured postMessage traffic, most recent first
    pub messages: MessageLog,
    /// Persisted across sessions in local storage
    pub events_sidebar_open: bool,
    pub filter_by_iframe_origin: bool,
    pub attributes_expanded: bool,
}

impl RendererState {
    pub fn new(query: PageQuery, events_sidebar_open: bool) -> Self {
        Self {
            config: query.config,
            show_message_events: query.show_message_events,
            reload_key: 1,
            messages: MessageLog::new(),
            events_sidebar_open,
            filter_by_iframe_origin: true,
            attributes_expanded: false,
        }
    }
}
