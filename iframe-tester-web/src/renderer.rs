//! Connects the renderer store to the views and the browser

use crate::auto_reload::use_auto_reload;
use crate::location::{read_page_query, sync_location};
use crate::message_capture::use_message_capture;
use crate::storage::{self, EVENTS_SIDEBAR_KEY};
use dioxus::prelude::*;
use iframe_tester_common::{FrameResize, IframeConfig, PageQuery};
use iframe_tester_ui::stores::{RendererState, RendererStateStoreExt};
use iframe_tester_ui::{ConfigSidebarView, EventsSidebarView, FrameStage, PageHeader};

/// Apply an edit to the frame configuration
fn update_config(state: Store<RendererState>, edit: impl FnOnce(&mut IframeConfig)) {
    let mut config = state.config().read().clone();
    edit(&mut config);
    state.config().set(config);
}

/// Mirror the configuration into the address bar after every change
fn use_location_sync(state: Store<RendererState>) {
    use_effect(move || {
        let query = PageQuery {
            config: state.config().read().clone(),
            show_message_events: *state.show_message_events().read(),
        };
        sync_location(&query);
    });
}

#[component]
pub fn Renderer() -> Element {
    let state = use_store(|| {
        let query = read_page_query();
        let events_sidebar_open = storage::get_json_bool(EVENTS_SIDEBAR_KEY).unwrap_or(false);
        RendererState::new(query, events_sidebar_open)
    });

    use_location_sync(state);
    use_auto_reload(state);
    use_message_capture(state);

    let config = state.config().read().clone();
    let reload_key = *state.reload_key().read();
    let attributes_expanded = *state.attributes_expanded().read();

    rsx! {
        PageHeader {}
        div { class: "container",
            ConfigSidebarView {
                config: config.clone(),
                attributes_expanded,
                on_url_change: move |url| update_config(state, |c| c.url = url),
                on_width_change: move |width| update_config(state, |c| c.width = width),
                on_height_change: move |height| update_config(state, |c| c.height = height),
                on_auto_reload_change: move |enabled| update_config(state, |c| c.auto_reload = enabled),
                on_toggle_attributes: move |_| {
                    let expanded = *state.attributes_expanded().read();
                    state.attributes_expanded().set(!expanded);
                },
                on_attribute_change: move |(name, value): (String, String)| {
                    update_config(state, |c| c.attributes.set(name, value))
                },
            }

            FrameStage {
                config: config.clone(),
                reload_key,
                on_resize: move |resize| match resize {
                    FrameResize::Width(width) => update_config(state, |c| c.width = width),
                    FrameResize::Height(height) => update_config(state, |c| c.height = height),
                },
            }

            EventsSidebarView {
                state,
                on_toggle: move |_| {
                    let open = !*state.events_sidebar_open().read();
                    state.events_sidebar_open().set(open);
                    storage::set_json_bool(EVENTS_SIDEBAR_KEY, open);
                },
                on_clear: move |_| state.messages().write().clear(),
                on_filter_change: move |enabled| state.filter_by_iframe_origin().set(enabled),
            }
        }
    }
}
