//! Left sidebar: URL, size, auto-reload, attributes, and the code snippet

use super::{AttributeEditor, Checkbox, CodeSnippet};
use dioxus::prelude::*;
use iframe_tester_common::{IframeConfig, DEFAULT_HEIGHT, DEFAULT_WIDTH};

#[component]
pub fn ConfigSidebarView(
    config: IframeConfig,
    attributes_expanded: bool,
    on_url_change: EventHandler<String>,
    on_width_change: EventHandler<String>,
    on_height_change: EventHandler<String>,
    on_auto_reload_change: EventHandler<bool>,
    on_toggle_attributes: EventHandler<()>,
    on_attribute_change: EventHandler<(String, String)>,
) -> Element {
    rsx! {
        div { class: "sidebar",
            div { class: "sidebar-section",
                label { r#for: "url-input", "URL:" }
                input {
                    id: "url-input",
                    r#type: "text",
                    value: "{config.url}",
                    placeholder: "Enter iframe URL",
                    oninput: move |e| on_url_change.call(e.value()),
                }
            }

            div { class: "sidebar-section",
                label { "Size:" }
                div { class: "size-inputs",
                    input {
                        r#type: "text",
                        value: "{config.width}",
                        placeholder: DEFAULT_WIDTH,
                        oninput: move |e| on_width_change.call(e.value()),
                    }
                    span { "×" }
                    input {
                        r#type: "text",
                        value: "{config.height}",
                        placeholder: DEFAULT_HEIGHT,
                        oninput: move |e| on_height_change.call(e.value()),
                    }
                }
            }

            div { class: "sidebar-section",
                Checkbox {
                    id: "auto-reload",
                    checked: config.auto_reload,
                    onchange: move |checked| on_auto_reload_change.call(checked),
                    label: "Auto-reload every 5s",
                }
            }

            AttributeEditor {
                attributes: config.attributes.clone(),
                expanded: attributes_expanded,
                on_toggle: on_toggle_attributes,
                on_change: on_attribute_change,
            }

            CodeSnippet { config: config.clone() }
        }
    }
}
