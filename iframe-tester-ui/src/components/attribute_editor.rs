//! Collapsible editor for the extra iframe attributes

use dioxus::prelude::*;
use iframe_tester_common::{IframeAttributes, ATTRIBUTE_CATALOG};

/// One text input per catalog attribute, with its description and MDN link
#[component]
pub fn AttributeEditor(
    attributes: IframeAttributes,
    expanded: bool,
    on_toggle: EventHandler<()>,
    /// Called with (attribute name, new value); empty values are kept
    on_change: EventHandler<(String, String)>,
) -> Element {
    rsx! {
        div { class: "sidebar-section",
            div {
                class: "collapsible-header",
                onclick: move |_| on_toggle.call(()),
                h3 { "Iframe Attributes" }
                span { class: if expanded { "collapse-icon expanded" } else { "collapse-icon" },
                    "▼"
                }
            }
            if expanded {
                div { class: "attributes-list",
                    for spec in ATTRIBUTE_CATALOG.iter() {
                        div { key: "{spec.name}", class: "attribute-item",
                            label {
                                a {
                                    href: spec.docs_url(),
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    "{spec.name}"
                                }
                            }
                            p { class: "attribute-description", "{spec.description}" }
                            input {
                                r#type: "text",
                                value: attributes.get(spec.name),
                                oninput: move |e| on_change.call((spec.name.to_string(), e.value())),
                            }
                        }
                    }
                }
            }
        }
    }
}
