//! Checkbox component

use dioxus::prelude::*;

/// A labelled checkbox
#[component]
pub fn Checkbox(
    checked: bool,
    onchange: EventHandler<bool>,
    label: &'static str,
    #[props(default)] id: Option<&'static str>,
) -> Element {
    rsx! {
        label { class: "checkbox", r#for: id,
            input {
                r#type: "checkbox",
                id,
                checked,
                onchange: move |e| onchange.call(e.checked()),
            }
            "{label}"
        }
    }
}
