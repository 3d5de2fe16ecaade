//! Embeddable markup for the current configuration

use dioxus::prelude::*;
use iframe_tester_common::{render_snippet, IframeConfig};

#[component]
pub fn CodeSnippet(config: IframeConfig) -> Element {
    let snippet = render_snippet(&config);

    rsx! {
        div { class: "sidebar-section code-section",
            h3 { "Code:" }
            pre {
                code { "{snippet}" }
            }
        }
    }
}
