use dioxus::prelude::*;

#[component]
pub fn PageHeader() -> Element {
    rsx! {
        header { class: "page-header",
            h1 { "iframe tester" }
            p { class: "subtitle",
                "Enter a URL to set as the iframe, all possible params are saved into the URL so you can refresh/share."
            }
        }
    }
}
