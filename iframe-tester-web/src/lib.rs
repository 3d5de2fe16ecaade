//! iframe tester - preview how a URL renders inside an iframe
//!
//! Size, attributes and auto-reload live in the page URL so a configuration
//! can be shared by copying the address bar.

pub mod auto_reload;
pub mod location;
pub mod message_capture;
pub mod renderer;
pub mod storage;

use dioxus::prelude::*;
use renderer::Renderer;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Renderer {}
    }
}
