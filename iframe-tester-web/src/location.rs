//! Page URL as the source and sink of the frame configuration

use iframe_tester_common::PageQuery;
use tracing::{info, warn};

/// Decode the current `window.location.search`
pub fn read_page_query() -> PageQuery {
    let search = web_sys_x::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    let query = PageQuery::parse(&search);
    info!(
        "Loaded configuration for {} ({} x {})",
        query.config.url, query.config.width, query.config.height
    );
    query
}

/// Replace the current history entry with `query` and retitle the page.
///
/// Never touches renderer state, so calling it from an effect can't loop.
pub fn sync_location(query: &PageQuery) {
    let Some(window) = web_sys_x::window() else {
        return;
    };
    let location = window.location();
    let (Ok(origin), Ok(pathname)) = (location.origin(), location.pathname()) else {
        return;
    };

    let title = format!("Iframe tester: {origin}");
    let url = format!("{pathname}?{}", query.to_query_string());

    match window.history() {
        Ok(history) => {
            if let Err(e) =
                history.replace_state_with_url(&js_sys_x::Object::new(), &title, Some(&url))
            {
                warn!("Failed to replace history state: {:?}", e);
            }
        }
        Err(e) => warn!("History API unavailable: {:?}", e),
    }

    if let Some(document) = window.document() {
        document.set_title(&title);
    }
}
