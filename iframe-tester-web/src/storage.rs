//! Local storage helpers

/// Persisted open/closed state of the events sidebar
pub const EVENTS_SIDEBAR_KEY: &str = "eventsSidebarOpen";

pub fn get_storage() -> Option<web_sys_x::Storage> {
    web_sys_x::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn get_string(key: &str) -> Option<String> {
    get_storage().and_then(|s| s.get_item(key).ok().flatten())
}

pub fn set_string(key: &str, value: &str) {
    if let Some(storage) = get_storage() {
        let _ = storage.set_item(key, value);
    }
}

/// Read a JSON boolean. Missing or corrupt values read as `None`.
pub fn get_json_bool(key: &str) -> Option<bool> {
    get_string(key).and_then(|v| parse_json_bool(&v))
}

pub fn set_json_bool(key: &str, value: bool) {
    set_string(key, &serde_json::Value::Bool(value).to_string());
}

fn parse_json_bool(raw: &str) -> Option<bool> {
    serde_json::from_str(raw).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_bool() {
        assert_eq!(parse_json_bool("true"), Some(true));
        assert_eq!(parse_json_bool(" false "), Some(false));
        assert_eq!(parse_json_bool("\"true\""), None);
        assert_eq!(parse_json_bool("1"), None);
        assert_eq!(parse_json_bool(""), None);
    }
}
