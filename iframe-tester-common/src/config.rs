//! Iframe configuration and its query-string form
//!
//! The whole configuration lives in the page URL so a reload or a copied
//! link reproduces it. Parsing is lenient: anything missing or malformed
//! falls back to the defaults below.

use crate::{IframeAttributes, QueryError};
use serde::Serialize;
use tracing::warn;

pub const DEFAULT_URL: &str = "https://www.youtube.com/embed/MBRqu0YOH14";
pub const DEFAULT_WIDTH: &str = "640px";
pub const DEFAULT_HEIGHT: &str = "480px";

const KEY_URL: &str = "url";
const KEY_WIDTH: &str = "width";
const KEY_HEIGHT: &str = "height";
const KEY_OTHER_ATTRIBUTES: &str = "otherAttributes";
const KEY_AUTO_RELOAD: &str = "autoReload";
const KEY_SHOW_MESSAGE_EVENTS: &str = "showMessageEvents";

/// Everything that determines how the embedded frame is rendered
#[derive(Clone, Debug, PartialEq)]
pub struct IframeConfig {
    pub url: String,
    /// CSS length, e.g. `640px`
    pub width: String,
    /// CSS length, e.g. `480px`
    pub height: String,
    pub attributes: IframeAttributes,
    pub auto_reload: bool,
}

impl Default for IframeConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            width: DEFAULT_WIDTH.to_string(),
            height: DEFAULT_HEIGHT.to_string(),
            attributes: IframeAttributes::new(),
            auto_reload: false,
        }
    }
}

/// Page state carried in the query string.
///
/// `show_message_events` is read and written back but nothing renders from it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageQuery {
    pub config: IframeConfig,
    pub show_message_events: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryFields<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    auto_reload: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    show_message_events: Option<&'static str>,
    url: &'a str,
    width: &'a str,
    height: &'a str,
    other_attributes: String,
}

impl PageQuery {
    /// Decode a query string, replacing malformed `otherAttributes` with an empty mapping.
    pub fn parse(search: &str) -> Self {
        let (query, error) = Self::decode(search);
        if let Some(e) = error {
            warn!("Ignoring {}: {}", KEY_OTHER_ATTRIBUTES, e);
        }
        query
    }

    /// Decode a query string, failing if `otherAttributes` is malformed
    pub fn try_parse(search: &str) -> Result<Self, QueryError> {
        match Self::decode(search) {
            (query, None) => Ok(query),
            (_, Some(e)) => Err(e),
        }
    }

    fn decode(search: &str) -> (Self, Option<QueryError>) {
        let search = search.strip_prefix('?').unwrap_or(search);
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(search).unwrap_or_default();

        // First occurrence wins; empty values count as absent.
        let get = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
                .filter(|v| !v.is_empty())
        };

        let (attributes, error) = match get(KEY_OTHER_ATTRIBUTES) {
            None => (IframeAttributes::new(), None),
            Some(raw) => match IframeAttributes::from_json(raw) {
                Ok(attributes) => (attributes, None),
                Err(e) => (IframeAttributes::new(), Some(e)),
            },
        };

        let config = IframeConfig {
            url: get(KEY_URL).unwrap_or(DEFAULT_URL).to_string(),
            width: get(KEY_WIDTH).unwrap_or(DEFAULT_WIDTH).to_string(),
            height: get(KEY_HEIGHT).unwrap_or(DEFAULT_HEIGHT).to_string(),
            attributes,
            auto_reload: get(KEY_AUTO_RELOAD).is_some(),
        };

        let query = Self {
            config,
            show_message_events: get(KEY_SHOW_MESSAGE_EVENTS).is_some(),
        };
        (query, error)
    }

    /// Encode for `history.replaceState`, without the leading `?`
    pub fn to_query_string(&self) -> String {
        let fields = QueryFields {
            auto_reload: self.config.auto_reload.then_some("1"),
            show_message_events: self.show_message_events.then_some("1"),
            url: &self.config.url,
            width: &self.config.width,
            height: &self.config.height,
            other_attributes: self.config.attributes.to_json(),
        };
        serde_urlencoded::to_string(&fields).unwrap_or_else(|e| {
            warn!("Failed to encode page query: {}", e);
            String::new()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_uses_defaults() {
        let query = PageQuery::parse("");
        assert_eq!(query.config, IframeConfig::default());
        assert!(!query.show_message_events);
    }

    #[test]
    fn test_parse_all_fields() {
        let query = PageQuery::parse(
            "?autoReload=1&showMessageEvents=yes&url=https%3A%2F%2Fexample.com%2Fpage&width=300px&height=50%25&otherAttributes=%7B%22loading%22%3A%22lazy%22%7D",
        );
        assert!(query.config.auto_reload);
        assert!(query.show_message_events);
        assert_eq!(query.config.url, "https://example.com/page");
        assert_eq!(query.config.width, "300px");
        assert_eq!(query.config.height, "50%");
        assert_eq!(query.config.attributes.get("loading"), "lazy");
    }

    #[test]
    fn test_empty_values_fall_back() {
        let query = PageQuery::parse("url=&width=&autoReload=");
        assert_eq!(query.config.url, DEFAULT_URL);
        assert_eq!(query.config.width, DEFAULT_WIDTH);
        assert!(!query.config.auto_reload);
    }

    #[test]
    fn test_first_duplicate_wins() {
        let query = PageQuery::parse("width=10px&width=20px");
        assert_eq!(query.config.width, "10px");
    }

    #[test]
    fn test_plus_decodes_to_space() {
        let query = PageQuery::parse("url=a+b");
        assert_eq!(query.config.url, "a b");
    }

    #[test]
    fn test_malformed_attributes_fail_soft() {
        let query = PageQuery::parse("width=200px&otherAttributes=%7Bbroken");
        assert!(query.config.attributes.is_empty());
        assert_eq!(query.config.width, "200px");
    }

    #[test]
    fn test_try_parse_surfaces_malformed_attributes() {
        let result = PageQuery::try_parse("otherAttributes=%7Bbroken");
        assert!(matches!(result, Err(QueryError::MalformedAttributes { .. })));
    }

    #[test]
    fn test_serialize_order_and_flags() {
        let query = PageQuery {
            config: IframeConfig {
                auto_reload: true,
                ..IframeConfig::default()
            },
            show_message_events: false,
        };
        assert_eq!(
            query.to_query_string(),
            "autoReload=1&url=https%3A%2F%2Fwww.youtube.com%2Fembed%2FMBRqu0YOH14&width=640px&height=480px&otherAttributes=%7B%7D"
        );
    }

    #[test]
    fn test_round_trip() {
        let mut attributes = IframeAttributes::new();
        attributes.set("sandbox", "allow-scripts allow-forms");
        attributes.set("name", "");
        attributes.set("srcdoc", "<p title=\"x\">a & b</p>");
        let query = PageQuery {
            config: IframeConfig {
                url: "https://example.com/embed?a=1&b=two words#frag".to_string(),
                width: "1024px".to_string(),
                height: "75vh".to_string(),
                attributes,
                auto_reload: true,
            },
            show_message_events: true,
        };
        assert_eq!(PageQuery::parse(&query.to_query_string()), query);
    }

    #[test]
    fn test_truthy_flags_normalize() {
        let query = PageQuery::parse("autoReload=true&showMessageEvents=0");
        let encoded = query.to_query_string();
        assert!(encoded.starts_with("autoReload=1&showMessageEvents=1&"));
        assert_eq!(PageQuery::parse(&encoded), query);
    }
}
