//! Iframe attribute catalog and the editable attribute mapping

use crate::QueryError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A recognized iframe attribute shown in the attribute editor
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttributeSpec {
    pub name: &'static str,
    pub description: &'static str,
}

impl AttributeSpec {
    const fn new(name: &'static str, description: &'static str) -> Self {
        Self { name, description }
    }

    /// MDN reference for this attribute
    pub fn docs_url(&self) -> String {
        format!(
            "https://developer.mozilla.org/en-US/docs/Web/HTML/Element/iframe#{}",
            self.name
        )
    }
}

pub const ATTRIBUTE_CATALOG: &[AttributeSpec] = &[
    AttributeSpec::new(
        "allow",
        "Specifies a Permissions Policy for the iframe (e.g., 'camera; microphone')",
    ),
    AttributeSpec::new(
        "allowfullscreen",
        "Set to true to allow the iframe to activate fullscreen mode",
    ),
    AttributeSpec::new(
        "loading",
        "Indicates how the browser should load the iframe (eager or lazy)",
    ),
    AttributeSpec::new(
        "name",
        "A targetable name for the embedded browsing context",
    ),
    AttributeSpec::new(
        "referrerpolicy",
        "Controls which referrer is sent when fetching the iframe's resource",
    ),
    AttributeSpec::new(
        "sandbox",
        "Applies extra restrictions to the content in the frame",
    ),
    AttributeSpec::new(
        "srcdoc",
        "Inline HTML to embed, overriding the src attribute",
    ),
];

/// Attributes the renderer sets itself; user values for these are not guarded against.
const RESERVED: &[&str] = &["src", "width", "height"];

/// Extra iframe attributes keyed by attribute name.
///
/// Empty values stay in the mapping while the user is editing, but only
/// non-empty entries are applied to the frame or emitted in the snippet.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IframeAttributes(BTreeMap<String, String>);

impl IframeAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode the JSON object carried by the `otherAttributes` query parameter.
    ///
    /// Numbers and booleans are stringified; `null` entries are dropped.
    pub fn from_json(raw: &str) -> Result<Self, QueryError> {
        let object: BTreeMap<String, Value> =
            serde_json::from_str(raw).map_err(|e| QueryError::MalformedAttributes {
                msg: e.to_string(),
            })?;

        let mut attributes = BTreeMap::new();
        for (key, value) in object {
            let value = match value {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Null => continue,
                Value::Array(_) | Value::Object(_) => {
                    return Err(QueryError::NonStringAttribute { key });
                }
            };
            attributes.insert(key, value);
        }
        Ok(Self(attributes))
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.0).unwrap_or_else(|_| "{}".to_string())
    }

    /// Current value for `name`, or an empty string when unset
    pub fn get(&self, name: &str) -> &str {
        self.0.get(name).map(String::as_str).unwrap_or("")
    }

    /// Set or overwrite a single attribute. Empty values are kept.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Entries with a non-empty value, in key order
    pub fn applied(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Applied keys that collide with attributes the renderer sets itself
    pub fn conflicting_keys(&self) -> Vec<&str> {
        self.applied()
            .map(|(k, _)| k)
            .filter(|k| RESERVED.contains(&k.to_ascii_lowercase().as_str()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for IframeAttributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order() {
        let names: Vec<_> = ATTRIBUTE_CATALOG.iter().map(|a| a.name).collect();
        assert_eq!(
            names,
            vec![
                "allow",
                "allowfullscreen",
                "loading",
                "name",
                "referrerpolicy",
                "sandbox",
                "srcdoc"
            ]
        );
    }

    #[test]
    fn test_docs_url() {
        assert_eq!(
            ATTRIBUTE_CATALOG[5].docs_url(),
            "https://developer.mozilla.org/en-US/docs/Web/HTML/Element/iframe#sandbox"
        );
    }

    #[test]
    fn test_cleared_value_is_kept_but_not_applied() {
        let mut attrs = IframeAttributes::new();
        attrs.set("sandbox", "allow-scripts");
        attrs.set("sandbox", "");
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs.get("sandbox"), "");
        assert_eq!(attrs.applied().count(), 0);
    }

    #[test]
    fn test_get_unset_is_empty() {
        let attrs = IframeAttributes::new();
        assert_eq!(attrs.get("loading"), "");
    }

    #[test]
    fn test_from_json_stringifies_scalars() {
        let attrs =
            IframeAttributes::from_json(r#"{"allowfullscreen":true,"tabindex":2,"name":null}"#)
                .unwrap();
        assert_eq!(attrs.get("allowfullscreen"), "true");
        assert_eq!(attrs.get("tabindex"), "2");
        assert_eq!(attrs.len(), 2);
    }

    #[test]
    fn test_from_json_rejects_nested_values() {
        let err = IframeAttributes::from_json(r#"{"allow":["camera"]}"#).unwrap_err();
        assert_eq!(
            err,
            QueryError::NonStringAttribute {
                key: "allow".to_string()
            }
        );
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            IframeAttributes::from_json("{not json"),
            Err(QueryError::MalformedAttributes { .. })
        ));
        assert!(matches!(
            IframeAttributes::from_json("[]"),
            Err(QueryError::MalformedAttributes { .. })
        ));
    }

    #[test]
    fn test_conflicting_keys() {
        let attrs: IframeAttributes = [("WIDTH", "10"), ("src", ""), ("loading", "lazy")]
            .into_iter()
            .collect();
        assert_eq!(attrs.conflicting_keys(), vec!["WIDTH"]);
    }

    #[test]
    fn test_to_json_keeps_empty_values() {
        let attrs: IframeAttributes = [("name", ""), ("loading", "lazy")].into_iter().collect();
        assert_eq!(attrs.to_json(), r#"{"loading":"lazy","name":""}"#);
    }
}
