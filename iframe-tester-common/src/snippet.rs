use crate::IframeConfig;

/// Copy-pasteable `<iframe>` markup for the current configuration.
///
/// Only attributes with a non-empty value are emitted. Values are written
/// verbatim.
pub fn render_snippet(config: &IframeConfig) -> String {
    let mut out = format!(
        "<iframe\n  width=\"{}\"\n  height=\"{}\"\n  src=\"{}\"",
        config.width, config.height, config.url
    );
    for (name, value) in config.attributes.applied() {
        out.push_str(&format!("\n  {name}=\"{value}\""));
    }
    out.push_str("\n></iframe>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_without_attributes() {
        let config = IframeConfig::default();
        assert_eq!(
            render_snippet(&config),
            "<iframe\n  width=\"640px\"\n  height=\"480px\"\n  src=\"https://www.youtube.com/embed/MBRqu0YOH14\"\n></iframe>"
        );
    }

    #[test]
    fn test_snippet_lists_applied_attributes() {
        let mut config = IframeConfig {
            url: "https://example.com".to_string(),
            ..IframeConfig::default()
        };
        config.attributes.set("sandbox", "allow-scripts");
        config.attributes.set("loading", "lazy");
        config.attributes.set("name", "");
        assert_eq!(
            render_snippet(&config),
            "<iframe\n  width=\"640px\"\n  height=\"480px\"\n  src=\"https://example.com\"\n  loading=\"lazy\"\n  sandbox=\"allow-scripts\"\n></iframe>"
        );
    }

    #[test]
    fn test_cleared_attribute_leaves_snippet() {
        let mut config = IframeConfig::default();
        config.attributes.set("sandbox", "allow-scripts");
        assert!(render_snippet(&config).contains("sandbox=\"allow-scripts\""));

        config.attributes.set("sandbox", "");
        assert!(!render_snippet(&config).contains("sandbox"));
        assert_eq!(config.attributes.get("sandbox"), "");
    }

    #[test]
    fn test_snippet_tracks_size_changes() {
        let mut config = IframeConfig::default();
        config.width = "690px".to_string();
        assert!(render_snippet(&config).contains("width=\"690px\""));
    }
}
