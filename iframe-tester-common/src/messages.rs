//! Inbound `postMessage` admission and the captured message log

use serde_json::{json, Value};
use std::collections::VecDeque;

/// Payload `type` values reserved for the tool's own timer traffic
pub const MARKER_TYPES: &[&str] = &["TIMER_TICK", "TIMER_SYNC"];

/// Whether a payload's `type` field names an internal marker
pub fn is_marker(payload_type: Option<&str>) -> bool {
    payload_type.is_some_and(|t| MARKER_TYPES.contains(&t))
}

/// The string `type` field of a decoded payload, if it has one
pub fn payload_type(data: &Value) -> Option<&str> {
    data.get("type").and_then(Value::as_str)
}

/// Origin of `url` as the browser serializes it, or `None` if it doesn't parse
pub fn expected_origin(url: &str) -> Option<String> {
    url::Url::parse(url)
        .ok()
        .map(|u| u.origin().ascii_serialization())
}

/// Local capture time, e.g. `3:07:42 PM`
pub fn capture_timestamp() -> String {
    chrono::Local::now().format("%-I:%M:%S %p").to_string()
}

/// Outcome of checking an inbound message
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Admission {
    Accept,
    /// Internal timer marker, always dropped
    Marker,
    /// Sender doesn't match the configured frame's origin
    ForeignOrigin { expected: String },
}

/// Decides which inbound messages get recorded
#[derive(Clone, Debug, PartialEq)]
pub struct MessageFilter {
    pub filter_by_origin: bool,
    pub target_url: String,
}

impl MessageFilter {
    pub fn new(filter_by_origin: bool, target_url: impl Into<String>) -> Self {
        Self {
            filter_by_origin,
            target_url: target_url.into(),
        }
    }

    /// Markers are dropped first. `payload_type` must come from the raw
    /// payload, since the decoded copy loses values JSON can't express.
    /// Origin filtering is skipped when the target URL doesn't parse.
    pub fn admit(&self, payload_type: Option<&str>, origin: &str) -> Admission {
        if is_marker(payload_type) {
            return Admission::Marker;
        }
        if self.filter_by_origin {
            if let Some(expected) = expected_origin(&self.target_url) {
                if origin != expected {
                    return Admission::ForeignOrigin { expected };
                }
            }
        }
        Admission::Accept
    }
}

/// A message captured from the embedded frame
#[derive(Clone, Debug, PartialEq)]
pub struct ReceivedMessage {
    pub data: Value,
    pub origin: String,
    pub timestamp: String,
}

impl ReceivedMessage {
    pub fn new(data: Value, origin: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            data,
            origin: origin.into(),
            timestamp: timestamp.into(),
        }
    }

    /// Pretty JSON for the events list. The origin is redundant while
    /// filtering by it, so it is only included when filtering is off.
    pub fn display_json(&self, include_origin: bool) -> String {
        let shown = if include_origin {
            json!({
                "data": self.data,
                "origin": self.origin,
                "timestamp": self.timestamp,
            })
        } else {
            json!({
                "data": self.data,
                "timestamp": self.timestamp,
            })
        };
        serde_json::to_string_pretty(&shown).unwrap_or_default()
    }
}

/// Captured messages, most recent first. Grows until cleared.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MessageLog {
    entries: VecDeque<ReceivedMessage>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, message: ReceivedMessage) {
        self.entries.push_front(message);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReceivedMessage> {
        self.entries.iter()
    }
}
