mod attributes;
mod config;
mod error;
mod messages;
mod reload;
mod resize;
mod snippet;

pub use attributes::{AttributeSpec, IframeAttributes, ATTRIBUTE_CATALOG};
pub use config::{IframeConfig, PageQuery, DEFAULT_HEIGHT, DEFAULT_URL, DEFAULT_WIDTH};
pub use error::QueryError;
pub use messages::{
    capture_timestamp, expected_origin, is_marker, payload_type, Admission, MessageFilter,
    MessageLog, ReceivedMessage, MARKER_TYPES,
};
pub use reload::{AutoReload, Transition, RELOAD_INTERVAL_MS};
pub use resize::{parse_css_pixels, DragOrigin, FrameResize, ResizeEdge, MIN_FRAME_SIZE};
pub use snippet::render_snippet;
